//! Sourced-runner state management.

use rand::seq::SliceRandom;
use rand::{Rng, thread_rng};
use tokio::task::JoinHandle;

use crate::models::TriviaQuestion;
use crate::sourcing::QuizConfig;

/// Seconds granted per question.
pub const QUESTION_SECONDS: u32 = 30;

/// Screens of the sourced quiz runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Picking category, difficulty and question count.
    Welcome,
    /// Sourcing questions.
    Loading,
    /// Answering questions.
    Quiz,
    /// Viewing the round summary.
    Results,
}

/// Mutable state of one quiz round. Only the runner's methods touch it.
pub struct Session {
    questions: Vec<TriviaQuestion>,
    pub current_index: usize,
    pub score: usize,
    pub answer_locked: bool,
}

impl Session {
    fn new(questions: Vec<TriviaQuestion>) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
            answer_locked: false,
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&TriviaQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    fn reset(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.answer_locked = false;
    }
}

/// Per-question countdown.
pub struct TimerState {
    pub seconds_remaining: u32,
    pub running: bool,
}

impl TimerState {
    fn idle() -> Self {
        Self {
            seconds_remaining: QUESTION_SECONDS,
            running: false,
        }
    }

    fn fresh() -> Self {
        Self {
            seconds_remaining: QUESTION_SECONDS,
            running: true,
        }
    }
}

/// Application state for the sourced quiz runner.
pub struct TriviaApp {
    pub screen: Screen,
    pub config: QuizConfig,
    pub session: Session,
    /// The current question's answers in display order, shuffled once on
    /// question entry.
    pub answers: Vec<String>,
    pub highlight: usize,
    pub chosen: Option<usize>,
    pub timer: TimerState,
    pub from_fallback: bool,
    pub should_quit: bool,
    timer_task: Option<JoinHandle<()>>,
}

impl TriviaApp {
    pub fn new(config: QuizConfig) -> Self {
        Self {
            screen: Screen::Welcome,
            config,
            session: Session::new(Vec::new()),
            answers: Vec::new(),
            highlight: 0,
            chosen: None,
            timer: TimerState::idle(),
            from_fallback: false,
            should_quit: false,
            timer_task: None,
        }
    }

    pub fn begin_loading(&mut self) {
        self.screen = Screen::Loading;
    }

    /// Install a sourced question list and enter the quiz at question 0.
    pub fn install_questions(&mut self, questions: Vec<TriviaQuestion>, from_fallback: bool) {
        self.session = Session::new(questions);
        self.from_fallback = from_fallback;
        self.screen = Screen::Quiz;
        self.enter_question();
    }

    /// Prepare the current question for display: shuffle its answers and
    /// clear the round lock. Ends the quiz when the index has run past the
    /// question list.
    pub fn enter_question(&mut self) {
        let Some(question) = self.session.current_question() else {
            self.end_quiz();
            return;
        };

        let mut answers = question.incorrect_answers.clone();
        answers.push(question.correct_answer.clone());
        answers.shuffle(&mut thread_rng());

        self.answers = answers;
        self.highlight = 0;
        self.chosen = None;
        self.session.answer_locked = false;
    }

    pub fn highlight_next(&mut self) {
        if !self.session.answer_locked && !self.answers.is_empty() {
            self.highlight = (self.highlight + 1) % self.answers.len();
        }
    }

    pub fn highlight_previous(&mut self) {
        if !self.session.answer_locked && !self.answers.is_empty() {
            self.highlight = (self.highlight + self.answers.len() - 1) % self.answers.len();
        }
    }

    /// Lock in an answer. The first call for a question stops the timer,
    /// reveals the correct answer and scores a match; later calls are
    /// no-ops.
    pub fn select_answer(&mut self, index: usize) {
        if self.session.answer_locked || index >= self.answers.len() {
            return;
        }
        let Some(correct) = self.session.current_question().map(|q| q.correct_answer.clone())
        else {
            return;
        };

        self.session.answer_locked = true;
        self.stop_timer();
        self.chosen = Some(index);
        if self.answers[index] == correct {
            self.session.score += 1;
        }
    }

    /// Move to the next question. Returns true while the quiz is still
    /// running, so the caller knows to restart the countdown.
    pub fn advance(&mut self) -> bool {
        self.session.current_index += 1;
        if self.session.is_finished() {
            self.end_quiz();
            false
        } else {
            self.enter_question();
            true
        }
    }

    /// Timeout path: lock a uniformly random rendered answer through the
    /// same flow as a key press, so a lucky pick still scores.
    pub fn time_up(&mut self) {
        if self.session.answer_locked || self.answers.is_empty() {
            return;
        }
        let index = thread_rng().gen_range(0..self.answers.len());
        self.select_answer(index);
    }

    pub fn end_quiz(&mut self) {
        self.stop_timer();
        self.screen = Screen::Results;
    }

    /// Replay the same questions with counters reset.
    pub fn play_again(&mut self) {
        self.session.reset();
        self.screen = Screen::Quiz;
        self.enter_question();
    }

    pub fn to_welcome(&mut self) {
        self.stop_timer();
        self.screen = Screen::Welcome;
    }

    /// Install a freshly spawned countdown task, cancelling any prior one
    /// so two countdowns never run at once.
    pub fn arm_timer(&mut self, task: JoinHandle<()>) {
        self.stop_timer();
        self.timer = TimerState::fresh();
        self.timer_task = Some(task);
    }

    pub fn stop_timer(&mut self) {
        self.timer.running = false;
        if let Some(task) = self.timer_task.take() {
            task.abort();
        }
    }

    /// Advance the countdown by one second. Returns false once the timer
    /// is no longer live (stopped elsewhere, or expired just now).
    pub fn tick_timer(&mut self) -> bool {
        if !self.timer.running {
            return false;
        }
        self.timer.seconds_remaining = self.timer.seconds_remaining.saturating_sub(1);
        if self.timer.seconds_remaining == 0 {
            self.time_up();
            return false;
        }
        true
    }

    /// The round's question target. This is the requested amount, not the
    /// loaded count: when the fallback bank cannot fill the request, the
    /// round still shows and grades out of what was asked for.
    pub fn total_questions(&self) -> usize {
        self.config.amount
    }

    /// How far into the round the player is, in whole percent.
    pub fn progress_percent(&self) -> u16 {
        let total = self.total_questions();
        if total == 0 {
            return 0;
        }
        let done = self.session.current_index + 1;
        (((done as f64 / total as f64) * 100.0).round() as u16).min(100)
    }

    /// Final score as a rounded percentage.
    pub fn score_percentage(&self) -> u32 {
        let total = self.total_questions();
        if total == 0 {
            return 0;
        }
        ((self.session.score as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Results-screen verdict for a score percentage.
pub fn performance_message(percentage: u32) -> &'static str {
    match percentage {
        p if p >= 90 => "Excellent! You're a quiz master!",
        p if p >= 80 => "Great job! You really know your stuff!",
        p if p >= 70 => "Good work! You have solid knowledge!",
        p if p >= 60 => "Not bad! Keep learning and improving!",
        p if p >= 50 => "You passed! Practice makes perfect!",
        _ => "Keep studying! Every expert was once a beginner!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_questions(count: usize) -> Vec<TriviaQuestion> {
        (0..count)
            .map(|i| {
                TriviaQuestion::new(
                    &format!("Question {i}?"),
                    &format!("right {i}"),
                    ["wrong a", "wrong b", "wrong c"],
                    "Geography",
                    "easy",
                )
            })
            .collect()
    }

    fn quiz_app(count: usize) -> TriviaApp {
        let mut app = TriviaApp::new(QuizConfig {
            amount: count,
            ..QuizConfig::default()
        });
        app.install_questions(sample_questions(count), false);
        app
    }

    fn correct_index(app: &TriviaApp) -> usize {
        let correct = &app.session.current_question().unwrap().correct_answer;
        app.answers.iter().position(|a| a == correct).unwrap()
    }

    #[test]
    fn entering_a_question_shuffles_all_four_answers() {
        let app = quiz_app(3);

        assert_eq!(app.answers.len(), 4);
        let mut sorted = app.answers.clone();
        sorted.sort();
        let mut expected = vec![
            "right 0".to_string(),
            "wrong a".to_string(),
            "wrong b".to_string(),
            "wrong c".to_string(),
        ];
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn correct_selection_scores_and_locks() {
        let mut app = quiz_app(2);

        app.select_answer(correct_index(&app));

        assert!(app.session.answer_locked);
        assert_eq!(app.session.score, 1);
        assert!(!app.timer.running);
    }

    #[test]
    fn wrong_selection_locks_without_scoring() {
        let mut app = quiz_app(2);

        let wrong = (correct_index(&app) + 1) % app.answers.len();
        app.select_answer(wrong);

        assert!(app.session.answer_locked);
        assert_eq!(app.session.score, 0);
        assert_eq!(app.chosen, Some(wrong));
    }

    #[test]
    fn second_selection_on_a_locked_question_changes_nothing() {
        let mut app = quiz_app(2);

        let wrong = (correct_index(&app) + 1) % app.answers.len();
        app.select_answer(wrong);
        app.select_answer(correct_index(&app));

        assert_eq!(app.session.score, 0);
        assert_eq!(app.chosen, Some(wrong));
    }

    #[test]
    fn score_never_exceeds_answered_questions() {
        let mut app = quiz_app(4);

        for answered in 1..=4 {
            app.select_answer(correct_index(&app));
            assert!(app.session.score <= answered);
            app.advance();
        }
    }

    #[test]
    fn advancing_past_the_last_question_shows_results() {
        let mut app = quiz_app(2);

        app.select_answer(correct_index(&app));
        assert!(app.advance());
        assert_eq!(app.screen, Screen::Quiz);

        app.select_answer(correct_index(&app));
        assert!(!app.advance());
        assert_eq!(app.screen, Screen::Results);
        assert_eq!(app.score_percentage(), 100);
    }

    #[test]
    fn time_up_locks_exactly_one_random_answer() {
        let mut app = quiz_app(1);

        app.time_up();

        assert!(app.session.answer_locked);
        assert!(app.chosen.is_some());
        assert!(!app.timer.running);

        // A second expiry must not re-answer.
        let chosen = app.chosen;
        app.time_up();
        assert_eq!(app.chosen, chosen);
    }

    #[test]
    fn ticking_counts_down_and_expires_into_an_answer() {
        let mut app = quiz_app(1);
        app.timer = TimerState::fresh();

        for _ in 0..QUESTION_SECONDS - 1 {
            assert!(app.tick_timer());
        }
        assert!(!app.session.answer_locked);

        assert!(!app.tick_timer(), "the final tick expires the timer");
        assert!(app.session.answer_locked);
        assert_eq!(app.timer.seconds_remaining, 0);
    }

    #[test]
    fn play_again_keeps_questions_and_resets_counters() {
        let mut app = quiz_app(2);

        app.select_answer(correct_index(&app));
        app.advance();
        app.select_answer(correct_index(&app));
        app.advance();
        assert_eq!(app.screen, Screen::Results);

        app.play_again();
        assert_eq!(app.screen, Screen::Quiz);
        assert_eq!(app.session.score, 0);
        assert_eq!(app.session.current_index, 0);
        assert_eq!(app.session.total(), 2);
    }

    #[test]
    fn progress_rounds_to_whole_percent() {
        let mut app = quiz_app(3);
        assert_eq!(app.progress_percent(), 33);

        app.select_answer(0);
        app.advance();
        assert_eq!(app.progress_percent(), 67);
    }

    #[test]
    fn short_filled_round_keeps_the_requested_denominator() {
        // The default category has no bank entries of its own, so asking
        // for 20 offline questions widens to the whole 19-entry bank. The
        // round still shows and grades out of the requested 20.
        let config = QuizConfig {
            amount: 20,
            ..QuizConfig::default()
        };
        let questions = crate::sourcing::fallback::pick_questions(&config);
        assert_eq!(questions.len(), 19);

        let mut app = TriviaApp::new(config);
        app.install_questions(questions, true);

        assert_eq!(app.total_questions(), 20);
        assert_eq!(app.session.total(), 19);
        assert_eq!(app.progress_percent(), 5, "question 1 of 20");

        loop {
            let correct = correct_index(&app);
            app.select_answer(correct);
            if !app.advance() {
                break;
            }
        }

        assert_eq!(app.screen, Screen::Results);
        assert_eq!(app.session.score, 19);
        assert_eq!(app.score_percentage(), 95, "19 right out of the 20 asked");
    }

    #[test]
    fn percentage_bands_match_at_the_boundaries() {
        let mut app = quiz_app(10);
        app.session.score = 9;
        assert_eq!(app.score_percentage(), 90);
        assert_eq!(
            performance_message(app.score_percentage()),
            "Excellent! You're a quiz master!"
        );

        assert_eq!(
            performance_message(89),
            "Great job! You really know your stuff!"
        );
        assert_eq!(performance_message(50), "You passed! Practice makes perfect!");
        assert_eq!(
            performance_message(49),
            "Keep studying! Every expert was once a beginner!"
        );
    }
}
