use crate::data::builtin_questions;
use crate::models::{AppState, StaticQuestion};

const NUM_OPTIONS: usize = 4;

pub struct App {
    pub state: AppState,
    questions: Vec<StaticQuestion>,
    current_index: usize,
    score: usize,
    cursor: usize,
    locked_choice: Option<usize>,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::Welcome,
            questions: builtin_questions(),
            current_index: 0,
            score: 0,
            cursor: 0,
            locked_choice: None,
        }
    }

    pub fn current_question(&self) -> &StaticQuestion {
        &self.questions[self.current_index]
    }

    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn locked_choice(&self) -> Option<usize> {
        self.locked_choice
    }

    pub fn is_locked(&self) -> bool {
        self.locked_choice.is_some()
    }

    pub fn select_next_option(&mut self) {
        if !self.is_locked() {
            self.cursor = (self.cursor + 1) % NUM_OPTIONS;
        }
    }

    pub fn select_previous_option(&mut self) {
        if !self.is_locked() {
            self.cursor = (self.cursor + NUM_OPTIONS - 1) % NUM_OPTIONS;
        }
    }

    pub fn start_quiz(&mut self) {
        self.state = AppState::Quiz;
        self.current_index = 0;
        self.score = 0;
        self.cursor = 0;
        self.locked_choice = None;
    }

    /// Lock the highlighted answer. The first confirmation scores the round
    /// and reveals the correct answer; any further confirmation is a no-op.
    pub fn confirm_selection(&mut self) {
        if self.is_locked() {
            return;
        }
        self.locked_choice = Some(self.cursor);
        if self.current_question().answers[self.cursor].correct {
            self.score += 1;
        }
    }

    /// Advance past a locked question, or finish the quiz after the last one.
    pub fn next(&mut self) {
        if !self.is_locked() {
            return;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.cursor = 0;
            self.locked_choice = None;
        } else {
            self.state = AppState::Result;
        }
    }

    pub fn final_message(&self) -> String {
        format!("You scored {} out of {}", self.score, self.questions.len())
    }

    pub fn play_again(&mut self) {
        self.start_quiz();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn move_cursor_to(app: &mut App, index: usize) {
        while app.cursor() != index {
            app.select_next_option();
        }
    }

    #[test]
    fn perfect_run_scores_all_questions() {
        let mut app = App::new();
        app.start_quiz();

        for _ in 0..app.total_questions() {
            let correct = app.current_question().correct_index();
            move_cursor_to(&mut app, correct);
            app.confirm_selection();
            assert!(app.score() <= app.current_question_number());
            app.next();
        }

        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.final_message(), "You scored 4 out of 4");
    }

    #[test]
    fn wrong_answers_do_not_score() {
        let mut app = App::new();
        app.start_quiz();

        for _ in 0..app.total_questions() {
            let correct = app.current_question().correct_index();
            move_cursor_to(&mut app, (correct + 1) % NUM_OPTIONS);
            app.confirm_selection();
            app.next();
        }

        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.final_message(), "You scored 0 out of 4");
    }

    #[test]
    fn confirming_twice_is_a_no_op() {
        let mut app = App::new();
        app.start_quiz();

        let correct = app.current_question().correct_index();
        move_cursor_to(&mut app, correct);
        app.confirm_selection();
        let score = app.score();
        let choice = app.locked_choice();

        app.confirm_selection();
        app.select_next_option();
        app.confirm_selection();

        assert_eq!(app.score(), score);
        assert_eq!(app.locked_choice(), choice);
    }

    #[test]
    fn next_requires_a_locked_answer() {
        let mut app = App::new();
        app.start_quiz();

        app.next();
        assert_eq!(app.current_question_number(), 1);

        app.confirm_selection();
        app.next();
        assert_eq!(app.current_question_number(), 2);
    }

    #[test]
    fn play_again_resets_the_session() {
        let mut app = App::new();
        app.start_quiz();

        for _ in 0..app.total_questions() {
            let correct = app.current_question().correct_index();
            move_cursor_to(&mut app, correct);
            app.confirm_selection();
            app.next();
        }
        assert_eq!(app.state, AppState::Result);

        app.play_again();
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.score(), 0);
        assert_eq!(app.current_question_number(), 1);
        assert!(!app.is_locked());
    }
}
