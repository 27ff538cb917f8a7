//! Event loop for the sourced quiz runner.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tokio::sync::Mutex;
use tokio::time::interval;

use crate::QuizError;
use crate::sourcing::{self, QuizConfig, TriviaApi};
use crate::terminal;

use super::state::{Screen, TriviaApp};
use super::ui;

/// Shared runner state.
pub type SharedApp = Arc<Mutex<TriviaApp>>;

/// Run the sourced quiz in the terminal.
pub async fn run(config: QuizConfig) -> Result<(), QuizError> {
    let app = Arc::new(Mutex::new(TriviaApp::new(config)));

    let mut term = terminal::init()?;
    let result = run_tui(&mut term, &app).await;
    terminal::restore()?;
    result
}

/// Draw/input loop. Events are polled with a short timeout so countdown
/// updates repaint without a key press.
async fn run_tui(terminal: &mut terminal::Tui, app: &SharedApp) -> Result<(), QuizError> {
    loop {
        {
            let app = app.lock().await;
            if app.should_quit {
                break;
            }
            terminal.draw(|frame| ui::render(frame, &app))?;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(app, key.code).await;
            }
        }
    }

    Ok(())
}

/// Handle keyboard input for the current screen.
async fn handle_key(shared: &SharedApp, key: KeyCode) {
    let mut app = shared.lock().await;

    match app.screen {
        Screen::Welcome => match key {
            KeyCode::Enter => {
                app.begin_loading();
                spawn_sourcing(Arc::clone(shared), app.config.clone());
            }
            KeyCode::Char('c') => app.config.category = app.config.category.next(),
            KeyCode::Char('C') => app.config.category = app.config.category.previous(),
            KeyCode::Char('d') | KeyCode::Char('D') => {
                app.config.difficulty = app.config.difficulty.next();
            }
            KeyCode::Right => app.config.next_amount(),
            KeyCode::Left => app.config.previous_amount(),
            KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
            _ => {}
        },
        Screen::Loading => {
            if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
                app.should_quit = true;
            }
        }
        Screen::Quiz => match key {
            KeyCode::Char(digit @ '1'..='4') => {
                app.select_answer(digit as usize - '1' as usize);
            }
            KeyCode::Down | KeyCode::Char('j') => app.highlight_next(),
            KeyCode::Up | KeyCode::Char('k') => app.highlight_previous(),
            KeyCode::Enter => {
                if app.session.answer_locked {
                    next_question(shared, &mut app);
                } else {
                    let index = app.highlight;
                    app.select_answer(index);
                }
            }
            KeyCode::Char(' ') => {
                if app.session.answer_locked {
                    next_question(shared, &mut app);
                }
            }
            KeyCode::Esc => app.to_welcome(),
            KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
            _ => {}
        },
        Screen::Results => match key {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                app.play_again();
                start_timer(shared, &mut app);
            }
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Esc => app.to_welcome(),
            KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
            _ => {}
        },
    }
}

fn next_question(shared: &SharedApp, app: &mut TriviaApp) {
    if app.advance() {
        start_timer(shared, app);
    }
}

/// Source questions off the UI loop, then enter the quiz. When nothing
/// could be loaded at all, return to the welcome screen without an error.
fn spawn_sourcing(shared: SharedApp, config: QuizConfig) {
    tokio::spawn(async move {
        let api = TriviaApi::new();
        let sourced = sourcing::load_questions(&api, &config).await;

        let mut app = shared.lock().await;
        if app.screen != Screen::Loading {
            // The user backed out while the fetch was in flight.
            return;
        }
        if sourced.questions.is_empty() {
            tracing::warn!("sourcing produced no questions");
            app.screen = Screen::Welcome;
            return;
        }

        app.install_questions(sourced.questions, sourced.from_fallback);
        start_timer(&shared, &mut app);
    });
}

/// Start the per-question countdown. The spawned task's handle is stored
/// on the app, so any restart cancels the previous countdown first and two
/// never tick at once.
pub(crate) fn start_timer(shared: &SharedApp, app: &mut TriviaApp) {
    let tick_app = Arc::clone(shared);
    let task = tokio::spawn(async move {
        let mut ticks = interval(Duration::from_secs(1));
        // The first tick of an interval completes immediately.
        ticks.tick().await;
        loop {
            ticks.tick().await;
            let mut app = tick_app.lock().await;
            if !app.tick_timer() {
                break;
            }
        }
    });
    app.arm_timer(task);
}
