//! # trivia-quiz
//!
//! Two terminal quiz runners in one crate:
//!
//! - the **classic** runner plays a fixed set of four embedded questions
//!   with no time pressure,
//! - the **trivia** runner fetches questions from the Open Trivia DB,
//!   falls back to an embedded bank when the API is unreachable, and puts
//!   every question on a 30-second countdown.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia_quiz::{ClassicQuiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     ClassicQuiz::new().run()
//! }
//! ```

mod app;
mod data;
pub mod logging;
mod models;
pub mod sourcing;
pub mod terminal;
pub mod trivia;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Frame;
use thiserror::Error;

pub use app::App;
pub use models::{AnswerOption, AppState, StaticQuestion, TriviaQuestion};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// IO error from the terminal or the event stream.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// The classic quiz: four embedded questions, answers in fixed order,
/// no timer.
pub struct ClassicQuiz {
    app: App,
}

impl ClassicQuiz {
    pub fn new() -> Self {
        Self { app: App::new() }
    }

    /// Run the quiz in the terminal. Takes over the screen and returns
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }
}

impl Default for ClassicQuiz {
    fn default() -> Self {
        Self::new()
    }
}

fn run_event_loop(terminal: &mut terminal::Tui, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Dispatch to the screen the app is currently on.
fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.state {
        AppState::Welcome => ui::welcome::render(frame, area),
        AppState::Quiz => ui::quiz::render(frame, area, app),
        AppState::Result => ui::result::render(frame, area, app),
    }
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            // First confirmation locks and reveals; the next one advances.
            if app.is_locked() {
                app.next();
            } else {
                app.confirm_selection();
            }
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.play_again();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
