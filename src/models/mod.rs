mod question;

pub use question::{AnswerOption, StaticQuestion, TriviaQuestion};

/// Screens of the static quiz runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}
