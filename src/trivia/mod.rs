//! Sourced quiz runner.
//!
//! Questions come from the Open Trivia DB with an embedded fallback bank,
//! and every question runs against a countdown.

mod runner;
mod state;
mod ui;

pub use runner::run;
