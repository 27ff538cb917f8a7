//! Screens of the sourced quiz runner.

mod loading;
mod quiz;
mod results;
mod welcome;

use ratatui::prelude::*;
use ratatui::widgets::Block;

use crate::trivia::state::{Screen, TriviaApp};

/// Render the screen the app is currently on.
pub fn render(frame: &mut Frame, app: &TriviaApp) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Welcome => welcome::render(frame, area, app),
        Screen::Loading => loading::render(frame, area),
        Screen::Quiz => quiz::render(frame, area, app),
        Screen::Results => results::render(frame, area, app),
    }
}
