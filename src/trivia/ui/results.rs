//! Results screen for the sourced quiz runner.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::trivia::state::{TriviaApp, performance_message};

pub fn render(frame: &mut Frame, area: Rect, app: &TriviaApp) {
    let percentage = app.score_percentage();
    let grade_color = match percentage {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    };

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({}%)",
                app.session.score,
                app.total_questions(),
                percentage
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            performance_message(percentage),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to play the same questions again".fg(Color::DarkGray)),
        Line::from(""),
        Line::from("r play again  ·  w new quiz  ·  q quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
