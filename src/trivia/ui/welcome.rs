use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::trivia::state::TriviaApp;

pub fn render(frame: &mut Frame, area: Rect, app: &TriviaApp) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(14),
        Constraint::Fill(1),
    ])
    .split(area);

    let config = &app.config;
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TRIVIA QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        setting_line("Category", config.category.label()),
        setting_line("Difficulty", config.difficulty.as_str()),
        setting_line("Questions", &config.amount.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
        Line::from(""),
        Line::from("c category  ·  d difficulty  ·  ←/→ count  ·  q quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

fn setting_line(name: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name:<11}"), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}
