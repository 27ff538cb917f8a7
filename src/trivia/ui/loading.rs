use ratatui::{prelude::*, widgets::Paragraph};

pub fn render(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(5),
        Constraint::Percentage(40),
    ])
    .split(area);

    let content = vec![
        Line::from(Span::styled(
            "Fetching questions...",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from("the embedded bank takes over if the trivia api is unreachable".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}
