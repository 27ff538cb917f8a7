use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], app);
    render_answers(frame, chunks[2], app);
    render_controls(frame, chunks[3], app);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "{}/{}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, app: &App) {
    let text = format!(
        "{}. {}",
        app.current_question_number(),
        app.current_question().text
    );
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_answers(frame: &mut Frame, area: Rect, app: &App) {
    let question = app.current_question();
    let mut lines: Vec<Line> = Vec::with_capacity(question.answers.len() * 2);

    for (index, answer) in question.answers.iter().enumerate() {
        let style = answer_style(app, index, answer.correct);
        let marker = if !app.is_locked() && index == app.cursor() {
            ">"
        } else {
            " "
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", index + 1), style),
            Span::styled(answer.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Before the lock the cursor row is highlighted; after it the correct
/// answer shows green and a wrong pick red, both at once.
fn answer_style(app: &App, index: usize, correct: bool) -> Style {
    if app.is_locked() {
        if correct {
            Style::default().fg(Color::Green).bold()
        } else if app.locked_choice() == Some(index) {
            Style::default().fg(Color::Red).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    } else if index == app.cursor() {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let text = if app.is_locked() {
        "enter next  ·  q quit"
    } else {
        "j/k navigate  ·  enter select  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
