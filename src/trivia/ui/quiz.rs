//! Quiz screen: progress, countdown, question and its shuffled answers.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::trivia::state::TriviaApp;

pub fn render(frame: &mut Frame, area: Rect, app: &TriviaApp) {
    let Some(question) = app.session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // Progress gauge
        Constraint::Length(1), // Score and countdown
        Constraint::Length(6), // Question text
        Constraint::Min(9),    // Answers
        Constraint::Length(1), // Controls
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_status(frame, chunks[1], app);
    render_question_text(frame, chunks[2], &question.text);
    render_answers(frame, chunks[3], app);
    render_controls(frame, chunks[4], app);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &TriviaApp) {
    let label = format!(
        "Question {} of {}",
        app.session.current_index + 1,
        app.total_questions()
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(app.progress_percent())
        .label(label);

    frame.render_widget(gauge, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &TriviaApp) {
    let timer_color = if app.timer.seconds_remaining <= 5 {
        Color::Red
    } else {
        Color::Yellow
    };

    let mut spans = vec![
        Span::styled(
            format!(" Score {}", app.session.score),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{:>2} s", app.timer.seconds_remaining),
            Style::default().fg(timer_color).bold(),
        ),
    ];
    if app.from_fallback {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            "using offline questions",
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(widget, area);
}

fn render_answers(frame: &mut Frame, area: Rect, app: &TriviaApp) {
    let correct = app
        .session
        .current_question()
        .map(|q| q.correct_answer.as_str());
    let locked = app.session.answer_locked;

    let mut lines: Vec<Line> = Vec::with_capacity(app.answers.len() * 2);
    for (index, answer) in app.answers.iter().enumerate() {
        let style = if locked {
            if Some(answer.as_str()) == correct {
                Style::default().fg(Color::Green).bold()
            } else if app.chosen == Some(index) {
                Style::default().fg(Color::Red).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            }
        } else if index == app.highlight {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if !locked && index == app.highlight {
            ">"
        } else {
            " "
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", index + 1), style),
            Span::styled(answer.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Answers ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &TriviaApp) {
    let text = if app.session.answer_locked {
        "Enter/Space next  ·  Esc new quiz  ·  q quit"
    } else {
        "1-4 answer  ·  j/k + Enter answer  ·  Esc new quiz  ·  q quit"
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);

    frame.render_widget(widget, area);
}
