use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Difficulty, QuestionCount, QuizConfig, TOPICS};

pub fn render(frame: &mut Frame, area: Rect, app: &App, config: &QuizConfig) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);

    let columns = Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[1]);
    render_settings(frame, columns[0], config);
    render_topics(frame, columns[1], app.topic_cursor());

    let controls = Paragraph::new(
        "j/k subject  ·  h/l difficulty  ·  c count  ·  enter start  ·  q quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::styled("REET", Style::default().fg(Color::White).bold()),
            Span::styled("Mains", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" Prep", Style::default().fg(Color::White).bold()),
        ]),
        Line::from(
            "राजस्थान तृतीय श्रेणी शिक्षक भर्ती (Level 1 & Level 2) मॉक टेस्ट".fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_settings(frame: &mut Frame, area: Rect, config: &QuizConfig) {
    let mut lines = vec![Line::from("Difficulty".bold()), Line::from("")];
    lines.push(Line::from(
        Difficulty::ALL
            .iter()
            .map(|d| choice(d.to_string(), *d == config.difficulty))
            .collect::<Vec<_>>(),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from("Questions".bold()));
    lines.push(Line::from(""));
    lines.push(Line::from(
        QuestionCount::ALL
            .iter()
            .map(|c| choice(c.to_string(), *c == config.question_count))
            .collect::<Vec<_>>(),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from("Marking".bold()));
    lines.push(Line::from("+2 correct  ·  -0.67 wrong  ·  0 skipped".fg(Color::DarkGray)));
    lines.push(Line::from(""));
    lines.push(Line::from("Selected subject".bold()));
    lines.push(Line::from(Span::styled(
        config.topic.as_str(),
        Style::default().fg(Color::Cyan),
    )));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Settings ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn choice(label: String, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(format!("[{}] ", label), Style::default().fg(Color::Green).bold())
    } else {
        Span::styled(format!(" {}  ", label), Style::default().fg(Color::Gray))
    }
}

fn render_topics(frame: &mut Frame, area: Rect, cursor: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(TOPICS.len() * 3);

    for (index, topic) in TOPICS.iter().enumerate() {
        let is_selected = index == cursor;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(topic.name, style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", topic.description),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    // Keep the cursor visible on short terminals.
    let visible_rows = area.height.saturating_sub(2) as usize;
    let cursor_row = cursor * 3 + 2;
    let scroll = cursor_row.saturating_sub(visible_rows);

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" Select Subject "),
        )
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}
