use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::models::QuizConfig;

pub fn render(frame: &mut Frame, area: Rect, config: &QuizConfig) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "प्रश्न तैयार किए जा रहे हैं...",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            config.topic.as_str(),
            Style::default().fg(Color::White),
        )),
        Line::from(
            format!("{} · {} questions", config.difficulty, config.question_count)
                .fg(Color::DarkGray),
        ),
        Line::from(""),
        Line::from("esc cancel  ·  q quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, super::centered(area, 56, 9));
}
