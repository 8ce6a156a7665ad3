use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, Padding, Paragraph, Wrap},
};

use crate::models::{QuizConfig, Selection, SKIP_OPTION_INDEX};
use crate::scoring::{MARKS_PER_QUESTION, NEGATIVE_MARK};
use crate::session::Attempt;

const OPTION_LABELS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];
const SKIP_OPTION_TEXT: &str = "अनुत्तरित प्रश्न (Question Not Attempted)";

pub fn render(frame: &mut Frame, area: Rect, attempt: &Attempt, config: &QuizConfig) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_status(frame, chunks[0], attempt, config);
    render_progress(frame, chunks[1], attempt);
    render_question_text(frame, chunks[3], &attempt.current_question().text);
    render_options(frame, chunks[4], attempt);
    render_controls(frame, chunks[5]);

    if attempt.is_confirming_submit() {
        render_confirm(frame, area, attempt);
    }
}

fn render_status(frame: &mut Frame, area: Rect, attempt: &Attempt, config: &QuizConfig) {
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let counter = Line::from(vec![
        Span::styled(
            format!(
                "प्रश्न {} / {}",
                attempt.current_index() + 1,
                attempt.questions().len()
            ),
            Style::default().fg(Color::White).bold(),
        ),
        Span::styled(
            format!("  (+{} Marks, -{:.2} Negative)", MARKS_PER_QUESTION, NEGATIVE_MARK),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(counter), left);

    let clock = Line::from(vec![
        Span::styled(
            format!("{} · {}  ", config.difficulty, config.topic),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            super::format_elapsed(attempt.elapsed()),
            Style::default().fg(Color::Yellow).bold(),
        ),
    ]);
    frame.render_widget(Paragraph::new(clock).alignment(Alignment::Right), right);
}

fn render_progress(frame: &mut Frame, area: Rect, attempt: &Attempt) {
    let total = attempt.questions().len().max(1);
    let ratio = (attempt.current_index() + 1) as f64 / total as f64;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{} answered", attempt.answered_count()));
    frame.render_widget(gauge, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, attempt: &Attempt) {
    let question = attempt.current_question();
    let selected = attempt.current_selection().map(Selection::option_index);

    let texts = question
        .options
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(SKIP_OPTION_TEXT));

    let mut lines: Vec<Line> = Vec::with_capacity(OPTION_LABELS.len() * 2);
    for (index, text) in texts.enumerate() {
        let is_selected = selected == Some(index);
        let is_skip = index == SKIP_OPTION_INDEX;
        let style = match (is_selected, is_skip) {
            (true, false) => Style::default().fg(Color::Cyan).bold(),
            (true, true) => Style::default().fg(Color::White).bold(),
            (false, true) => Style::default().fg(Color::DarkGray).italic(),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(text, style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(
        "a-e answer  ·  h/l prev/next  ·  s submit  ·  esc leave  ·  q quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_confirm(frame: &mut Frame, area: Rect, attempt: &Attempt) {
    let popup = super::centered(area, 52, 9);
    let unanswered = attempt.questions().len() - attempt.answered_count();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "टेस्ट समाप्त करें?",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from("इसके बाद आप उत्तर नहीं बदल पाएंगे।".fg(Color::Gray)),
        Line::from(format!("{} question(s) still unanswered", unanswered).fg(Color::DarkGray)),
        Line::from(""),
        Line::from("y submit  ·  n keep going".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Red),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}
