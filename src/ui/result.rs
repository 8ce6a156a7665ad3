use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::{Selection, SKIP_OPTION_INDEX};
use crate::scoring::{Grade, Outcome, QuestionReview, QuizResult};
use crate::session::Completed;

const OPTION_LABELS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

pub fn render(frame: &mut Frame, area: Rect, completed: &Completed, scroll: usize) {
    let result = &completed.result;

    let chunks = Layout::vertical([
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], result, completed.elapsed);
    render_review(frame, chunks[1], result, scroll);
    render_controls(frame, chunks[2]);
}

fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::Excellent => Color::Green,
        Grade::Good => Color::Cyan,
        Grade::Average => Color::Yellow,
        Grade::Failed => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, result: &QuizResult, elapsed: u64) {
    let grade = result.grade();
    let color = grade_color(grade);

    let content = vec![
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{:.2} / {}  ({}%)  {}",
                result.score,
                result.total,
                result.percentage(),
                grade.label()
            ),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("सही {}  ", result.correct_count),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("गलत {}  ", result.wrong_count),
                Style::default().fg(Color::Red),
            ),
            Span::styled(
                format!("अनुत्तरित {}", result.skip_count),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(
            format!(
                "accuracy {}%  ·  negative -{:.2}  ·  time {}",
                result.accuracy,
                result.negative_marks,
                super::format_elapsed(elapsed)
            )
            .fg(Color::DarkGray),
        ),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_review(frame: &mut Frame, area: Rect, result: &QuizResult, scroll: usize) {
    let mut lines: Vec<Line> = Vec::new();
    for review in result.reviews().skip(scroll) {
        lines.extend(review_lines(&review));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" विस्तृत विश्लेषण (Detailed Analysis) ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn review_lines<'a>(review: &QuestionReview<'a>) -> Vec<Line<'a>> {
    let (symbol, color) = match review.outcome {
        Outcome::Correct => ("+", Color::Green),
        Outcome::Wrong => ("-", Color::Red),
        Outcome::Skipped => ("·", Color::Gray),
    };
    let question = review.question;

    let yours = match review.selection {
        Some(Selection::Answered(option)) => {
            let index = option.get();
            format!("{}. {}", OPTION_LABELS[index], question.options[index])
        }
        Some(Selection::MarkedSkip) => format!("{}. not attempted", OPTION_LABELS[SKIP_OPTION_INDEX]),
        None => "no answer".to_string(),
    };

    vec![
        Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color).bold()),
            Span::styled(
                format!("{:2}. ", review.number),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(question.text.as_str(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("     your answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(yours, Style::default().fg(color)),
        ]),
        Line::from(vec![
            Span::styled("     correct: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(
                    "{}. {}",
                    OPTION_LABELS[question.correct_answer_index],
                    question.correct_option()
                ),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(Span::styled(
            format!("     {}", question.explanation),
            Style::default().fg(Color::Gray).italic(),
        )),
    ]
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r retry  ·  esc home  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
