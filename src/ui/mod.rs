mod error;
mod loading;
mod quiz;
mod result;
mod setup;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::session::{Session, SessionState};

pub fn render(frame: &mut Frame, app: &App, session: &Session) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match session.state() {
        SessionState::Idle => setup::render(frame, area, app, session.config()),
        SessionState::Loading { .. } => loading::render(frame, area, session.config()),
        SessionState::InProgress(attempt) => quiz::render(frame, area, attempt, session.config()),
        SessionState::Results(completed) => {
            result::render(frame, area, completed, app.review_scroll())
        }
        SessionState::Error { message } => error::render(frame, area, message),
    }
}

/// `m:ss`, minutes unbounded.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(middle);
    center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(65), "1:05");
        assert_eq!(format_elapsed(3600), "60:00");
    }
}
