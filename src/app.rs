//! View-local state and the key map of the terminal front end.

use crossterm::event::KeyCode;

use crate::models::{find_topic, ConfigChange, TOPICS};
use crate::session::{Intent, Session, SessionState};

pub struct App {
    topic_cursor: usize,
    review_scroll: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: &Session) -> Self {
        let topic_cursor = find_topic(&session.config().topic)
            .and_then(|topic| TOPICS.iter().position(|t| t.id == topic.id))
            .unwrap_or(0);

        Self {
            topic_cursor,
            review_scroll: 0,
            should_quit: false,
        }
    }

    pub fn topic_cursor(&self) -> usize {
        self.topic_cursor
    }

    pub fn review_scroll(&self) -> usize {
        self.review_scroll
    }

    /// Translate a key press into an intent for the session, if any.
    pub fn handle_key(&mut self, session: &Session, key: KeyCode) -> Option<Intent> {
        if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
            self.should_quit = true;
            return None;
        }

        match session.state() {
            SessionState::Idle => self.handle_setup_key(session, key),
            SessionState::Loading { .. } => match key {
                KeyCode::Esc => Some(Intent::GoHome),
                _ => None,
            },
            SessionState::InProgress(attempt) if attempt.is_confirming_submit() => match key {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    self.review_scroll = 0;
                    Some(Intent::ConfirmSubmit)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    Some(Intent::CancelSubmit)
                }
                _ => None,
            },
            SessionState::InProgress(_) => handle_quiz_key(key),
            SessionState::Results(completed) => match key {
                KeyCode::Down | KeyCode::Char('j') => {
                    let max_scroll = completed.result.questions.len().saturating_sub(1);
                    self.review_scroll = (self.review_scroll + 1).min(max_scroll);
                    None
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.review_scroll = self.review_scroll.saturating_sub(1);
                    None
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.review_scroll = 0;
                    Some(Intent::Retry)
                }
                KeyCode::Esc | KeyCode::Char('h') => {
                    self.review_scroll = 0;
                    Some(Intent::GoHome)
                }
                _ => None,
            },
            SessionState::Error { .. } => match key {
                KeyCode::Enter | KeyCode::Esc => Some(Intent::AcknowledgeError),
                _ => None,
            },
        }
    }

    fn handle_setup_key(&mut self, session: &Session, key: KeyCode) -> Option<Intent> {
        let config = session.config();
        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                self.topic_cursor = (self.topic_cursor + 1) % TOPICS.len();
                Some(self.topic_intent())
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.topic_cursor = (self.topic_cursor + TOPICS.len() - 1) % TOPICS.len();
                Some(self.topic_intent())
            }
            KeyCode::Right | KeyCode::Char('l') => Some(Intent::UpdateConfig(
                ConfigChange::Difficulty(config.difficulty.next()),
            )),
            KeyCode::Left | KeyCode::Char('h') => Some(Intent::UpdateConfig(
                ConfigChange::Difficulty(config.difficulty.previous()),
            )),
            KeyCode::Char('c') | KeyCode::Tab => Some(Intent::UpdateConfig(
                ConfigChange::QuestionCount(config.question_count.next()),
            )),
            KeyCode::Enter => Some(Intent::Start),
            _ => None,
        }
    }

    fn topic_intent(&self) -> Intent {
        Intent::UpdateConfig(ConfigChange::Topic(
            TOPICS[self.topic_cursor].name.to_string(),
        ))
    }
}

fn handle_quiz_key(key: KeyCode) -> Option<Intent> {
    match key {
        KeyCode::Char(c @ 'a'..='e') => Some(Intent::SelectOption(c as usize - 'a' as usize)),
        KeyCode::Char(c @ '1'..='5') => Some(Intent::SelectOption(c as usize - '1' as usize)),
        KeyCode::Left | KeyCode::Char('h') => Some(Intent::Navigate(-1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Intent::Navigate(1)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Intent::RequestSubmit),
        KeyCode::Esc => Some(Intent::GoHome),
        _ => None,
    }
}
