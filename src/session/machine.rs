//! The quiz lifecycle as a reducer over [`Event`]s.

use crate::models::{Question, QuizConfig, Selection};

use super::event::{AdvanceToken, Command, Event, Intent, RequestId};
use super::state::{Attempt, PendingAdvance, SessionState};

/// Shown for every question source failure.
pub const SOURCE_FAILURE_MESSAGE: &str =
    "क्विज बनाने में विफल। कृपया अपना कनेक्शन जांचें या कोई अन्य विषय आज़माएं। \
     (Could not generate the quiz. Check your connection or try another subject.)";

/// One user's quiz session.
///
/// All transitions go through [`Session::handle`], which returns the side
/// effects the caller must carry out.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    config: QuizConfig,
    next_request: u64,
    next_advance: u64,
}

impl Session {
    pub fn new(config: QuizConfig) -> Self {
        Self {
            state: SessionState::Idle,
            config,
            next_request: 0,
            next_advance: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Whether elapsed time should currently be counting.
    pub fn clock_running(&self) -> bool {
        matches!(&self.state, SessionState::InProgress(a) if !a.is_confirming_submit())
    }

    pub fn handle(&mut self, event: impl Into<Event>) -> Vec<Command> {
        match event.into() {
            Event::Intent(intent) => self.apply_intent(intent),
            Event::QuestionsLoaded { request, outcome } => {
                self.finish_loading(request, outcome);
                Vec::new()
            }
            Event::AdvanceDue(token) => {
                self.advance(token);
                Vec::new()
            }
            Event::Tick => {
                if self.clock_running() {
                    if let SessionState::InProgress(attempt) = &mut self.state {
                        attempt.tick();
                    }
                }
                Vec::new()
            }
        }
    }

    fn apply_intent(&mut self, intent: Intent) -> Vec<Command> {
        match intent {
            Intent::UpdateConfig(change) => {
                if matches!(self.state, SessionState::Idle) {
                    self.config.apply(change);
                } else {
                    log::debug!("Ignoring config change outside the setup screen");
                }
                Vec::new()
            }
            Intent::Start => match self.state {
                SessionState::Idle | SessionState::Loading { .. } => self.begin_loading(),
                _ => Vec::new(),
            },
            Intent::Retry => match self.state {
                SessionState::Results(_) => self.begin_loading(),
                _ => Vec::new(),
            },
            Intent::SelectOption(index) => self.select(index),
            Intent::Navigate(delta) => {
                if let Some(attempt) = self.answering_mut() {
                    attempt.move_by(delta);
                    attempt.pending_advance = None;
                }
                Vec::new()
            }
            Intent::RequestSubmit => {
                if let SessionState::InProgress(attempt) = &mut self.state {
                    attempt.set_confirming(true);
                }
                Vec::new()
            }
            Intent::CancelSubmit => {
                if let SessionState::InProgress(attempt) = &mut self.state {
                    attempt.set_confirming(false);
                }
                Vec::new()
            }
            Intent::ConfirmSubmit => {
                self.submit();
                Vec::new()
            }
            Intent::GoHome => self.go_home(),
            Intent::AcknowledgeError => {
                if matches!(self.state, SessionState::Error { .. }) {
                    self.state = SessionState::Idle;
                }
                Vec::new()
            }
        }
    }

    fn begin_loading(&mut self) -> Vec<Command> {
        self.next_request += 1;
        let request = RequestId(self.next_request);
        log::info!(
            "Starting quiz: {} / {} / {} questions (request {})",
            self.config.topic,
            self.config.difficulty,
            self.config.question_count,
            request.0
        );
        self.state = SessionState::Loading { request };
        vec![Command::FetchQuestions {
            request,
            config: self.config.clone(),
        }]
    }

    fn finish_loading(
        &mut self,
        request: RequestId,
        outcome: Result<Vec<Question>, crate::errors::SourceError>,
    ) {
        match self.state {
            SessionState::Loading { request: pending } if pending == request => {}
            _ => {
                log::debug!("Ignoring superseded question response {}", request.0);
                return;
            }
        }

        self.state = match outcome {
            Ok(questions) if !questions.is_empty() => {
                log::info!("Quiz ready with {} questions", questions.len());
                SessionState::InProgress(Attempt::new(questions))
            }
            Ok(_) => {
                log::warn!("Question source returned no questions");
                SessionState::Error {
                    message: SOURCE_FAILURE_MESSAGE.to_string(),
                }
            }
            Err(e) => {
                log::warn!("Question source failed: {}", e);
                SessionState::Error {
                    message: SOURCE_FAILURE_MESSAGE.to_string(),
                }
            }
        };
    }

    fn select(&mut self, index: usize) -> Vec<Command> {
        let selection = match Selection::try_from(index) {
            Ok(selection) => selection,
            Err(e) => {
                log::warn!("Ignoring selection: {}", e);
                return Vec::new();
            }
        };

        self.next_advance += 1;
        let token = AdvanceToken(self.next_advance);

        let Some(attempt) = self.answering_mut() else {
            return Vec::new();
        };

        attempt.record(selection);
        if attempt.is_last() {
            attempt.pending_advance = None;
            return Vec::new();
        }

        attempt.pending_advance = Some(PendingAdvance {
            token,
            from: attempt.current_index(),
        });
        vec![Command::ScheduleAdvance(token)]
    }

    fn advance(&mut self, token: AdvanceToken) {
        if let SessionState::InProgress(attempt) = &mut self.state {
            match attempt.pending_advance {
                Some(pending) if pending.token == token => {
                    attempt.advance_from(pending.from);
                    attempt.pending_advance = None;
                }
                _ => log::debug!("Dropping stale advance {}", token.0),
            }
        }
    }

    fn submit(&mut self) {
        let state = std::mem::take(&mut self.state);
        self.state = match state {
            SessionState::InProgress(attempt) if attempt.is_confirming_submit() => {
                let completed = attempt.finish();
                log::info!(
                    "Quiz submitted: score {} / {}",
                    completed.result.score,
                    completed.result.total
                );
                SessionState::Results(completed)
            }
            other => other,
        };
    }

    fn go_home(&mut self) -> Vec<Command> {
        match self.state {
            SessionState::Loading { .. } => {
                self.state = SessionState::Idle;
                vec![Command::CancelFetch]
            }
            SessionState::InProgress(_) | SessionState::Results(_) => {
                self.state = SessionState::Idle;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// The attempt, if it is accepting answers (no confirmation open).
    fn answering_mut(&mut self) -> Option<&mut Attempt> {
        match &mut self.state {
            SessionState::InProgress(attempt) if !attempt.is_confirming_submit() => Some(attempt),
            _ => None,
        }
    }
}
