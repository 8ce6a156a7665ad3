//! Inputs to and outputs from the session reducer.

use crate::errors::SourceError;
use crate::models::{ConfigChange, Question, QuizConfig};

/// Identity of one question request. Only the newest one is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

/// Identity of one scheduled auto-advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvanceToken(pub u64);

/// What the presentation layer can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    UpdateConfig(ConfigChange),
    Start,
    /// 0-3 pick an option, 4 marks the question as not attempted.
    SelectOption(usize),
    Navigate(isize),
    RequestSubmit,
    ConfirmSubmit,
    CancelSubmit,
    Retry,
    GoHome,
    AcknowledgeError,
}

/// Everything the reducer reacts to.
#[derive(Debug)]
pub enum Event {
    Intent(Intent),
    QuestionsLoaded {
        request: RequestId,
        outcome: Result<Vec<Question>, SourceError>,
    },
    AdvanceDue(AdvanceToken),
    Tick,
}

impl From<Intent> for Event {
    fn from(intent: Intent) -> Self {
        Event::Intent(intent)
    }
}

/// Side effects the reducer asks its driver to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchQuestions { request: RequestId, config: QuizConfig },
    CancelFetch,
    ScheduleAdvance(AdvanceToken),
}
