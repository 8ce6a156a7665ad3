//! Quiz session lifecycle: idle, loading, answering, results, error.

mod event;
mod machine;
mod state;

pub use event::{AdvanceToken, Command, Event, Intent, RequestId};
pub use machine::{Session, SOURCE_FAILURE_MESSAGE};
pub use state::{Attempt, Completed, Phase, SessionState};
