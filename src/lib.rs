//! # reet-mock
//!
//! A terminal mock-exam runner for the Rajasthan REET Mains teacher
//! recruitment test. Questions are generated on demand by Gemini, answered
//! one at a time against a running clock, and scored with negative marking.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reet_mock::{Config, ExamError, GeminiClient, MockExam, QuizConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ExamError> {
//!     let config = Config::from_env();
//!     let source = GeminiClient::new(&config).map_err(|e| ExamError::Config(e.to_string()))?;
//!
//!     MockExam::new(source, &config, QuizConfig::default()).run().await
//! }
//! ```

mod app;
pub mod config;
pub mod driver;
pub mod errors;
mod logging;
pub mod models;
mod runtime;
pub mod scoring;
pub mod session;
pub mod source;
pub mod terminal;
mod ui;

pub use app::App;
pub use config::Config;
pub use driver::{Driver, Timing};
pub use errors::{ExamError, ExamResult, SourceError};
pub use logging::init_logging;
pub use models::{
    AnswerSheet, Difficulty, OptionIndex, Question, QuestionCount, QuizConfig, Selection,
};
pub use scoring::{score, QuizResult};
pub use session::{Intent, Session, SessionState};
pub use source::{GeminiClient, QuestionSource};
pub use ui::format_elapsed;

/// A mock exam that can be run in the terminal.
pub struct MockExam<S: QuestionSource + 'static> {
    driver: Driver<S>,
}

impl<S: QuestionSource + 'static> MockExam<S> {
    pub fn new(source: S, config: &Config, quiz: QuizConfig) -> Self {
        Self {
            driver: Driver::new(Session::new(quiz), source, Timing::from(config)),
        }
    }

    /// Take over the terminal until the user quits.
    ///
    /// Must be called inside a Tokio runtime.
    pub async fn run(self) -> ExamResult<()> {
        runtime::run(self.driver).await
    }
}
