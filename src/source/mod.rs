//! Question generation behind a narrow interface.
//!
//! The session only sees [`QuestionSource`]: a validated list of questions
//! or a [`SourceError`]. Transport and response quirks stay in here.

mod gemini;
mod parse;
mod prompt;

use async_trait::async_trait;

use crate::errors::SourceError;
use crate::models::{Question, QuizConfig};

pub use gemini::GeminiClient;
pub use parse::parse_questions;
pub use prompt::{build_prompt, response_schema};

#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Produce exactly `config.question_count` questions, in order.
    async fn generate(&self, config: &QuizConfig) -> Result<Vec<Question>, SourceError>;
}
