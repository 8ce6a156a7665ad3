//! Validation of the generator's JSON payload.
//!
//! The payload is untrusted: every structural mismatch is a
//! [`SourceError::Shape`], never a panic.

use serde::Deserialize;
use uuid::Uuid;

use crate::errors::SourceError;
use crate::models::{Question, NUM_OPTIONS};

#[derive(Deserialize)]
struct RawQuiz {
    questions: Vec<RawQuestion>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    text: String,
    options: Vec<String>,
    correct_answer_index: i64,
    explanation: String,
}

/// Parse `payload` and check it holds exactly `expected` well-formed
/// questions. Each accepted question gets a fresh id.
pub fn parse_questions(payload: &str, expected: usize) -> Result<Vec<Question>, SourceError> {
    let raw: RawQuiz = serde_json::from_str(payload.trim())?;

    if raw.questions.len() != expected {
        return Err(SourceError::Shape(format!(
            "expected {} questions, got {}",
            expected,
            raw.questions.len()
        )));
    }

    raw.questions
        .into_iter()
        .enumerate()
        .map(|(index, q)| validate(index, q))
        .collect()
}

fn validate(index: usize, raw: RawQuestion) -> Result<Question, SourceError> {
    let number = index + 1;

    if raw.text.trim().is_empty() {
        return Err(SourceError::Shape(format!("question {} has no text", number)));
    }

    let options: [String; NUM_OPTIONS] = raw.options.try_into().map_err(|opts: Vec<String>| {
        SourceError::Shape(format!(
            "question {} has {} options, expected {}",
            number,
            opts.len(),
            NUM_OPTIONS
        ))
    })?;

    let correct_answer_index = usize::try_from(raw.correct_answer_index)
        .ok()
        .filter(|i| *i < NUM_OPTIONS)
        .ok_or_else(|| {
            SourceError::Shape(format!(
                "question {} has correct answer index {}",
                number, raw.correct_answer_index
            ))
        })?;

    Ok(Question {
        id: Uuid::new_v4().to_string(),
        text: raw.text,
        options,
        correct_answer_index,
        explanation: raw.explanation,
    })
}
