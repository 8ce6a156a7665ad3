use serde::{Deserialize, Serialize};

/// Number of real answer options on every question.
pub const NUM_OPTIONS: usize = 4;

/// A generated multiple-choice question. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_answer_index: usize,
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer_index
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer_index]
    }
}
