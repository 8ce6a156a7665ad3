//! Session states and their payloads.

use crate::models::{AnswerSheet, Question, Selection};
use crate::scoring::{self, QuizResult};

use super::event::{AdvanceToken, RequestId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    InProgress,
    Results,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// Editing the configuration.
    #[default]
    Idle,
    /// Waiting for the question source.
    Loading { request: RequestId },
    /// Answering questions.
    InProgress(Attempt),
    /// Viewing the scored attempt.
    Results(Completed),
    /// The question source failed.
    Error { message: String },
}

impl SessionState {
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Loading { .. } => Phase::Loading,
            Self::InProgress(_) => Phase::InProgress,
            Self::Results(_) => Phase::Results,
            Self::Error { .. } => Phase::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingAdvance {
    pub token: AdvanceToken,
    pub from: usize,
}

/// A quiz being answered.
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    questions: Vec<Question>,
    answers: AnswerSheet,
    current: usize,
    elapsed: u64,
    confirming_submit: bool,
    pub(crate) pending_advance: Option<PendingAdvance>,
}

impl Attempt {
    /// `questions` must not be empty.
    pub(crate) fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            answers: AnswerSheet::new(),
            current: 0,
            elapsed: 0,
            confirming_submit: false,
            pending_advance: None,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn current_selection(&self) -> Option<Selection> {
        self.answers.selection_for(&self.current_question().id)
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn is_confirming_submit(&self) -> bool {
        self.confirming_submit
    }

    pub fn answered_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| self.answers.selection_for(&q.id).is_some())
            .count()
    }

    pub(crate) fn record(&mut self, selection: Selection) {
        let id = self.current_question().id.clone();
        self.answers.record(id, selection);
    }

    pub(crate) fn move_by(&mut self, delta: isize) {
        let last = self.questions.len().saturating_sub(1) as isize;
        self.current = (self.current as isize + delta).clamp(0, last) as usize;
    }

    pub(crate) fn advance_from(&mut self, from: usize) {
        self.current = (from + 1).min(self.questions.len().saturating_sub(1));
    }

    pub(crate) fn tick(&mut self) {
        self.elapsed += 1;
    }

    pub(crate) fn set_confirming(&mut self, open: bool) {
        self.confirming_submit = open;
    }

    pub(crate) fn finish(self) -> Completed {
        Completed {
            result: scoring::score(&self.questions, &self.answers),
            elapsed: self.elapsed,
        }
    }
}

/// A submitted attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Completed {
    pub result: QuizResult,
    pub elapsed: u64,
}
