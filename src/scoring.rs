//! Scoring for a finished attempt.
//!
//! Each question is worth [`MARKS_PER_QUESTION`]. A wrong answer costs a
//! third of that; a skip (never answered, or explicitly marked as not
//! attempted) neither earns nor loses anything.

use crate::models::{AnswerSheet, Question, Selection};

pub const MARKS_PER_QUESTION: f64 = 2.0;
pub const NEGATIVE_MARKING_FACTOR: f64 = 1.0 / 3.0;
pub const NEGATIVE_MARK: f64 = MARKS_PER_QUESTION * NEGATIVE_MARKING_FACTOR;

/// How a single question was scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong,
    Skipped,
}

/// Classify one question against the sheet.
pub fn classify(question: &Question, answers: &AnswerSheet) -> Outcome {
    match answers.selection_for(&question.id) {
        None | Some(Selection::MarkedSkip) => Outcome::Skipped,
        Some(Selection::Answered(option)) if question.is_correct(option.get()) => Outcome::Correct,
        Some(Selection::Answered(_)) => Outcome::Wrong,
    }
}

/// Summary of an attempt. Derived on demand, never stored on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResult {
    pub score: f64,
    pub total: f64,
    pub accuracy: u32,
    pub correct_count: usize,
    pub wrong_count: usize,
    pub skip_count: usize,
    pub negative_marks: f64,
    pub answers: AnswerSheet,
    pub questions: Vec<Question>,
}

/// Score `questions` against `answers`.
///
/// Only the questions drive the loop; answers for ids not in the list are
/// ignored.
pub fn score(questions: &[Question], answers: &AnswerSheet) -> QuizResult {
    let mut correct_count = 0;
    let mut wrong_count = 0;
    let mut skip_count = 0;

    for question in questions {
        match classify(question, answers) {
            Outcome::Correct => correct_count += 1,
            Outcome::Wrong => wrong_count += 1,
            Outcome::Skipped => skip_count += 1,
        }
    }

    let total_positive = correct_count as f64 * MARKS_PER_QUESTION;
    let total_negative = wrong_count as f64 * NEGATIVE_MARK;

    let accuracy = if correct_count == 0 {
        0
    } else {
        (100.0 * correct_count as f64 / (correct_count + wrong_count) as f64).round() as u32
    };

    QuizResult {
        score: round2(total_positive - total_negative),
        total: questions.len() as f64 * MARKS_PER_QUESTION,
        accuracy,
        correct_count,
        wrong_count,
        skip_count,
        negative_marks: round2(total_negative),
        answers: answers.clone(),
        questions: questions.to_vec(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Result band shown next to the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    Good,
    Average,
    Failed,
}

impl Grade {
    pub fn from_percentage(percentage: i64) -> Self {
        match percentage {
            p if p >= 80 => Grade::Excellent,
            p if p >= 60 => Grade::Good,
            p if p >= 40 => Grade::Average,
            _ => Grade::Failed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "उत्कृष्ट (Excellent)",
            Grade::Good => "अच्छा (Good)",
            Grade::Average => "औसत (Average)",
            Grade::Failed => "असफल (Failed)",
        }
    }
}

/// One row of the per-question review.
#[derive(Debug, Clone, Copy)]
pub struct QuestionReview<'a> {
    pub number: usize,
    pub question: &'a Question,
    pub selection: Option<Selection>,
    pub outcome: Outcome,
}

impl QuizResult {
    /// Net score as a share of the maximum, rounded. Negative when the
    /// deductions outweigh the marks earned.
    pub fn percentage(&self) -> i64 {
        if self.total <= 0.0 {
            return 0;
        }
        (self.score / self.total * 100.0).round() as i64
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }

    pub fn reviews(&self) -> impl Iterator<Item = QuestionReview<'_>> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionReview {
                number: index + 1,
                question,
                selection: self.answers.selection_for(&question.id),
                outcome: classify(question, &self.answers),
            })
    }
}
