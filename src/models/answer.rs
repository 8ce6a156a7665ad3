//! User selections and the per-attempt answer sheet.

use std::collections::HashMap;

use thiserror::Error;

use super::question::NUM_OPTIONS;

/// Raw index the option list reserves for "question not attempted".
pub const SKIP_OPTION_INDEX: usize = NUM_OPTIONS;

/// One of the real options, `0..NUM_OPTIONS`. Only built through
/// `TryFrom<usize>`, so an out-of-range index cannot reach scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionIndex(usize);

impl OptionIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for OptionIndex {
    type Error = SelectionError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < NUM_OPTIONS {
            Ok(OptionIndex(index))
        } else {
            Err(SelectionError(index))
        }
    }
}

/// What the user chose for a question.
///
/// A question with no entry in the [`AnswerSheet`] is unanswered; both that
/// and [`Selection::MarkedSkip`] score as a skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Answered(OptionIndex),
    MarkedSkip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("option index {0} is outside 0..=4")]
pub struct SelectionError(pub usize);

impl TryFrom<usize> for Selection {
    type Error = SelectionError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            SKIP_OPTION_INDEX => Ok(Selection::MarkedSkip),
            other => OptionIndex::try_from(other).map(Selection::Answered),
        }
    }
}

impl Selection {
    /// Position of this selection in the rendered option list (A-D, then E).
    pub fn option_index(self) -> usize {
        match self {
            Selection::Answered(option) => option.get(),
            Selection::MarkedSkip => SKIP_OPTION_INDEX,
        }
    }
}

/// Answers keyed by question id. A later record for the same question
/// replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    entries: HashMap<String, Selection>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question_id: impl Into<String>, selection: Selection) {
        self.entries.insert(question_id.into(), selection);
    }

    pub fn selection_for(&self, question_id: &str) -> Option<Selection> {
        self.entries.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered(index: usize) -> Selection {
        Selection::try_from(index).unwrap()
    }

    #[test]
    fn test_selection_from_index() {
        assert_eq!(answered(0).option_index(), 0);
        assert_eq!(answered(3).option_index(), 3);
        assert!(matches!(answered(3), Selection::Answered(_)));
        assert_eq!(Selection::try_from(4), Ok(Selection::MarkedSkip));
        assert_eq!(Selection::try_from(5), Err(SelectionError(5)));
    }

    #[test]
    fn test_out_of_range_index_never_becomes_a_selection() {
        for index in [5, 7, usize::MAX] {
            assert_eq!(Selection::try_from(index), Err(SelectionError(index)));
        }
        assert_eq!(OptionIndex::try_from(4), Err(SelectionError(4)));
        assert_eq!(OptionIndex::try_from(3).map(OptionIndex::get), Ok(3));
    }

    #[test]
    fn test_option_index_round_trips_the_sentinel() {
        assert_eq!(Selection::MarkedSkip.option_index(), SKIP_OPTION_INDEX);
        assert_eq!(answered(2).option_index(), 2);
    }

    #[test]
    fn test_last_write_wins() {
        let mut sheet = AnswerSheet::new();
        sheet.record("q-1", answered(1));
        sheet.record("q-1", answered(3));

        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.selection_for("q-1"), Some(answered(3)));
    }

    #[test]
    fn test_skip_can_overwrite_an_answer() {
        let mut sheet = AnswerSheet::new();
        sheet.record("q-1", answered(0));
        sheet.record("q-1", Selection::MarkedSkip);

        assert_eq!(sheet.selection_for("q-1"), Some(Selection::MarkedSkip));
        assert_eq!(sheet.selection_for("q-2"), None);
    }
}
