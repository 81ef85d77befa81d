//! Validation error types.
//!
//! These errors describe an answer set or session that is incomplete or
//! malformed relative to the question bank it is scored against. Scoring
//! never proceeds past one of these.

use thiserror::Error;

use crate::model::Category;

/// Errors raised when answers do not line up with the question bank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A positional category group has fewer answers than it needs.
    #[error("incomplete {category} answers: {answered} of {required} answered")]
    IncompleteCategory {
        category: Category,
        answered: usize,
        required: usize,
    },

    /// The answer set references a question the bank does not contain.
    #[error("unknown question id: {question_id}")]
    UnknownQuestion { question_id: String },

    /// A selection that is not one of the question's options.
    #[error("'{option}' is not an option of question {question_id}")]
    UnknownOption { question_id: String, option: String },

    /// Two questions in the bank share an id, so one answer would fill both.
    #[error("duplicate question id in bank: {question_id}")]
    DuplicateQuestion { question_id: String },

    /// The session was finished before every question was answered.
    #[error("assessment incomplete: {answered} of {total} questions answered")]
    SessionIncomplete { answered: usize, total: usize },
}

impl ValidationError {
    /// The category group this error concerns, if any.
    pub fn category(&self) -> Option<Category> {
        match self {
            ValidationError::IncompleteCategory { category, .. } => Some(*category),
            _ => None,
        }
    }
}
