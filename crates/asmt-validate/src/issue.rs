//! Validation issue types.
//!
//! Each variant carries only its needed data; the `Display` text is what
//! the UI renders inline next to the offending field.

use serde::Serialize;
use thiserror::Error;

/// A single validation finding on a question or on assignment metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Question text is empty or whitespace.
    #[error("Question text is required")]
    EmptyQuestionText,

    /// Points must be a positive number.
    #[error("Points must be greater than zero (got {points})")]
    NonPositivePoints { points: i64 },

    /// A choice question has no answers at all.
    #[error("At least one answer is required")]
    NoAnswers,

    /// One or more answers have empty text.
    #[error("{count} answer(s) have empty text")]
    BlankAnswerText { count: usize },

    /// True/false questions must carry exactly two answers.
    #[error("Expected exactly {expected} answers, found {found}")]
    AnswerCountMismatch { expected: usize, found: usize },

    /// No answer is marked correct.
    #[error("Mark one answer as correct")]
    NoCorrectAnswer,

    /// More than one answer is marked correct.
    #[error("Only one answer may be marked correct (found {count})")]
    MultipleCorrectAnswers { count: usize },

    /// A required assignment metadata field is empty.
    #[error("Assignment field '{field}' is required")]
    MissingAssignmentField { field: String },
}
