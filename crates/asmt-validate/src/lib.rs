//! Validation engine for the assignment builder.
//!
//! Rules are evaluated per question kind; a submit attempt sweeps the
//! whole draft, marks everything touched, and reports every offender so
//! the UI can expand them all while scrolling to the first.

pub mod issue;
pub mod report;
pub mod rules;

pub use issue::Issue;
pub use report::{QuestionFinding, ValidationReport, check_submit};
pub use rules::{Touch, validate_question};
