//! Submit-attempt sweep and its report.
//!
//! The sweep marks every active question and answer touched, collects all
//! invalid questions (the UI expands every offender at once), and tracks
//! the first offending index for scroll-to-error.

use serde::Serialize;
use tracing::debug;

use asmt_model::{AssignmentMeta, LocalId, Question};

use crate::issue::Issue;
use crate::rules::{Touch, validate_question};

/// Findings for one invalid question.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionFinding {
    /// Position in the question collection (scroll target).
    pub index: usize,
    /// Stable identity for expansion bookkeeping.
    #[serde(skip)]
    pub local_id: LocalId,
    pub issues: Vec<Issue>,
}

/// Aggregate result of a submit-attempt validation sweep.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub meta_issues: Vec<Issue>,
    pub findings: Vec<QuestionFinding>,
    /// First invalid question index, for scroll-to-error.
    pub first_invalid: Option<usize>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.meta_issues.is_empty() && self.findings.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.meta_issues.len()
            + self
                .findings
                .iter()
                .map(|finding| finding.issues.len())
                .sum::<usize>()
    }

    pub fn invalid_indices(&self) -> Vec<usize> {
        self.findings.iter().map(|finding| finding.index).collect()
    }

    pub fn invalid_local_ids(&self) -> Vec<LocalId> {
        self.findings
            .iter()
            .map(|finding| finding.local_id)
            .collect()
    }
}

/// Run the submit sweep: metadata required-field checks plus every active
/// question, all marked touched.
pub fn check_submit(meta: &AssignmentMeta, questions: &mut [Question]) -> ValidationReport {
    let meta_issues = meta
        .missing_fields()
        .into_iter()
        .map(|field| Issue::MissingAssignmentField {
            field: field.to_string(),
        })
        .collect();

    let mut findings = Vec::new();
    for (index, question) in questions.iter_mut().enumerate() {
        let issues = validate_question(question, Touch::Mark);
        if !issues.is_empty() {
            findings.push(QuestionFinding {
                index,
                local_id: question.local_id,
                issues,
            });
        }
    }

    let report = ValidationReport {
        meta_issues,
        first_invalid: findings.first().map(|finding| finding.index),
        findings,
    };
    debug!(
        errors = report.error_count(),
        invalid_questions = report.findings.len(),
        "submit validation sweep"
    );
    report
}
