//! Unified error type for the submission flow.

use thiserror::Error;

use asmt_draft::UploadError;
use asmt_validate::ValidationReport;

use crate::service::ServiceError;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Submission attempted while an upload is in flight; the backend is
    /// never called in this state.
    #[error("an upload is still in progress")]
    UploadInFlight,

    /// The submit sweep found validation errors; the draft is preserved
    /// and every offender is expanded.
    #[error("validation failed with {} error(s)", .report.error_count())]
    Invalid { report: ValidationReport },

    #[error(transparent)]
    Upload(#[from] UploadError),

    /// The backend rejected the request; the full draft is preserved so
    /// the user can retry.
    #[error("submission failed: {0}")]
    Service(ServiceError),
}

pub type Result<T> = std::result::Result<T, SubmitError>;
