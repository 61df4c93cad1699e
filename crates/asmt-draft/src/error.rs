use thiserror::Error;

use asmt_validate::Issue;

/// Errors from draft mutation operations.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("question index {index} out of range (len {len})")]
    QuestionIndexOutOfRange { index: usize, len: usize },
    #[error("answer index {index} out of range (len {len})")]
    AnswerIndexOutOfRange { index: usize, len: usize },
    #[error("media index {index} out of range (len {len})")]
    MediaIndexOutOfRange { index: usize, len: usize },
    #[error("a choice question must keep at least one answer while editing")]
    LastAnswer,
    #[error("an answer with empty text cannot be marked correct")]
    BlankCorrectAnswer,
    #[error("cannot duplicate a question with {} validation issue(s)", .issues.len())]
    SourceInvalid { issues: Vec<Issue> },
}

/// Errors from the upload coordinator.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("file is {size_bytes} bytes, over the {limit_bytes}-byte limit")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },
    #[error("another upload is already in flight")]
    UploadInFlight,
    #[error("upload failed: {message}")]
    UploadFailed { message: String },
    #[error("upload ticket does not match the in-flight operation")]
    StaleTicket,
    #[error(transparent)]
    Draft(#[from] DraftError),
}
