//! Trait seams for the external collaborators: the submission backend,
//! the file-upload transport, and the UI notification sink.

use thiserror::Error;

use asmt_model::{PendingFile, PersistedMedia};

use crate::payload::AssignmentPayload;

/// Error returned by a collaborator service, with an optional
/// backend-supplied message.
#[derive(Debug, Clone, Default, Error)]
#[error("{}", .message.as_deref().unwrap_or("request failed"))]
pub struct ServiceError {
    pub message: Option<String>,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// Backend accepting the reconciliation payload. All-or-nothing: no
/// partial payload is ever sent.
pub trait SubmissionService {
    fn create(&self, payload: &AssignmentPayload) -> Result<(), ServiceError>;
    fn update(&self, payload: &AssignmentPayload) -> Result<(), ServiceError>;
}

/// Upload transport. Single-shot request/response; no retry, no
/// cancellation.
pub trait FileUploadService {
    fn upload(&self, file: &PendingFile) -> Result<PersistedMedia, ServiceError>;
}

/// Fire-and-forget UI feedback.
pub trait NotificationSink {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
