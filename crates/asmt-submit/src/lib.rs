//! Submission side of the assignment builder.
//!
//! - **Payload** (`payload`, `builder`): deterministic, read-only
//!   projection of the draft into the reconciliation request body.
//! - **Services** (`service`): trait seams for the backend, the upload
//!   transport, and UI notifications.
//! - **Flow** (`flow`): submit gating (validation + upload-in-flight) and
//!   the all-or-nothing save call.
//!
//! Errors unify under [`SubmitError`], built with `thiserror`.

pub mod builder;
pub mod error;
pub mod flow;
pub mod payload;
pub mod service;

pub use builder::build_payload;
pub use error::{Result, SubmitError};
pub use flow::{SubmitMode, can_proceed, run_upload, submit_draft};
pub use payload::{
    AnswerPayload, AssignmentPayload, FilePayload, MediaPayload, QuestionPayload,
};
pub use service::{FileUploadService, NotificationSink, ServiceError, SubmissionService};
