//! Submission flow and gating.
//!
//! Submission and the "proceed to next tab" action are both hard-blocked
//! while any validation error exists or while an upload is in flight.
//! Nothing here retries automatically; recovery is user-initiated.

use tracing::{debug, info, warn};

use asmt_draft::{AssignmentDraft, UploadCoordinator};
use asmt_model::PendingFile;

use crate::builder::build_payload;
use crate::error::SubmitError;
use crate::service::{FileUploadService, NotificationSink, SubmissionService};

/// Whether the save targets a new assignment or an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update,
}

/// Run the full submit: upload gate, validation sweep, payload build,
/// single all-or-nothing service call.
///
/// On failure of any stage the draft is preserved in full; on success the
/// caller clears the draft and redirects.
pub fn submit_draft(
    draft: &mut AssignmentDraft,
    coordinator: &UploadCoordinator,
    mode: SubmitMode,
    service: &dyn SubmissionService,
    notifications: &dyn NotificationSink,
) -> Result<(), SubmitError> {
    if coordinator.is_uploading() {
        debug!("submit blocked: upload in flight");
        return Err(SubmitError::UploadInFlight);
    }

    let report = draft.check_submit();
    if !report.is_valid() {
        debug!(
            errors = report.error_count(),
            first_invalid = ?report.first_invalid,
            "submit blocked: validation errors"
        );
        return Err(SubmitError::Invalid { report });
    }

    let payload = build_payload(draft);
    let result = match mode {
        SubmitMode::Create => service.create(&payload),
        SubmitMode::Update => service.update(&payload),
    };
    match result {
        Ok(()) => {
            info!(questions = payload.questions.len(), ?mode, "assignment saved");
            notifications.success(match mode {
                SubmitMode::Create => "Assignment created",
                SubmitMode::Update => "Assignment updated",
            });
            Ok(())
        }
        Err(error) => {
            warn!(%error, "submission rejected");
            notifications.error(&error.to_string());
            Err(SubmitError::Service(error))
        }
    }
}

/// The "next tab" gate: same two conditions as submission, never calls
/// the backend. The sweep marks fields touched so inline errors render.
pub fn can_proceed(draft: &mut AssignmentDraft, coordinator: &UploadCoordinator) -> bool {
    !coordinator.is_uploading() && draft.check_submit().is_valid()
}

/// Drive one upload over the transport trait: begin, transfer, apply.
/// Every upload error is surfaced through the notification sink; a failed
/// transfer releases the pending preview and leaves the draft unchanged.
pub fn run_upload(
    coordinator: &mut UploadCoordinator,
    draft: &mut AssignmentDraft,
    question: usize,
    media: Option<usize>,
    file: PendingFile,
    service: &dyn FileUploadService,
    notifications: &dyn NotificationSink,
) -> Result<(), SubmitError> {
    let ticket = match coordinator.begin(draft, question, media, &file) {
        Ok(ticket) => ticket,
        Err(error) => {
            notifications.error(&error.to_string());
            return Err(error.into());
        }
    };
    match service.upload(&file) {
        Ok(response) => {
            coordinator.succeed(draft, ticket, file, response)?;
            Ok(())
        }
        Err(error) => {
            let upload_error = coordinator.fail(ticket, error.to_string());
            notifications.error(&upload_error.to_string());
            drop(file);
            Err(upload_error.into())
        }
    }
}
