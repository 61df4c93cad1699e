//! Media upload coordination.
//!
//! One operation is in flight at a time from the UI's perspective:
//! `Idle -> Uploading(question, media?) -> Idle` on success or failure.
//! The transport itself is an external collaborator, so the coordinator is
//! split-phase: [`UploadCoordinator::begin`] gates and records the target,
//! the caller performs the transfer, and [`UploadCoordinator::succeed`] or
//! [`UploadCoordinator::fail`] applies the outcome. While the phase is
//! `Uploading`, submission and tab navigation are blocked; that is the one
//! cross-cutting concurrency guard in the system.

use tracing::{debug, warn};

use asmt_model::{MediaItem, PendingFile, PersistedMedia, RecordType, UploadPolicy};

use crate::error::{DraftError, UploadError};
use crate::store::AssignmentDraft;

/// Coordinator phase. `media` is the index being replaced, or `None` when
/// the upload appends a new item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Uploading { question: usize, media: Option<usize> },
}

/// Proof that `begin` admitted an upload; consumed by `succeed`/`fail`.
#[derive(Debug)]
pub struct UploadTicket {
    question: usize,
    media: Option<usize>,
    token: u64,
}

#[derive(Debug)]
pub struct UploadCoordinator {
    phase: UploadPhase,
    policy: UploadPolicy,
    active_token: Option<u64>,
    next_token: u64,
}

impl UploadCoordinator {
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            phase: UploadPhase::Idle,
            policy,
            active_token: None,
            next_token: 1,
        }
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    /// The gate probed by submission and tab navigation.
    pub fn is_uploading(&self) -> bool {
        matches!(self.phase, UploadPhase::Uploading { .. })
    }

    /// Admit an upload targeting `question` (replacing the item at `media`
    /// when given). Size-ceiling rejection happens here, before any
    /// network call, and leaves the phase untouched.
    pub fn begin(
        &mut self,
        draft: &AssignmentDraft,
        question: usize,
        media: Option<usize>,
        file: &PendingFile,
    ) -> Result<UploadTicket, UploadError> {
        if self.is_uploading() {
            return Err(UploadError::UploadInFlight);
        }
        let target = draft
            .question(question)
            .ok_or(DraftError::QuestionIndexOutOfRange {
                index: question,
                len: draft.len(),
            })?;
        if let Some(index) = media {
            if index >= target.media.len() {
                return Err(DraftError::MediaIndexOutOfRange {
                    index,
                    len: target.media.len(),
                }
                .into());
            }
        }
        if !self.policy.allows(file.size_bytes) {
            warn!(
                file = %file.name,
                size_bytes = file.size_bytes,
                limit_bytes = self.policy.max_file_bytes,
                "upload rejected before transfer"
            );
            return Err(UploadError::FileTooLarge {
                size_bytes: file.size_bytes,
                limit_bytes: self.policy.max_file_bytes,
            });
        }

        let token = self.next_token;
        self.next_token += 1;
        self.active_token = Some(token);
        self.phase = UploadPhase::Uploading { question, media };
        debug!(question, ?media, file = %file.name, "upload started");
        Ok(UploadTicket {
            question,
            media,
            token,
        })
    }

    /// Apply a completed upload: replace the targeted item (its old
    /// preview handle is released by ownership) or append a new one. The
    /// new item has no server id until the assignment itself is saved; a
    /// replaced item keeps its backend identity so the save reconciles it
    /// as an update carrying the new file.
    pub fn succeed(
        &mut self,
        draft: &mut AssignmentDraft,
        ticket: UploadTicket,
        file: PendingFile,
        response: PersistedMedia,
    ) -> Result<(), UploadError> {
        self.take_active(&ticket)?;
        let target = draft.question_mut(ticket.question)?;
        let mut item = MediaItem::from_upload(file, response);
        match ticket.media {
            Some(index) => {
                let len = target.media.len();
                let slot = target
                    .media
                    .get_mut(index)
                    .ok_or(DraftError::MediaIndexOutOfRange { index, len })?;
                item.server_id = slot.server_id;
                if item.server_id.is_some() {
                    item.record_type = RecordType::Update;
                }
                *slot = item;
            }
            None => target.media.push(item),
        }
        debug!(question = ticket.question, media = ?ticket.media, "upload applied");
        Ok(())
    }

    /// Record a failed upload: back to idle, draft unchanged. The caller
    /// still owns the pending file; dropping it releases the preview.
    pub fn fail(&mut self, ticket: UploadTicket, message: impl Into<String>) -> UploadError {
        if let Err(stale) = self.take_active(&ticket) {
            return stale;
        }
        let error = UploadError::UploadFailed {
            message: message.into(),
        };
        warn!(question = ticket.question, %error, "upload failed");
        error
    }

    fn take_active(&mut self, ticket: &UploadTicket) -> Result<(), UploadError> {
        if self.active_token != Some(ticket.token) {
            return Err(UploadError::StaleTicket);
        }
        self.active_token = None;
        self.phase = UploadPhase::Idle;
        Ok(())
    }
}

impl Default for UploadCoordinator {
    fn default() -> Self {
        Self::new(UploadPolicy::default())
    }
}
