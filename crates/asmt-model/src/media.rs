//! Media attachments and the preview resource handle.
//!
//! A [`PreviewRef`] is a locally-owned, revocable handle to a preview
//! resource (the browser-level object URL in the original UI). It must be
//! released exactly once: on replace, on delete, and on draft teardown.
//! Single ownership plus the `Drop` backstop enforces that here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{MediaKind, RecordType};
use crate::error::ModelError;
use crate::ids::ServerId;

/// File metadata carried alongside a persisted asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub file_name: String,
    pub file_size_kb: u64,
    pub file_ext: String,
    pub file_type: String,
}

/// Descriptor of an asset the backend already holds: either hydrated from
/// a remote read or returned by a fresh upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedMedia {
    pub asset_url: String,
    pub signed_url: String,
    pub info: FileInfo,
}

type ReleaseFn = Box<dyn FnOnce(&str) + Send>;

/// Revocable handle to a locally-held preview resource.
///
/// The release closure fires exactly once: explicitly via [`release`]
/// (`PreviewRef::release`) or implicitly on drop. Handles are deliberately
/// not `Clone`; a copy would make exactly-once release unenforceable.
pub struct PreviewRef {
    token: String,
    on_release: Option<ReleaseFn>,
}

impl PreviewRef {
    /// A handle with no release side effect (tests, hydrated items).
    pub fn detached(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            on_release: None,
        }
    }

    /// A handle that runs `release` with its token when released.
    pub fn with_release(token: impl Into<String>, release: impl FnOnce(&str) + Send + 'static) -> Self {
        Self {
            token: token.into(),
            on_release: Some(Box::new(release)),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Consume the handle, firing the release closure.
    pub fn release(mut self) {
        self.fire();
    }

    fn fire(&mut self) {
        if let Some(release) = self.on_release.take() {
            release(&self.token);
        }
    }
}

impl Drop for PreviewRef {
    fn drop(&mut self) {
        self.fire();
    }
}

impl fmt::Debug for PreviewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewRef")
            .field("token", &self.token)
            .field("released", &self.on_release.is_none())
            .finish()
    }
}

/// A media attachment on a question.
///
/// `server_id` is present iff the item was part of a previous save;
/// `persisted` is present once the backend holds the bytes (hydrate or
/// fresh upload). An item with neither a preview nor a persisted
/// descriptor has nothing to send and is dropped by the payload builder.
#[derive(Debug)]
pub struct MediaItem {
    pub server_id: Option<ServerId>,
    pub name: String,
    pub size_bytes: u64,
    pub kind: MediaKind,
    pub record_type: RecordType,
    pub preview: Option<PreviewRef>,
    pub persisted: Option<PersistedMedia>,
}

impl MediaItem {
    /// Item assembled from a completed upload: no server id until the
    /// assignment itself is saved.
    pub fn from_upload(pending: PendingFile, persisted: PersistedMedia) -> Self {
        Self {
            server_id: None,
            name: pending.name,
            size_bytes: pending.size_bytes,
            kind: pending.kind,
            record_type: RecordType::Create,
            preview: Some(pending.preview),
            persisted: Some(persisted),
        }
    }

    /// Item hydrated from a remote read.
    pub fn from_remote(server_id: ServerId, persisted: PersistedMedia) -> Self {
        let kind = MediaKind::from_mime(&persisted.info.file_type)
            .or_else(|| MediaKind::from_extension(&persisted.info.file_ext))
            .unwrap_or(MediaKind::Image);
        Self {
            server_id: Some(server_id),
            name: persisted.info.file_name.clone(),
            size_bytes: persisted.info.file_size_kb.saturating_mul(1024),
            kind,
            record_type: RecordType::Update,
            preview: None,
            persisted: Some(persisted),
        }
    }

    /// Copy for question duplication: keeps the persisted descriptor but
    /// not the server id or the preview handle (the source stays the sole
    /// owner of its revocable resource; the copy renders from `persisted`).
    pub fn duplicate(&self) -> Self {
        Self {
            server_id: None,
            name: self.name.clone(),
            size_bytes: self.size_bytes,
            kind: self.kind,
            record_type: RecordType::Create,
            preview: None,
            persisted: self.persisted.clone(),
        }
    }
}

/// A file selected in the UI, not yet uploaded.
#[derive(Debug)]
pub struct PendingFile {
    pub name: String,
    pub size_bytes: u64,
    pub kind: MediaKind,
    pub preview: PreviewRef,
}

impl PendingFile {
    /// Build a pending file, inferring the media kind from the file name.
    pub fn new(
        name: impl Into<String>,
        size_bytes: u64,
        preview: PreviewRef,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        let kind = MediaKind::from_file_name(&name)?;
        Ok(Self {
            name,
            size_bytes,
            kind,
            preview,
        })
    }
}
