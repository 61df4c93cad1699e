//! Configuration options for the assignment builder.

use serde::{Deserialize, Serialize};

/// Upload ceiling applied before any network call.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Policy for media upload intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadPolicy {
    /// Maximum accepted file size in bytes. Files over the ceiling are
    /// rejected with a descriptive error before any network call.
    pub max_file_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }
}

impl UploadPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_file_bytes(mut self, max_file_bytes: u64) -> Self {
        self.max_file_bytes = max_file_bytes;
        self
    }

    pub fn allows(&self, size_bytes: u64) -> bool {
        size_bytes <= self.max_file_bytes
    }
}
