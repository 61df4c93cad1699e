use serde::{Deserialize, Serialize};

/// Flat assignment metadata. No invariants beyond required-field checks,
/// which the validation sweep runs through [`AssignmentMeta::missing_fields`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentMeta {
    pub code: String,
    pub name: String,
    pub duration_minutes: u32,
    pub instructions: String,
}

impl AssignmentMeta {
    /// Names of required fields that are empty or zero.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.code.trim().is_empty() {
            missing.push("code");
        }
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.duration_minutes == 0 {
            missing.push("duration_minutes");
        }
        if self.instructions.trim().is_empty() {
            missing.push("instructions");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
