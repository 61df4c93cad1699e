//! Type-safe enumerations for the assignment builder.
//!
//! The backend represents question and media kinds as numeric codes and
//! reconciliation actions as strings; these enums give each a closed set
//! of variants so every code path is matched exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Question kind, as authored in the builder.
///
/// The backend encodes kinds as numeric codes (1 = multiple choice,
/// 2 = true/false, 3 = essay). Remote reads additionally carry a display
/// name which is used as a fallback when the code is unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    #[serde(rename = "mcq")]
    MultipleChoice,
    #[serde(rename = "truefalse")]
    TrueFalse,
    Essay,
}

impl QuestionKind {
    /// Numeric code used on the wire.
    pub fn wire_code(&self) -> i64 {
        match self {
            QuestionKind::MultipleChoice => 1,
            QuestionKind::TrueFalse => 2,
            QuestionKind::Essay => 3,
        }
    }

    /// Resolve a kind from a remote read: numeric code first, display-name
    /// substring as fallback.
    pub fn from_wire(id: i64, name: &str) -> Result<Self, ModelError> {
        match id {
            1 => return Ok(QuestionKind::MultipleChoice),
            2 => return Ok(QuestionKind::TrueFalse),
            3 => return Ok(QuestionKind::Essay),
            _ => {}
        }
        let normalized = name.trim().to_lowercase();
        if normalized.contains("true") || normalized.contains("false") {
            Ok(QuestionKind::TrueFalse)
        } else if normalized.contains("essay") {
            Ok(QuestionKind::Essay)
        } else if normalized.contains("multiple") || normalized.contains("choice") {
            Ok(QuestionKind::MultipleChoice)
        } else {
            Err(ModelError::UnknownQuestionType {
                id,
                name: name.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "mcq",
            QuestionKind::TrueFalse => "truefalse",
            QuestionKind::Essay => "essay",
        }
    }

    /// Returns true if this kind carries an answer list.
    pub fn has_answers(&self) -> bool {
        !matches!(self, QuestionKind::Essay)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "mcq" | "multiple choice" | "multiple-choice" => Ok(QuestionKind::MultipleChoice),
            "truefalse" | "true/false" | "true false" => Ok(QuestionKind::TrueFalse),
            "essay" => Ok(QuestionKind::Essay),
            _ => Err(ModelError::UnknownQuestionType {
                id: 0,
                name: s.to_string(),
            }),
        }
    }
}

/// Reconciliation action the backend should take for an entity.
///
/// Freshly added entities are `Create`, hydrated ones `Update`, and
/// `Delete` is only ever set on entities that carry a server id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Create,
    Update,
    Delete,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Create => "create",
            RecordType::Update => "update",
            RecordType::Delete => "delete",
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, RecordType::Delete)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Media kind. Wire codes: 1 = image, 2 = video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn wire_code(&self) -> i64 {
        match self {
            MediaKind::Image => 1,
            MediaKind::Video => 2,
        }
    }

    pub fn from_wire(code: i64) -> Result<Self, ModelError> {
        match code {
            1 => Ok(MediaKind::Image),
            2 => Ok(MediaKind::Video),
            _ => Err(ModelError::UnknownMediaKind(code)),
        }
    }

    /// Infer the kind from a MIME type string ("image/png", "video/mp4").
    pub fn from_mime(mime: &str) -> Option<Self> {
        let lower = mime.trim().to_lowercase();
        if lower.starts_with("image") {
            Some(MediaKind::Image)
        } else if lower.starts_with("video") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    /// Infer the kind from a file extension (with or without leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "svg" | "bmp" => Some(MediaKind::Image),
            "mp4" | "webm" | "mov" | "avi" | "mkv" => Some(MediaKind::Video),
            _ => None,
        }
    }

    /// Infer the kind from a file name at upload intake.
    pub fn from_file_name(name: &str) -> Result<Self, ModelError> {
        name.rsplit_once('.')
            .and_then(|(_, ext)| Self::from_extension(ext))
            .ok_or_else(|| ModelError::UnknownMediaExtension(name.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_kind_from_wire_codes() {
        assert_eq!(
            QuestionKind::from_wire(1, "").unwrap(),
            QuestionKind::MultipleChoice
        );
        assert_eq!(
            QuestionKind::from_wire(2, "").unwrap(),
            QuestionKind::TrueFalse
        );
        assert_eq!(QuestionKind::from_wire(3, "").unwrap(), QuestionKind::Essay);
    }

    #[test]
    fn question_kind_name_fallback() {
        assert_eq!(
            QuestionKind::from_wire(0, "True/False").unwrap(),
            QuestionKind::TrueFalse
        );
        assert_eq!(
            QuestionKind::from_wire(99, "Multiple Choice").unwrap(),
            QuestionKind::MultipleChoice
        );
        assert_eq!(
            QuestionKind::from_wire(0, "Essay question").unwrap(),
            QuestionKind::Essay
        );
        assert!(QuestionKind::from_wire(0, "mystery").is_err());
    }

    #[test]
    fn record_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RecordType::Delete).unwrap(),
            "\"delete\""
        );
    }

    #[test]
    fn media_kind_inference() {
        assert_eq!(MediaKind::from_mime("image/png"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("video/mp4"), Some(MediaKind::Video));
        assert_eq!(
            MediaKind::from_file_name("clip.webm").unwrap(),
            MediaKind::Video
        );
        assert!(MediaKind::from_file_name("notes.txt").is_err());
    }
}
