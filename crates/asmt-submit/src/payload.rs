//! Reconciliation payload wire types.
//!
//! This is the full nested request body sent on save: every entity carries
//! its record type so the backend, which has no partial-patch semantics,
//! can apply a whole-document patch.

use serde::{Deserialize, Serialize};

use asmt_model::{FileInfo, RecordType, ServerId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentPayload {
    pub code: String,
    pub name: String,
    pub instructions: String,
    pub duration_minutes: u32,
    pub questions: Vec<QuestionPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ServerId>,
    pub record_type: RecordType,
    /// Numeric kind code: 1 = mcq, 2 = true/false, 3 = essay.
    pub question_type: i64,
    pub question_text: String,
    pub points: i64,
    pub order: u32,
    pub is_required: bool,
    pub media: Vec<MediaPayload>,
    pub answers: Vec<AnswerPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ServerId>,
    pub record_type: RecordType,
    /// Numeric media code: 1 = image, 2 = video.
    pub media_type: i64,
    pub file: FilePayload,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilePayload {
    pub image_url: String,
    pub generate_signed_url: String,
    pub info: FileInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ServerId>,
    pub record_type: RecordType,
    pub text: String,
    pub order: u32,
    pub is_correct: bool,
}
