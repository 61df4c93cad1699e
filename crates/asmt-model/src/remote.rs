//! Remote read DTOs: the shape the backend returns for an existing
//! assignment, consumed by draft hydration in edit mode.

use serde::{Deserialize, Serialize};

use crate::ids::ServerId;
use crate::media::PersistedMedia;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteAssignment {
    pub code: String,
    pub name: String,
    pub duration_minutes: u32,
    pub instructions: String,
    #[serde(default)]
    pub questions: Vec<RemoteQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteQuestion {
    pub id: ServerId,
    pub question_text: String,
    pub question_type: RemoteQuestionType,
    pub points: i64,
    pub is_required: bool,
    /// Backends may omit the order; hydration then defaults it to the
    /// question's position.
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default)]
    pub media: Vec<RemoteMedia>,
    #[serde(default)]
    pub answers: Vec<RemoteAnswer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteQuestionType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteMedia {
    pub id: ServerId,
    pub document_url: PersistedMedia,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteAnswer {
    pub id: ServerId,
    pub text: String,
    pub is_correct: bool,
}
