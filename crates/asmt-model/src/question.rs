//! Draft question tree: questions, answers, and the deleted-answer ledger.
//!
//! Identity rule: an entity with a [`ServerId`] is never physically removed
//! on delete; it is retained and re-tagged so the backend receives an
//! explicit delete instruction. Local-only entities are spliced out.

use crate::enums::{QuestionKind, RecordType};
use crate::ids::{LocalId, ServerId};
use crate::media::MediaItem;

/// Derived per-answer validation state. Recomputed whenever the answer
/// text, the designated correct answer, or a submit attempt changes —
/// never left stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerState {
    pub touched: bool,
    pub error: Option<String>,
    pub mark_as_correct_error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Answer {
    pub server_id: Option<ServerId>,
    pub text: String,
    pub is_correct: bool,
    pub state: AnswerState,
}

impl Answer {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A server-held answer the user removed locally; the backend still needs
/// a delete instruction for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletedAnswer {
    pub server_id: ServerId,
}

#[derive(Debug)]
pub struct Question {
    pub local_id: LocalId,
    pub server_id: Option<ServerId>,
    pub text: String,
    pub kind: QuestionKind,
    pub points: i64,
    pub required: bool,
    pub order: u32,
    pub record_type: RecordType,
    pub answers: Vec<Answer>,
    pub media: Vec<MediaItem>,
    pub deleted_answers: Vec<DeletedAnswer>,
    pub touched: bool,
}

impl Question {
    /// Fresh local-only question with empty answer and media lists.
    pub fn new(local_id: LocalId, kind: QuestionKind, order: u32) -> Self {
        Self {
            local_id,
            server_id: None,
            text: String::new(),
            kind,
            points: 1,
            required: false,
            order,
            record_type: RecordType::Create,
            answers: Vec::new(),
            media: Vec::new(),
            deleted_answers: Vec::new(),
            touched: false,
        }
    }

    /// A question is active unless it has been tagged for deletion.
    pub fn is_active(&self) -> bool {
        !self.record_type.is_delete()
    }

    /// Index of the single designated correct answer, if any.
    pub fn correct_answer(&self) -> Option<usize> {
        self.answers.iter().position(|answer| answer.is_correct)
    }

    /// Deep copy for duplication: every server id stripped (question,
    /// answers, media), deleted-answer ledger reset, tagged `Create`.
    pub fn duplicate(&self, local_id: LocalId, order: u32) -> Self {
        Self {
            local_id,
            server_id: None,
            text: self.text.clone(),
            kind: self.kind,
            points: self.points,
            required: self.required,
            order,
            record_type: RecordType::Create,
            answers: self
                .answers
                .iter()
                .map(|answer| Answer {
                    server_id: None,
                    text: answer.text.clone(),
                    is_correct: answer.is_correct,
                    state: AnswerState::default(),
                })
                .collect(),
            media: self.media.iter().map(MediaItem::duplicate).collect(),
            deleted_answers: Vec::new(),
            touched: false,
        }
    }
}

/// Answer list shape applied on a kind change: mcq gets one empty answer
/// (when none exist), true/false exactly two, essay none.
pub fn seed_answers(kind: QuestionKind) -> Vec<Answer> {
    match kind {
        QuestionKind::MultipleChoice => vec![Answer::empty()],
        QuestionKind::TrueFalse => vec![Answer::empty(), Answer::empty()],
        QuestionKind::Essay => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdAllocator;

    #[test]
    fn seed_shapes_per_kind() {
        assert_eq!(seed_answers(QuestionKind::MultipleChoice).len(), 1);
        assert_eq!(seed_answers(QuestionKind::TrueFalse).len(), 2);
        assert!(seed_answers(QuestionKind::Essay).is_empty());
    }

    #[test]
    fn duplicate_strips_identity() {
        let mut ids = IdAllocator::new();
        let mut source = Question::new(ids.next_id(), QuestionKind::MultipleChoice, 1);
        source.server_id = Some(ServerId::new(7));
        source.text = "What is ownership?".to_string();
        source.answers = vec![
            Answer {
                server_id: Some(ServerId::new(70)),
                text: "A".to_string(),
                is_correct: true,
                state: AnswerState::default(),
            },
            Answer {
                server_id: Some(ServerId::new(71)),
                text: "B".to_string(),
                is_correct: false,
                state: AnswerState::default(),
            },
        ];
        source.deleted_answers.push(DeletedAnswer {
            server_id: ServerId::new(72),
        });

        let copy = source.duplicate(ids.next_id(), 2);
        assert!(copy.server_id.is_none());
        assert_eq!(copy.record_type, RecordType::Create);
        assert!(copy.deleted_answers.is_empty());
        assert!(copy.answers.iter().all(|a| a.server_id.is_none()));
        assert_eq!(copy.correct_answer(), Some(0));
        assert_ne!(copy.local_id, source.local_id);
    }
}
