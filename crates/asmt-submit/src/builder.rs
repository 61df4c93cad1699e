//! Deterministic projection of a draft into the reconciliation payload.
//!
//! Build is read-only with respect to the draft. Questions tagged for
//! deletion are included (the backend actions the delete); media with no
//! descriptor to send is dropped; the deleted-answer ledger is appended
//! after the active answers.

use asmt_draft::AssignmentDraft;
use asmt_model::{MediaItem, Question, RecordType};

use crate::payload::{
    AnswerPayload, AssignmentPayload, FilePayload, MediaPayload, QuestionPayload,
};

/// Project the draft into the request body the backend accepts.
pub fn build_payload(draft: &AssignmentDraft) -> AssignmentPayload {
    AssignmentPayload {
        code: draft.meta.code.clone(),
        name: draft.meta.name.clone(),
        instructions: draft.meta.instructions.clone(),
        duration_minutes: draft.meta.duration_minutes,
        questions: draft.questions().iter().map(question_payload).collect(),
    }
}

fn question_payload(question: &Question) -> QuestionPayload {
    QuestionPayload {
        id: question.server_id,
        record_type: question.record_type,
        question_type: question.kind.wire_code(),
        question_text: question.text.clone(),
        points: question.points,
        order: question.order,
        is_required: question.required,
        media: media_payloads(&question.media),
        answers: answer_payloads(question),
    }
}

/// Media entries in list order. `record_type` follows the identity rule:
/// delete-tagged items stay `delete`, otherwise a server id means
/// `update` and its absence `create` — including hydrated items nothing
/// touched, which the backend receives as redundant updates.
fn media_payloads(media: &[MediaItem]) -> Vec<MediaPayload> {
    media
        .iter()
        .filter_map(|item| {
            let persisted = item.persisted.as_ref()?;
            let record_type = if item.record_type.is_delete() {
                RecordType::Delete
            } else if item.server_id.is_some() {
                RecordType::Update
            } else {
                RecordType::Create
            };
            Some(MediaPayload {
                id: item.server_id,
                record_type,
                media_type: item.kind.wire_code(),
                file: FilePayload {
                    image_url: persisted.asset_url.clone(),
                    generate_signed_url: persisted.signed_url.clone(),
                    info: persisted.info.clone(),
                },
                order: 0,
            })
        })
        .enumerate()
        .map(|(index, mut entry)| {
            entry.order = index as u32 + 1;
            entry
        })
        .collect()
}

/// Active answers ordered 1..N, then the deleted-answer ledger forced to
/// `delete` with empty text, ordered after the active block.
fn answer_payloads(question: &Question) -> Vec<AnswerPayload> {
    let mut payloads: Vec<AnswerPayload> = question
        .answers
        .iter()
        .enumerate()
        .map(|(index, answer)| AnswerPayload {
            id: answer.server_id,
            record_type: if answer.server_id.is_some() {
                RecordType::Update
            } else {
                RecordType::Create
            },
            text: answer.text.clone(),
            order: index as u32 + 1,
            is_correct: answer.is_correct,
        })
        .collect();

    let offset = payloads.len() as u32;
    payloads.extend(
        question
            .deleted_answers
            .iter()
            .enumerate()
            .map(|(index, deleted)| AnswerPayload {
                id: Some(deleted.server_id),
                record_type: RecordType::Delete,
                text: String::new(),
                order: offset + index as u32 + 1,
                is_correct: false,
            }),
    );
    payloads
}

#[cfg(test)]
mod tests {
    use asmt_model::{DeletedAnswer, IdAllocator, QuestionKind, ServerId};

    use super::*;

    #[test]
    fn deleted_answers_follow_active_block() {
        let mut ids = IdAllocator::new();
        let mut question = Question::new(ids.next_id(), QuestionKind::MultipleChoice, 1);
        question.answers.push(asmt_model::Answer {
            server_id: Some(ServerId::new(10)),
            text: "Keep".to_string(),
            is_correct: true,
            state: asmt_model::AnswerState::default(),
        });
        question.deleted_answers.push(DeletedAnswer {
            server_id: ServerId::new(11),
        });

        let answers = answer_payloads(&question);
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].record_type, RecordType::Update);
        assert_eq!(answers[0].order, 1);
        assert_eq!(answers[1].record_type, RecordType::Delete);
        assert_eq!(answers[1].text, "");
        assert_eq!(answers[1].order, 2);
        assert_eq!(answers[1].id, Some(ServerId::new(11)));
    }

    #[test]
    fn media_without_descriptor_is_dropped() {
        let mut ids = IdAllocator::new();
        let mut question = Question::new(ids.next_id(), QuestionKind::Essay, 1);
        question.media.push(asmt_model::MediaItem {
            server_id: None,
            name: "ghost.png".to_string(),
            size_bytes: 1,
            kind: asmt_model::MediaKind::Image,
            record_type: RecordType::Create,
            preview: None,
            persisted: None,
        });
        assert!(media_payloads(&question.media).is_empty());
    }
}
