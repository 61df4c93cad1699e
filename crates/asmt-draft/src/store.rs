//! The assignment draft store: single owner of the question tree.
//!
//! A draft is created empty (create mode, seeded with one blank question)
//! or hydrated from a remote read (edit mode). It lives entirely in memory
//! for the edit session and is discarded on successful submission or
//! navigation away; dropping it releases every live preview handle.

use std::collections::BTreeSet;

use tracing::debug;

use asmt_model::{
    Answer, AnswerState, AssignmentMeta, IdAllocator, LocalId, MediaItem, ModelError, Question,
    QuestionKind, RecordType, RemoteAssignment,
};
use asmt_validate::{ValidationReport, check_submit};

use crate::order::reconcile;

#[derive(Debug)]
pub struct AssignmentDraft {
    pub meta: AssignmentMeta,
    pub(crate) questions: Vec<Question>,
    pub(crate) ids: IdAllocator,
    /// UI expansion bookkeeping, keyed by stable local id so it survives
    /// insertion and deletion.
    expanded: BTreeSet<LocalId>,
}

impl AssignmentDraft {
    /// Create mode: one blank multiple-choice question at order 1.
    pub fn new() -> Self {
        let mut ids = IdAllocator::new();
        let seed = Question::new(ids.next_id(), QuestionKind::MultipleChoice, 1);
        Self {
            meta: AssignmentMeta::default(),
            questions: vec![seed],
            ids,
            expanded: BTreeSet::new(),
        }
    }

    /// Edit mode: map a remote read into local records.
    ///
    /// Kind resolution uses the numeric wire code with a display-name
    /// fallback. Server ids and orders are preserved as given; a question's
    /// order defaults to `position + 1` only when the backend omitted it.
    pub fn hydrate(remote: RemoteAssignment) -> Result<Self, ModelError> {
        let mut ids = IdAllocator::new();
        let mut questions = Vec::with_capacity(remote.questions.len());
        for (index, rq) in remote.questions.into_iter().enumerate() {
            let kind = QuestionKind::from_wire(rq.question_type.id, &rq.question_type.name)?;
            let mut question = Question::new(ids.next_id(), kind, 0);
            question.server_id = Some(rq.id);
            question.text = rq.question_text;
            question.points = rq.points;
            question.required = rq.is_required;
            question.order = rq.order.unwrap_or(index as u32 + 1);
            question.record_type = RecordType::Update;
            question.answers = rq
                .answers
                .into_iter()
                .map(|ra| Answer {
                    server_id: Some(ra.id),
                    text: ra.text,
                    is_correct: ra.is_correct,
                    state: AnswerState::default(),
                })
                .collect();
            question.media = rq
                .media
                .into_iter()
                .map(|rm| MediaItem::from_remote(rm.id, rm.document_url))
                .collect();
            questions.push(question);
        }
        reconcile(&mut questions);
        debug!(questions = questions.len(), "hydrated draft from remote read");
        Ok(Self {
            meta: AssignmentMeta {
                code: remote.code,
                name: remote.name,
                duration_minutes: remote.duration_minutes,
                instructions: remote.instructions,
            },
            questions,
            ids,
            expanded: BTreeSet::new(),
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions not tagged for deletion, ascending by order.
    pub fn active_questions(&self) -> Vec<&Question> {
        let mut active: Vec<&Question> = self
            .questions
            .iter()
            .filter(|question| question.is_active())
            .collect();
        active.sort_by_key(|question| question.order);
        active
    }

    pub fn active_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|question| question.is_active())
            .count()
    }

    /// Submit-attempt sweep: marks everything touched, expands every
    /// offending question, and returns the full report.
    pub fn check_submit(&mut self) -> ValidationReport {
        let report = check_submit(&self.meta, &mut self.questions);
        for local_id in report.invalid_local_ids() {
            self.expanded.insert(local_id);
        }
        report
    }

    pub fn expand(&mut self, local_id: LocalId) {
        self.expanded.insert(local_id);
    }

    pub fn collapse(&mut self, local_id: LocalId) {
        self.expanded.remove(&local_id);
    }

    pub fn is_expanded(&self, local_id: LocalId) -> bool {
        self.expanded.contains(&local_id)
    }

    /// Discard the draft, releasing every live preview handle. Equivalent
    /// to dropping it; exists as the explicit navigate-away call.
    pub fn teardown(self) {
        drop(self);
    }

    pub(crate) fn forget_expansion(&mut self, local_id: LocalId) {
        self.expanded.remove(&local_id);
    }
}

impl Default for AssignmentDraft {
    fn default() -> Self {
        Self::new()
    }
}
