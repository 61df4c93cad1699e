//! Mutation operations on the draft.
//!
//! Every operation here finishes by running the order reconciler, so the
//! order-uniqueness invariant holds when control returns to the caller.
//! Deletion follows the identity rule: entities with a server id are
//! retained and re-tagged `delete`; local-only entities are spliced out.

use tracing::debug;

use asmt_model::{Answer, DeletedAnswer, LocalId, Question, QuestionKind, RecordType, seed_answers};
use asmt_validate::{Touch, validate_question};

use crate::error::DraftError;
use crate::order::{next_order, reconcile};
use crate::store::AssignmentDraft;

impl AssignmentDraft {
    /// Append a fresh question after the current maximum active order.
    pub fn add_question(&mut self) -> LocalId {
        let order = next_order(&self.questions);
        let question = Question::new(self.ids.next_id(), QuestionKind::MultipleChoice, order);
        let local_id = question.local_id;
        self.questions.push(question);
        reconcile(&mut self.questions);
        debug!(%local_id, order, "added question");
        local_id
    }

    /// Duplicate the question at `index`, validating the source first.
    ///
    /// An invalid source performs no structural change: it is marked
    /// touched so inline errors render, and the error carries the issues.
    /// Duplication never silently produces an invalid clone.
    pub fn duplicate_question(&mut self, index: usize) -> Result<LocalId, DraftError> {
        let len = self.questions.len();
        let source = self
            .questions
            .get_mut(index)
            .ok_or(DraftError::QuestionIndexOutOfRange { index, len })?;

        let issues = validate_question(source, Touch::Keep);
        if !issues.is_empty() {
            validate_question(source, Touch::Mark);
            return Err(DraftError::SourceInvalid { issues });
        }

        let order = next_order(&self.questions);
        let copy = self.questions[index].duplicate(self.ids.next_id(), order);
        let local_id = copy.local_id;
        self.questions.push(copy);
        reconcile(&mut self.questions);
        debug!(source = index, %local_id, "duplicated question");
        Ok(local_id)
    }

    /// Delete the question at `index` per the identity rule.
    pub fn delete_question(&mut self, index: usize) -> Result<(), DraftError> {
        let len = self.questions.len();
        let question = self
            .questions
            .get_mut(index)
            .ok_or(DraftError::QuestionIndexOutOfRange { index, len })?;

        if question.server_id.is_some() {
            question.record_type = RecordType::Delete;
        } else {
            let local_id = question.local_id;
            self.questions.remove(index);
            self.forget_expansion(local_id);
        }
        reconcile(&mut self.questions);
        Ok(())
    }

    /// Move the question at `index` to `new_order`. If another active
    /// question already holds `new_order`, the two swap orders.
    pub fn reorder_question(&mut self, index: usize, new_order: u32) -> Result<(), DraftError> {
        let len = self.questions.len();
        if index >= len {
            return Err(DraftError::QuestionIndexOutOfRange { index, len });
        }
        let old_order = self.questions[index].order;
        if let Some(holder) = self.questions.iter_mut().enumerate().find(|(i, question)| {
            *i != index && question.is_active() && question.order == new_order
        }) {
            holder.1.order = old_order;
        }
        self.questions[index].order = new_order;
        reconcile(&mut self.questions);
        Ok(())
    }

    pub fn add_answer(&mut self, question: usize) -> Result<(), DraftError> {
        self.question_mut(question)?.answers.push(Answer::empty());
        reconcile(&mut self.questions);
        Ok(())
    }

    /// Delete an answer per the identity rule. A choice question is never
    /// allowed to lose its last remaining answer while editing.
    pub fn delete_answer(&mut self, question: usize, answer: usize) -> Result<(), DraftError> {
        let target = self.question_mut(question)?;
        let len = target.answers.len();
        if answer >= len {
            return Err(DraftError::AnswerIndexOutOfRange { index: answer, len });
        }
        if target.kind.has_answers() && len == 1 {
            return Err(DraftError::LastAnswer);
        }
        let removed = target.answers.remove(answer);
        if let Some(server_id) = removed.server_id {
            target.deleted_answers.push(DeletedAnswer { server_id });
        }
        reconcile(&mut self.questions);
        Ok(())
    }

    /// Designate exactly one answer as correct. Rejected when the target's
    /// text is blank; the target's `mark_as_correct_error` is set so the
    /// error renders inline.
    pub fn set_correct_answer(&mut self, question: usize, answer: usize) -> Result<(), DraftError> {
        let target = self.question_mut(question)?;
        let len = target.answers.len();
        if answer >= len {
            return Err(DraftError::AnswerIndexOutOfRange { index: answer, len });
        }
        if target.answers[answer].is_blank() {
            target.answers[answer].state.mark_as_correct_error =
                Some("Add answer text before marking it correct".to_string());
            return Err(DraftError::BlankCorrectAnswer);
        }
        for (i, candidate) in target.answers.iter_mut().enumerate() {
            candidate.is_correct = i == answer;
            candidate.state.mark_as_correct_error = None;
        }
        reconcile(&mut self.questions);
        Ok(())
    }

    /// Change a question's kind, reseeding the answer list to the new
    /// shape and clearing any previously designated correct answer.
    /// Removed answers with a server id are parked for deletion so the
    /// backend still receives delete instructions for them.
    pub fn set_question_kind(
        &mut self,
        question: usize,
        kind: QuestionKind,
    ) -> Result<(), DraftError> {
        let target = self.question_mut(question)?;
        if target.kind == kind {
            return Ok(());
        }
        target.kind = kind;
        match kind {
            QuestionKind::MultipleChoice => {
                if target.answers.is_empty() {
                    target.answers = seed_answers(kind);
                }
            }
            QuestionKind::TrueFalse | QuestionKind::Essay => {
                for removed in target.answers.drain(..) {
                    if let Some(server_id) = removed.server_id {
                        target.deleted_answers.push(DeletedAnswer { server_id });
                    }
                }
                target.answers = seed_answers(kind);
            }
        }
        for answer in &mut target.answers {
            answer.is_correct = false;
            answer.state.mark_as_correct_error = None;
        }
        reconcile(&mut self.questions);
        Ok(())
    }

    pub fn set_question_text(
        &mut self,
        question: usize,
        text: impl Into<String>,
    ) -> Result<(), DraftError> {
        self.question_mut(question)?.text = text.into();
        reconcile(&mut self.questions);
        Ok(())
    }

    pub fn set_points(&mut self, question: usize, points: i64) -> Result<(), DraftError> {
        self.question_mut(question)?.points = points;
        reconcile(&mut self.questions);
        Ok(())
    }

    pub fn set_required(&mut self, question: usize, required: bool) -> Result<(), DraftError> {
        self.question_mut(question)?.required = required;
        reconcile(&mut self.questions);
        Ok(())
    }

    /// Update an answer's text, recomputing its derived flags so they are
    /// never stale: the blank-text error is refreshed for touched answers
    /// and any mark-as-correct rejection is cleared.
    pub fn set_answer_text(
        &mut self,
        question: usize,
        answer: usize,
        text: impl Into<String>,
    ) -> Result<(), DraftError> {
        let target = self.question_mut(question)?;
        let len = target.answers.len();
        let entry = target
            .answers
            .get_mut(answer)
            .ok_or(DraftError::AnswerIndexOutOfRange { index: answer, len })?;
        entry.text = text.into();
        entry.state.mark_as_correct_error = None;
        entry.state.error = if entry.state.touched && entry.is_blank() {
            Some("Answer text is required".to_string())
        } else {
            None
        };
        reconcile(&mut self.questions);
        Ok(())
    }

    /// Delete a media item: its preview is always released first, then the
    /// identity rule applies.
    pub fn delete_media(&mut self, question: usize, media: usize) -> Result<(), DraftError> {
        let target = self.question_mut(question)?;
        let len = target.media.len();
        if media >= len {
            return Err(DraftError::MediaIndexOutOfRange { index: media, len });
        }
        if let Some(preview) = target.media[media].preview.take() {
            preview.release();
        }
        if target.media[media].server_id.is_some() {
            target.media[media].record_type = RecordType::Delete;
        } else {
            target.media.remove(media);
        }
        reconcile(&mut self.questions);
        Ok(())
    }

    pub(crate) fn question_mut(&mut self, index: usize) -> Result<&mut Question, DraftError> {
        let len = self.questions.len();
        self.questions
            .get_mut(index)
            .ok_or(DraftError::QuestionIndexOutOfRange { index, len })
    }
}
