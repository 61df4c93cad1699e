//! Order reconciliation.
//!
//! Invariant: among all questions not tagged for deletion, `order` values
//! are pairwise distinct. Every structural mutation finishes by running
//! [`reconcile`], which restores the invariant and is idempotent.

use std::collections::BTreeSet;

use asmt_model::Question;

/// Restore order uniqueness across the active questions.
///
/// Unset orders (zero) default to `position + 1`. For each order value held
/// by more than one active question, the first holder in collection order
/// is canonical; every subsequent holder is moved to the smallest positive
/// integer not already in use, which is marked used immediately. Questions
/// tagged for deletion are never touched.
pub fn reconcile(questions: &mut [Question]) {
    let mut used: BTreeSet<u32> = BTreeSet::new();
    for index in 0..questions.len() {
        if !questions[index].is_active() {
            continue;
        }
        if questions[index].order == 0 {
            questions[index].order = index as u32 + 1;
        }
        if used.insert(questions[index].order) {
            continue;
        }
        let mut candidate = 1u32;
        while used.contains(&candidate) {
            candidate += 1;
        }
        questions[index].order = candidate;
        used.insert(candidate);
    }
}

/// The order a freshly appended question should take.
pub fn next_order(questions: &[Question]) -> u32 {
    questions
        .iter()
        .filter(|question| question.is_active())
        .map(|question| question.order)
        .max()
        .unwrap_or(0)
        + 1
}

#[cfg(test)]
mod tests {
    use asmt_model::{IdAllocator, QuestionKind, RecordType};

    use super::*;

    fn question_with_order(ids: &mut IdAllocator, order: u32) -> Question {
        Question::new(ids.next_id(), QuestionKind::Essay, order)
    }

    fn orders(questions: &[Question]) -> Vec<u32> {
        questions
            .iter()
            .filter(|question| question.is_active())
            .map(|question| question.order)
            .collect()
    }

    #[test]
    fn duplicates_resolved_first_holder_canonical() {
        let mut ids = IdAllocator::new();
        let mut questions = vec![
            question_with_order(&mut ids, 2),
            question_with_order(&mut ids, 2),
            question_with_order(&mut ids, 3),
        ];
        reconcile(&mut questions);
        assert_eq!(orders(&questions), vec![2, 1, 3]);
    }

    #[test]
    fn unset_orders_default_to_position() {
        let mut ids = IdAllocator::new();
        let mut questions = vec![
            question_with_order(&mut ids, 0),
            question_with_order(&mut ids, 0),
        ];
        reconcile(&mut questions);
        assert_eq!(orders(&questions), vec![1, 2]);
    }

    #[test]
    fn reconcile_is_idempotent() {
        let mut ids = IdAllocator::new();
        let mut questions = vec![
            question_with_order(&mut ids, 5),
            question_with_order(&mut ids, 5),
            question_with_order(&mut ids, 1),
            question_with_order(&mut ids, 0),
        ];
        reconcile(&mut questions);
        let after_first = orders(&questions);
        reconcile(&mut questions);
        assert_eq!(orders(&questions), after_first);
    }

    #[test]
    fn deleted_questions_left_alone() {
        let mut ids = IdAllocator::new();
        let mut deleted = question_with_order(&mut ids, 1);
        deleted.record_type = RecordType::Delete;
        let mut questions = vec![deleted, question_with_order(&mut ids, 1)];
        reconcile(&mut questions);
        assert_eq!(questions[0].order, 1);
        assert_eq!(questions[1].order, 1);
    }

    #[test]
    fn next_order_skips_deleted() {
        let mut ids = IdAllocator::new();
        let mut gone = question_with_order(&mut ids, 9);
        gone.record_type = RecordType::Delete;
        let questions = vec![question_with_order(&mut ids, 2), gone];
        assert_eq!(next_order(&questions), 3);
    }
}
