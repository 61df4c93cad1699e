//! Per-kind validation rules.
//!
//! | kind      | requirement                                                        |
//! |-----------|--------------------------------------------------------------------|
//! | mcq       | text non-empty; points > 0; >=1 answer, all non-empty; one correct |
//! | truefalse | text non-empty; points > 0; exactly 2 answers, both non-empty; one correct |
//! | essay     | text non-empty; points > 0; no answer requirements                 |
//!
//! Validation only writes derived state (`touched`, per-answer `error`);
//! it never mutates text, correctness, or structure.

use asmt_model::{Answer, Question, QuestionKind};

use crate::issue::Issue;

/// Whether a validation pass should mark the question and its answers as
/// touched (a submit attempt does; a passive recheck does not).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touch {
    Mark,
    Keep,
}

/// Validate one question against the rules for its kind.
///
/// Questions tagged for deletion are skipped entirely. Per-answer `error`
/// flags are recomputed on every pass so they are never stale.
pub fn validate_question(question: &mut Question, touch: Touch) -> Vec<Issue> {
    if !question.is_active() {
        return Vec::new();
    }

    let mut issues = Vec::new();

    if question.text.trim().is_empty() {
        issues.push(Issue::EmptyQuestionText);
    }
    if question.points <= 0 {
        issues.push(Issue::NonPositivePoints {
            points: question.points,
        });
    }

    match question.kind {
        QuestionKind::MultipleChoice => {
            if question.answers.is_empty() {
                issues.push(Issue::NoAnswers);
            }
            issues.extend(check_answer_texts(&mut question.answers, touch));
            issues.extend(check_single_correct(&question.answers));
        }
        QuestionKind::TrueFalse => {
            if question.answers.len() != 2 {
                issues.push(Issue::AnswerCountMismatch {
                    expected: 2,
                    found: question.answers.len(),
                });
            }
            issues.extend(check_answer_texts(&mut question.answers, touch));
            issues.extend(check_single_correct(&question.answers));
        }
        QuestionKind::Essay => {}
    }

    if touch == Touch::Mark {
        question.touched = true;
    }

    issues
}

/// Recompute each answer's blank-text error flag; returns the aggregate
/// issue when any answer is blank.
fn check_answer_texts(answers: &mut [Answer], touch: Touch) -> Option<Issue> {
    let mut blank = 0usize;
    for answer in answers.iter_mut() {
        if answer.is_blank() {
            blank += 1;
            answer.state.error = Some("Answer text is required".to_string());
        } else {
            answer.state.error = None;
        }
        if touch == Touch::Mark {
            answer.state.touched = true;
        }
    }
    (blank > 0).then_some(Issue::BlankAnswerText { count: blank })
}

/// Exactly one answer must be designated correct (when any answers exist).
fn check_single_correct(answers: &[Answer]) -> Option<Issue> {
    if answers.is_empty() {
        return None;
    }
    let correct = answers.iter().filter(|answer| answer.is_correct).count();
    match correct {
        1 => None,
        0 => Some(Issue::NoCorrectAnswer),
        count => Some(Issue::MultipleCorrectAnswers { count }),
    }
}

#[cfg(test)]
mod tests {
    use asmt_model::{IdAllocator, RecordType};

    use super::*;

    fn mcq(texts: &[&str], correct: Option<usize>) -> Question {
        let mut ids = IdAllocator::new();
        let mut question = Question::new(ids.next_id(), QuestionKind::MultipleChoice, 1);
        question.text = "Pick one".to_string();
        question.answers = texts
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let mut answer = Answer::empty();
                answer.text = (*text).to_string();
                answer.is_correct = correct == Some(index);
                answer
            })
            .collect();
        question
    }

    #[test]
    fn mcq_with_blank_answer_fails_then_passes() {
        let mut question = mcq(&["A", ""], None);
        let issues = validate_question(&mut question, Touch::Mark);
        assert!(issues.contains(&Issue::BlankAnswerText { count: 1 }));
        assert!(issues.contains(&Issue::NoCorrectAnswer));
        assert!(question.answers[1].state.error.is_some());
        assert!(question.touched);

        question.answers[1].text = "B".to_string();
        question.answers[0].is_correct = true;
        let issues = validate_question(&mut question, Touch::Keep);
        assert!(issues.is_empty());
        assert!(question.answers[1].state.error.is_none());
    }

    #[test]
    fn truefalse_requires_exactly_two_answers() {
        let mut ids = IdAllocator::new();
        let mut question = Question::new(ids.next_id(), QuestionKind::TrueFalse, 1);
        question.text = "Rust has a garbage collector".to_string();
        question.answers.push(Answer::empty());
        let issues = validate_question(&mut question, Touch::Keep);
        assert!(issues.contains(&Issue::AnswerCountMismatch {
            expected: 2,
            found: 1
        }));
    }

    #[test]
    fn essay_only_needs_text_and_points() {
        let mut ids = IdAllocator::new();
        let mut question = Question::new(ids.next_id(), QuestionKind::Essay, 1);
        question.text = "Explain borrowing".to_string();
        question.points = 10;
        assert!(validate_question(&mut question, Touch::Keep).is_empty());

        question.text.clear();
        question.points = 0;
        let issues = validate_question(&mut question, Touch::Keep);
        assert_eq!(
            issues,
            vec![
                Issue::EmptyQuestionText,
                Issue::NonPositivePoints { points: 0 }
            ]
        );
    }

    #[test]
    fn deleted_questions_are_skipped() {
        let mut question = mcq(&[""], None);
        question.record_type = RecordType::Delete;
        assert!(validate_question(&mut question, Touch::Mark).is_empty());
        assert!(!question.touched);
    }

    #[test]
    fn multiple_correct_answers_rejected() {
        let mut question = mcq(&["A", "B"], Some(0));
        question.answers[1].is_correct = true;
        let issues = validate_question(&mut question, Touch::Keep);
        assert!(issues.contains(&Issue::MultipleCorrectAnswers { count: 2 }));
    }
}
