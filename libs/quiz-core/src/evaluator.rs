//! Answer correctness evaluation.

use std::collections::BTreeSet;

use crate::types::{AnswerSubmission, Question};

/// Whether `submission` answers `question` correctly.
///
/// The submitted index set must equal the question's correct index
/// set exactly; partial overlap in either direction is incorrect.
/// There is no separate rule for multiple-choice questions.
pub fn evaluate(question: &Question, submission: &AnswerSubmission) -> bool {
    let expected: BTreeSet<usize> = question.correct.iter().copied().collect();
    submission.indices() == &expected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: Vec<usize>) -> Question {
        Question {
            text: "q".to_string(),
            category: "A".to_string(),
            options: vec!["x".to_string(), "y".to_string(), "z".to_string()],
            correct,
            help: None,
        }
    }

    #[test]
    fn exact_match_is_correct() {
        let q = question(vec![0, 2]);
        assert!(evaluate(&q, &AnswerSubmission::new([0, 2])));
        assert!(evaluate(&q, &AnswerSubmission::new([2, 0])));
    }

    #[test]
    fn strict_subset_is_incorrect() {
        let q = question(vec![0, 2]);
        assert!(!evaluate(&q, &AnswerSubmission::new([0])));
    }

    #[test]
    fn strict_superset_is_incorrect() {
        let q = question(vec![0, 2]);
        assert!(!evaluate(&q, &AnswerSubmission::new([0, 1, 2])));
    }

    #[test]
    fn disjoint_set_is_incorrect() {
        let q = question(vec![0, 2]);
        assert!(!evaluate(&q, &AnswerSubmission::new([1])));
    }

    #[test]
    fn empty_submission_is_incorrect() {
        let q = question(vec![0]);
        assert!(!evaluate(&q, &AnswerSubmission::default()));
    }

    #[test]
    fn single_answer_question() {
        let q = question(vec![1]);
        assert!(evaluate(&q, &AnswerSubmission::new([1])));
        assert!(!evaluate(&q, &AnswerSubmission::new([0])));
    }
}
