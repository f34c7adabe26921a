//! Random question selection.

use rand::seq::SliceRandom;

use crate::error::{QuizError, Result};
use crate::types::Question;

/// Draw up to `count` questions from `pool` in random order, without
/// repetition. Asking for more than the pool holds returns the whole
/// pool, shuffled.
pub fn select(mut pool: Vec<Question>, count: usize) -> Result<Vec<Question>> {
    if count == 0 {
        return Err(QuizError::InvalidCount);
    }
    if pool.is_empty() {
        return Err(QuizError::EmptyQuestionPool);
    }

    pool.shuffle(&mut rand::thread_rng());
    pool.truncate(count);
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(size: usize) -> Vec<Question> {
        (0..size)
            .map(|i| Question {
                text: format!("q{i}"),
                category: "A".to_string(),
                options: vec!["yes".to_string(), "no".to_string()],
                correct: vec![0],
                help: None,
            })
            .collect()
    }

    fn texts(questions: &[Question]) -> Vec<String> {
        let mut texts: Vec<String> = questions.iter().map(|q| q.text.clone()).collect();
        texts.sort();
        texts
    }

    #[test]
    fn count_at_least_pool_size_is_a_permutation() {
        let original = pool(5);
        let selected = select(original.clone(), 9).unwrap();
        assert_eq!(texts(&selected), texts(&original));
    }

    #[test]
    fn partial_count_draws_distinct_questions_from_pool() {
        let original = pool(10);
        let selected = select(original.clone(), 4).unwrap();
        assert_eq!(selected.len(), 4);

        let mut seen = texts(&selected);
        seen.dedup();
        assert_eq!(seen.len(), 4);
        let all = texts(&original);
        assert!(seen.iter().all(|t| all.contains(t)));
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert_eq!(select(vec![], 3), Err(QuizError::EmptyQuestionPool));
    }

    #[test]
    fn zero_count_is_rejected() {
        assert_eq!(select(pool(3), 0), Err(QuizError::InvalidCount));
    }

    #[test]
    fn zero_count_wins_over_empty_pool() {
        assert_eq!(select(vec![], 0), Err(QuizError::InvalidCount));
    }
}
