//! In-memory question repository.

use crate::error::{QuizError, Result};
use crate::types::Question;

/// Holds every loaded question. Populated once by the loader and
/// read-only afterwards; passed by reference into the selector and
/// the session runner.
#[derive(Debug, Clone, Default)]
pub struct QuestionRepository {
    questions: Vec<Question>,
}

impl QuestionRepository {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for question in &self.questions {
            if !seen.contains(&question.category.as_str()) {
                seen.push(question.category.as_str());
            }
        }
        seen
    }

    /// All questions whose category is in `categories`; an empty
    /// request means every question. A category absent from the
    /// repository is rejected rather than silently matching nothing.
    pub fn questions_in(&self, categories: &[String]) -> Result<Vec<Question>> {
        if categories.is_empty() {
            return Ok(self.questions.clone());
        }

        let known = self.categories();
        for category in categories {
            if !known.contains(&category.as_str()) {
                return Err(QuizError::InvalidCategory(category.clone()));
            }
        }

        Ok(self
            .questions
            .iter()
            .filter(|q| categories.contains(&q.category))
            .cloned()
            .collect())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
