//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors that can occur while preparing or running a session.
///
/// Each variant is terminal for the current invocation; nothing here
/// is retried or recovered from inside the core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("unknown category: {0}")]
    InvalidCategory(String),

    #[error("no questions available for the requested categories")]
    EmptyQuestionPool,

    #[error("question count must be positive")]
    InvalidCount,

    #[error("input ended after {answered} of {total} questions")]
    IncompleteSession { answered: usize, total: usize },
}

/// Errors that can occur while parsing a question-bank file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid question file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("question has no answer options: {question}")]
    NoOptions { question: String },

    #[error("question has no option marked correct: {question}")]
    NoCorrectOption { question: String },
}
