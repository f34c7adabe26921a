//! Core session engine for the interactive quiz trainer.
//!
//! Provides:
//! - YAML question-bank parser
//! - Category-aware question repository and random selector
//! - Answer evaluation (exact set equality, no partial credit)
//! - Sequential session runner with injectable input/presentation
//! - Result summarization

pub mod error;
pub mod evaluator;
pub mod loader;
pub mod report;
pub mod repository;
pub mod selector;
pub mod session;
pub mod types;

pub use error::{LoadError, QuizError, Result};
pub use evaluator::evaluate;
pub use loader::parse;
pub use report::{summarize, ReportRow, SessionReport};
pub use repository::QuestionRepository;
pub use selector::select;
pub use session::{AnswerSource, SessionObserver, SessionRunner, SessionState};
pub use types::{AnswerSubmission, Question, QuestionResult, SelectionCriteria};
