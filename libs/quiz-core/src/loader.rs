//! YAML parser for question-bank files.
//!
//! # Format
//! One file per category:
//! ```yaml
//! category: "Basics"
//! questions:
//!     - question: "Which keyword declares a constant?"
//!       answers:
//!           - { value: "const", correct: true }
//!           - { value: "let", correct: false }
//!       help: "See the language reference on items."
//! ```

use serde::Deserialize;

use crate::error::LoadError;
use crate::types::Question;

#[derive(Debug, Deserialize)]
struct RawBank {
    category: String,
    questions: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    answers: Vec<RawAnswer>,
    #[serde(default)]
    help: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAnswer {
    value: String,
    #[serde(default)]
    correct: bool,
}

/// Parse one category file into validated questions.
///
/// Enforces the load-time invariant that every question carries at
/// least one option marked correct.
pub fn parse(content: &str) -> Result<Vec<Question>, LoadError> {
    let RawBank {
        category,
        questions,
    } = serde_yaml::from_str(content)?;

    questions
        .into_iter()
        .map(|raw| convert(raw, &category))
        .collect()
}

fn convert(raw: RawQuestion, category: &str) -> Result<Question, LoadError> {
    if raw.answers.is_empty() {
        return Err(LoadError::NoOptions {
            question: raw.question,
        });
    }

    let correct: Vec<usize> = raw
        .answers
        .iter()
        .enumerate()
        .filter(|(_, answer)| answer.correct)
        .map(|(index, _)| index)
        .collect();

    if correct.is_empty() {
        return Err(LoadError::NoCorrectOption {
            question: raw.question,
        });
    }

    Ok(Question {
        text: raw.question,
        category: category.to_string(),
        options: raw.answers.into_iter().map(|a| a.value).collect(),
        correct,
        help: raw.help,
    })
}
