//! Core types for the quiz trainer.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A loaded quiz question.
///
/// Questions are built once by the loader and read-only afterwards.
/// The loader guarantees that `correct` is non-empty and that every
/// index in it points at an existing option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub category: String,
    /// Candidate answers, presented to the user by 0-based index.
    pub options: Vec<String>,
    /// Indices of the options marked correct, ascending.
    pub correct: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Question {
    /// Whether more than one option is correct. Display hint only;
    /// correctness is always exact set equality regardless.
    pub fn is_multiple_choice(&self) -> bool {
        self.correct.len() > 1
    }

    /// Texts of the options marked correct, in option order.
    pub fn correct_texts(&self) -> Vec<&str> {
        self.correct
            .iter()
            .filter_map(|&i| self.options.get(i).map(String::as_str))
            .collect()
    }
}

/// What the user asked for on the command line, as far as the core
/// is concerned. Built once per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCriteria {
    /// Requested categories; empty means all.
    pub categories: Vec<String>,
    /// Number of questions to draw.
    pub count: usize,
    /// Suppress the single/multiple answer hint when presenting.
    pub hide_multiple_choice: bool,
    /// Immediate per-question feedback instead of deferred-only.
    pub training: bool,
}

/// The set of option indices the user selected for one question.
///
/// An empty set is a valid submission ("no answer") and simply
/// scores as incorrect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    selected: BTreeSet<usize>,
}

impl AnswerSubmission {
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            selected: indices.into_iter().collect(),
        }
    }

    /// Build a submission from a raw reply like `"0"` or `"0, 2"`.
    ///
    /// Tokens are validated one by one: anything unparsable or out of
    /// range for the question contributes no selected option, it
    /// never aborts the question.
    pub fn parse(raw: &str, option_count: usize) -> Self {
        let selected = raw
            .split([',', ' '])
            .filter(|token| !token.is_empty())
            .filter_map(|token| match token.trim().parse::<usize>() {
                Ok(index) if index < option_count => Some(index),
                _ => None,
            })
            .collect();

        Self { selected }
    }

    pub fn indices(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Outcome of one answered question. Immutable once created; owned
/// by the session runner until the session finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question: Question,
    pub submission: AnswerSubmission,
    pub correct: bool,
}
