//! Session result summarization.

use serde::{Deserialize, Serialize};

use crate::types::QuestionResult;

/// One summary line per answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub question: String,
    pub correct_answers: Vec<String>,
    pub correct: bool,
    /// Help text, carried only for questions answered incorrectly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

/// Aggregate outcome of a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub rows: Vec<ReportRow>,
}

/// Build the summary for a finished session. Pure; an empty result
/// list yields a zero-count report, not an error.
pub fn summarize(results: &[QuestionResult]) -> SessionReport {
    let rows: Vec<ReportRow> = results
        .iter()
        .map(|result| ReportRow {
            question: result.question.text.clone(),
            correct_answers: result
                .question
                .correct_texts()
                .into_iter()
                .map(str::to_string)
                .collect(),
            correct: result.correct,
            help: if result.correct {
                None
            } else {
                result.question.help.clone()
            },
        })
        .collect();

    let correct = rows.iter().filter(|row| row.correct).count();

    SessionReport {
        total: rows.len(),
        correct,
        incorrect: rows.len() - correct,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnswerSubmission, Question};
    use pretty_assertions::assert_eq;

    fn result(text: &str, correct: bool, help: Option<&str>) -> QuestionResult {
        QuestionResult {
            question: Question {
                text: text.to_string(),
                category: "A".to_string(),
                options: vec!["x".to_string(), "y".to_string(), "z".to_string()],
                correct: vec![0, 2],
                help: help.map(str::to_string),
            },
            submission: AnswerSubmission::new(if correct { vec![0, 2] } else { vec![1] }),
            correct,
        }
    }

    #[test]
    fn counts_and_rows() {
        let results = vec![
            result("q1", true, None),
            result("q2", false, Some("read the docs")),
            result("q3", false, None),
        ];
        let report = summarize(&results);

        assert_eq!(report.total, 3);
        assert_eq!(report.correct, 1);
        assert_eq!(report.incorrect, 2);
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[0].question, "q1");
        assert_eq!(report.rows[0].correct_answers, vec!["x", "z"]);
    }

    #[test]
    fn help_only_on_incorrect_rows() {
        let results = vec![
            result("right", true, Some("unused")),
            result("wrong", false, Some("shown")),
        ];
        let report = summarize(&results);

        assert_eq!(report.rows[0].help, None);
        assert_eq!(report.rows[1].help.as_deref(), Some("shown"));
    }

    #[test]
    fn empty_results_is_a_zero_report() {
        let report = summarize(&[]);
        assert_eq!(report, SessionReport::default());
    }

    #[test]
    fn summarize_does_not_consume_results() {
        let results = vec![result("q1", true, None)];
        let _ = summarize(&results);
        assert_eq!(results.len(), 1);
    }
}
