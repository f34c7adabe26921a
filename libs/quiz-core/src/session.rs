//! Interactive session runner.
//!
//! The runner is driven through two injected capabilities: an
//! [`AnswerSource`] that blocks for the next raw reply, and a
//! [`SessionObserver`] that receives presentation callbacks. A live
//! terminal and a scripted test source plug in the same way.

use crate::error::{QuizError, Result};
use crate::evaluator::evaluate;
use crate::types::{AnswerSubmission, Question, QuestionResult, SelectionCriteria};

/// Lifecycle of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Ready,
    Running,
    Finished,
}

/// Capability for reading the next raw answer line.
///
/// `None` means the underlying input is exhausted, which aborts the
/// session as incomplete.
pub trait AnswerSource {
    fn read_answer(&mut self, question: &Question) -> Option<String>;
}

/// Presentation callbacks emitted while the session runs. The core
/// hands over plain structured data; rendering is the caller's job.
pub trait SessionObserver {
    /// Called before the answer for a question is read.
    /// `announce_choice_kind` is false when the user asked to hide
    /// the single/multiple answer hint.
    fn question_presented(
        &mut self,
        number: usize,
        total: usize,
        question: &Question,
        announce_choice_kind: bool,
    );

    /// Called right after a question is scored, in training mode only.
    fn feedback(&mut self, result: &QuestionResult);
}

/// Runs one set of selected questions to completion, strictly in
/// order, one blocking read per question. No retries, no skipping.
#[derive(Debug)]
pub struct SessionRunner {
    criteria: SelectionCriteria,
    questions: Vec<Question>,
    state: SessionState,
    results: Vec<QuestionResult>,
}

impl SessionRunner {
    pub fn new(criteria: SelectionCriteria, questions: Vec<Question>) -> Self {
        Self {
            criteria,
            questions,
            state: SessionState::Ready,
            results: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Accumulated results, available once the session has finished.
    /// An aborted session never hands out its partial results.
    pub fn results(&self) -> Option<&[QuestionResult]> {
        match self.state {
            SessionState::Finished => Some(&self.results),
            _ => None,
        }
    }

    /// Process every question once. Returns the accumulated results
    /// on completion, or `IncompleteSession` if the input ends early.
    pub fn run<S, O>(&mut self, source: &mut S, observer: &mut O) -> Result<&[QuestionResult]>
    where
        S: AnswerSource,
        O: SessionObserver,
    {
        if self.state == SessionState::Finished {
            return Ok(&self.results);
        }
        self.state = SessionState::Running;

        let total = self.questions.len();
        while self.results.len() < total {
            let question = &self.questions[self.results.len()];
            observer.question_presented(
                self.results.len() + 1,
                total,
                question,
                !self.criteria.hide_multiple_choice,
            );

            let raw = match source.read_answer(question) {
                Some(raw) => raw,
                None => {
                    return Err(QuizError::IncompleteSession {
                        answered: self.results.len(),
                        total,
                    })
                }
            };

            let submission = AnswerSubmission::parse(&raw, question.options.len());
            let result = QuestionResult {
                correct: evaluate(question, &submission),
                question: question.clone(),
                submission,
            };

            if self.criteria.training {
                observer.feedback(&result);
            }
            self.results.push(result);
        }

        self.state = SessionState::Finished;
        Ok(&self.results)
    }
}
