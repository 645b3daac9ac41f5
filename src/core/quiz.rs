use std::collections::BTreeMap;

use super::content::QuizQuestion;
use super::types::QuizOutcome;
use crate::error::{Error, Result};

/// Chosen option per question index.
pub type Answers = BTreeMap<usize, String>;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AttemptState {
    InProgress,
    Submitted,
}

/// One pass through a topic's quiz.
#[derive(Debug, Clone)]
pub struct QuizAttempt<'a> {
    questions: &'a [QuizQuestion],
    answers: Answers,
    state: AttemptState,
    outcome: Option<QuizOutcome>,
}

impl<'a> QuizAttempt<'a> {
    pub fn new(questions: &'a [QuizQuestion]) -> Self {
        Self {
            questions,
            answers: Answers::new(),
            state: AttemptState::InProgress,
            outcome: None,
        }
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn outcome(&self) -> Option<QuizOutcome> {
        self.outcome
    }

    /// Last write wins. The option is not checked against the question.
    pub fn record_answer(
        &mut self,
        question_index: usize,
        chosen: impl Into<String>,
    ) -> Result<()> {
        if self.state != AttemptState::InProgress {
            return Err(Error::invalid("quiz already submitted; reset before answering"));
        }
        if question_index >= self.questions.len() {
            return Err(Error::invalid(format!(
                "question index {question_index} out of range (quiz has {})",
                self.questions.len()
            )));
        }
        self.answers.insert(question_index, chosen.into());
        Ok(())
    }

    pub fn submit(&mut self) -> Result<QuizOutcome> {
        if self.state != AttemptState::InProgress {
            return Err(Error::invalid("quiz already submitted"));
        }
        let outcome = grade(&self.answers, self.questions)?;
        self.outcome = Some(outcome);
        self.state = AttemptState::Submitted;
        Ok(outcome)
    }

    pub fn reset(&mut self) {
        self.answers.clear();
        self.outcome = None;
        self.state = AttemptState::InProgress;
    }
}

/// Scores a complete answer set. There is no partial-credit path: every
/// question must be answered.
pub fn grade(answers: &Answers, questions: &[QuizQuestion]) -> Result<QuizOutcome> {
    if let Some(index) = answers.keys().find(|&&index| index >= questions.len()) {
        return Err(Error::invalid(format!(
            "answer for question {index} but quiz has {}",
            questions.len()
        )));
    }
    if questions.is_empty() || answers.len() != questions.len() {
        return Err(Error::IncompleteSubmission {
            answered: answers.len(),
            expected: questions.len(),
        });
    }

    let score = questions
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            answers
                .get(index)
                .is_some_and(|chosen| chosen == question.correct_answer)
        })
        .count();

    Ok(QuizOutcome {
        score,
        total: questions.len(),
        percentage: percentage(score, questions.len()),
    })
}

fn percentage(score: usize, total: usize) -> u8 {
    ((score as f64 / total as f64) * 100.0).round() as u8
}
