//! Question-by-question answer collection.
//!
//! An [`AssessmentSession`] walks a bank one question at a time, holding
//! the pending selection separately from committed answers so that going
//! back restores what was chosen before. Finishing hands the complete
//! [`AnswerSet`] to the caller by value.

use crate::answers::AnswerSet;
use crate::error::ValidationError;
use crate::model::{Question, QuestionBank};

/// Outcome of [`AssessmentSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    /// Nothing is selected for the current question.
    NeedsSelection,
    /// Moved on to the question at this index.
    Next(usize),
    /// The last question was answered.
    Complete,
}

#[derive(Debug, Clone)]
pub struct AssessmentSession<'a> {
    bank: &'a QuestionBank,
    current: usize,
    selected: Option<String>,
    answers: AnswerSet,
    complete: bool,
}

impl<'a> AssessmentSession<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self {
            bank,
            current: 0,
            selected: None,
            answers: AnswerSet::new(),
            complete: false,
        }
    }

    pub fn bank(&self) -> &'a QuestionBank {
        self.bank
    }

    /// Zero-based index of the current question.
    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        self.bank.questions.get(self.current)
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Choose an option for the current question without committing it.
    pub fn select(&mut self, option: &str) -> Result<(), ValidationError> {
        let question = self.current_question().ok_or(ValidationError::SessionIncomplete {
            answered: self.answers.len(),
            total: self.bank.len(),
        })?;
        if !question.has_option(option) {
            return Err(ValidationError::UnknownOption {
                question_id: question.id.clone(),
                option: option.to_string(),
            });
        }
        self.selected = Some(option.to_string());
        Ok(())
    }

    /// Commit the selection and move to the next question.
    pub fn advance(&mut self) -> SessionStep {
        let Some(question) = self.current_question() else {
            return SessionStep::NeedsSelection;
        };
        let Some(selected) = self.selected.take() else {
            return SessionStep::NeedsSelection;
        };
        self.answers.insert(question.id.clone(), selected);

        if self.current + 1 < self.bank.len() {
            self.current += 1;
            self.selected = self
                .current_question()
                .and_then(|q| self.answers.get(&q.id))
                .map(str::to_string);
            SessionStep::Next(self.current)
        } else {
            self.complete = true;
            self.selected = self.answers.get(&question.id).map(str::to_string);
            SessionStep::Complete
        }
    }

    /// Step back one question, restoring its stored answer as the selection.
    ///
    /// Returns `false` on the first question.
    pub fn back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.complete = false;
        self.selected = self
            .current_question()
            .and_then(|q| self.answers.get(&q.id))
            .map(str::to_string);
        true
    }

    /// Percentage of questions passed, as shown on a progress bar.
    pub fn progress_percent(&self) -> f64 {
        if self.bank.is_empty() {
            return 100.0;
        }
        self.current as f64 / self.bank.len() as f64 * 100.0
    }

    /// `true` once the last question has been committed and every question
    /// has an answer.
    pub fn is_complete(&self) -> bool {
        self.complete
            && self
                .bank
                .questions
                .iter()
                .all(|q| self.answers.contains(&q.id))
    }

    /// Hand over the collected answers.
    pub fn finish(self) -> Result<AnswerSet, ValidationError> {
        if !self.is_complete() {
            return Err(ValidationError::SessionIncomplete {
                answered: self.answers.len(),
                total: self.bank.len(),
            });
        }
        Ok(self.answers)
    }
}
