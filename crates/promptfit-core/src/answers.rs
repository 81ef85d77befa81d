//! The answer set handed from an answer collector to the scoring engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::QuestionBank;

/// Selected option label per question id.
///
/// Inserting an answer for a question that already has one replaces it, so
/// revisiting a question never produces duplicate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the label it replaced.
    pub fn insert(
        &mut self,
        question_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Option<String> {
        self.answers.insert(question_id.into(), label.into())
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn remove(&mut self, question_id: &str) -> Option<String> {
        self.answers.remove(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate over `(question_id, label)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check that every answered question exists in `bank`.
    pub fn validate_against(&self, bank: &QuestionBank) -> Result<(), ValidationError> {
        match self.answers.keys().find(|id| bank.question(id).is_none()) {
            Some(id) => Err(ValidationError::UnknownQuestion {
                question_id: id.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
