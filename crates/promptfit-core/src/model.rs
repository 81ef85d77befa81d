//! Core data model types for promptfit.
//!
//! A [`QuestionBank`] is static configuration: it is loaded once, never
//! mutated, and handed to the scoring engine by reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of consecutive questions that make up one category group.
pub const GROUP_SIZE: usize = 2;

/// The scoring dimensions of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Psychometric,
    Technical,
    Aptitude,
}

impl Category {
    /// All categories, in the positional order used for grouping.
    pub const ALL: [Category; 3] = [
        Category::Psychometric,
        Category::Technical,
        Category::Aptitude,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Psychometric => write!(f, "psychometric"),
            Category::Technical => write!(f, "technical"),
            Category::Aptitude => write!(f, "aptitude"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "psychometric" => Ok(Category::Psychometric),
            "technical" => Ok(Category::Technical),
            "aptitude" => Ok(Category::Aptitude),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// How a question's options are presented and scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKind {
    /// An ordinal agreement or frequency ladder.
    Scale,
    /// A single choice among distinct options.
    Single,
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKind::Scale => write!(f, "scale"),
            AnswerKind::Single => write!(f, "single"),
        }
    }
}

impl FromStr for AnswerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scale" => Ok(AnswerKind::Scale),
            "single" => Ok(AnswerKind::Single),
            other => Err(format!("unknown answer kind: {other}")),
        }
    }
}

/// A single question presented to the respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the bank.
    pub id: String,
    /// Declared category. Display only; scoring groups by position.
    pub category: Category,
    /// The question text.
    pub prompt: String,
    /// Option labels, in presentation order.
    pub options: Vec<String>,
    /// Scale or single-choice.
    pub kind: AnswerKind,
}

impl Question {
    /// Returns `true` if `label` is one of this question's options.
    pub fn has_option(&self, label: &str) -> bool {
        self.options.iter().any(|o| o == label)
    }
}

/// An ordered set of questions plus the answers that count as correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Unique identifier for this bank.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of this bank.
    #[serde(default)]
    pub description: String,
    /// The questions, in the order they are asked.
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Option labels that score full marks on knowledge questions.
    #[serde(default = "default_correct_answers")]
    pub correct_answers: Vec<String>,
}

/// The knowledge-question answers of the built-in prompt engineering bank.
pub fn default_correct_answers() -> Vec<String> {
    vec![
        "Crafting inputs to get better AI outputs".to_string(),
        "A parameter controlling randomness in outputs".to_string(),
    ]
}

/// The questions of one positional category group.
#[derive(Debug, Clone, Copy)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub questions: &'a [Question],
}

impl QuestionBank {
    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Zero-based position of a question in the bank.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Split the bank into its three category groups by position.
    ///
    /// The first two questions are psychometric, the next two technical and
    /// the last two aptitude, regardless of each question's declared
    /// category. Groups are clamped to the bank length, so a short bank
    /// yields short (or empty) groups, and questions past the sixth belong
    /// to no group.
    pub fn category_groups(&self) -> [CategoryGroup<'_>; 3] {
        let len = self.questions.len();
        let mut start = 0;
        Category::ALL.map(|category| {
            let from = start.min(len);
            let to = (start + GROUP_SIZE).min(len);
            start += GROUP_SIZE;
            CategoryGroup {
                category,
                questions: &self.questions[from..to],
            }
        })
    }
}
