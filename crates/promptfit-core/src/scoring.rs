//! Answer scoring and the recommendation step function.
//!
//! Every answer maps to a value on a 1-5 ladder. Each category score is the
//! mean of its group's two values scaled to 0-100, the overall score is the
//! mean of the three category scores, and the recommendation tier is a step
//! function of the overall score.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::answers::AnswerSet;
use crate::error::ValidationError;
use crate::model::{Category, QuestionBank, GROUP_SIZE};

/// Agreement ladder, lowest to highest.
pub const AGREEMENT_LADDER: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// Frequency ladder, lowest to highest.
pub const FREQUENCY_LADDER: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Always"];

/// Points awarded per ladder step when scaling a mean to 0-100.
pub const POINTS_PER_STEP: u32 = 20;

/// Value of a designated correct answer.
pub const CORRECT_ANSWER_SCORE: u8 = 5;

/// Value of any answer that is neither on a ladder nor correct.
pub const FALLBACK_SCORE: u8 = 2;

/// Lowest overall score recommended outright.
pub const YES_THRESHOLD: u8 = 80;

/// Lowest overall score that earns a qualified recommendation.
pub const MAYBE_THRESHOLD: u8 = 60;

/// Position of `label` on either ladder, as 1-5.
pub fn scale_value(label: &str) -> Option<u8> {
    AGREEMENT_LADDER
        .iter()
        .position(|l| *l == label)
        .or_else(|| FREQUENCY_LADDER.iter().position(|l| *l == label))
        .map(|i| i as u8 + 1)
}

/// Score a single answer label.
///
/// Ladder labels score their position, designated correct answers score 5,
/// and anything else falls back to 2. Matching is exact.
pub fn score_answer(label: &str, correct_answers: &[String]) -> u8 {
    if let Some(value) = scale_value(label) {
        return value;
    }
    if correct_answers.iter().any(|c| c == label) {
        return CORRECT_ANSWER_SCORE;
    }
    FALLBACK_SCORE
}

/// Integer division rounding halves up. `den` must be non-zero.
fn div_round(num: u32, den: u32) -> u32 {
    (2 * num + den) / (2 * den)
}

/// Mean of `values` scaled by [`POINTS_PER_STEP`], rounded and clamped to 100.
pub fn category_score(values: &[u8]) -> u8 {
    if values.is_empty() {
        return 0;
    }
    let sum: u32 = values.iter().map(|&v| u32::from(v)).sum();
    div_round(sum * POINTS_PER_STEP, values.len() as u32).min(100) as u8
}

/// Rounded mean of the three category scores.
pub fn overall_score(psychometric: u8, technical: u8, aptitude: u8) -> u8 {
    let sum = u32::from(psychometric) + u32::from(technical) + u32::from(aptitude);
    div_round(sum, 3).min(100) as u8
}

/// The recommendation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Recommendation {
    Yes,
    Maybe,
    #[serde(rename = "Not Now")]
    NotNow,
}

impl Recommendation {
    pub const ALL: [Recommendation; 3] = [
        Recommendation::Yes,
        Recommendation::Maybe,
        Recommendation::NotNow,
    ];

    /// Tier for an overall score; lower bounds are inclusive.
    pub fn from_overall(overall: u8) -> Self {
        if overall >= YES_THRESHOLD {
            Recommendation::Yes
        } else if overall >= MAYBE_THRESHOLD {
            Recommendation::Maybe
        } else {
            Recommendation::NotNow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Yes => "Yes",
            Recommendation::Maybe => "Maybe",
            Recommendation::NotNow => "Not Now",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Recommendation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "yes" => Ok(Recommendation::Yes),
            "maybe" => Ok(Recommendation::Maybe),
            "not now" | "notnow" => Ok(Recommendation::NotNow),
            other => Err(format!("unknown recommendation: {other}")),
        }
    }
}

/// Scores derived from one completed answer set.
///
/// Deserializing checks that the stored values are what
/// [`ScoreBreakdown::from_categories`] would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredBreakdown")]
pub struct ScoreBreakdown {
    pub psychometric: u8,
    pub technical: u8,
    pub aptitude: u8,
    pub overall: u8,
    pub recommendation: Recommendation,
}

impl ScoreBreakdown {
    /// Derive the overall score and tier from three category scores.
    pub fn from_categories(psychometric: u8, technical: u8, aptitude: u8) -> Self {
        let psychometric = psychometric.min(100);
        let technical = technical.min(100);
        let aptitude = aptitude.min(100);
        let overall = overall_score(psychometric, technical, aptitude);
        Self {
            psychometric,
            technical,
            aptitude,
            overall,
            recommendation: Recommendation::from_overall(overall),
        }
    }

    /// Score for one category.
    pub fn category(&self, category: Category) -> u8 {
        match category {
            Category::Psychometric => self.psychometric,
            Category::Technical => self.technical,
            Category::Aptitude => self.aptitude,
        }
    }
}

/// Field-for-field shape of a serialized [`ScoreBreakdown`].
#[derive(Deserialize)]
struct StoredBreakdown {
    psychometric: u8,
    technical: u8,
    aptitude: u8,
    overall: u8,
    recommendation: Recommendation,
}

impl TryFrom<StoredBreakdown> for ScoreBreakdown {
    type Error = String;

    fn try_from(stored: StoredBreakdown) -> Result<Self, Self::Error> {
        for (name, score) in [
            ("psychometric", stored.psychometric),
            ("technical", stored.technical),
            ("aptitude", stored.aptitude),
        ] {
            if score > 100 {
                return Err(format!("{name} score {score} is above 100"));
            }
        }

        let derived =
            ScoreBreakdown::from_categories(stored.psychometric, stored.technical, stored.aptitude);
        if stored.overall != derived.overall {
            return Err(format!(
                "overall score {} does not match category scores (expected {})",
                stored.overall, derived.overall
            ));
        }
        if stored.recommendation != derived.recommendation {
            return Err(format!(
                "recommendation {} does not match overall score {} (expected {})",
                stored.recommendation, derived.overall, derived.recommendation
            ));
        }
        Ok(derived)
    }
}

/// Turns answer sets into [`ScoreBreakdown`]s against a fixed bank.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    bank: &'a QuestionBank,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &'a QuestionBank {
        self.bank
    }

    /// Score a completed answer set.
    ///
    /// Fails if the bank repeats a question id, if the set names a question
    /// the bank lacks, or if any positional category group has fewer than
    /// two answers.
    pub fn evaluate(&self, answers: &AnswerSet) -> Result<ScoreBreakdown, ValidationError> {
        let mut seen = HashSet::new();
        if let Some(question) = self.bank.questions.iter().find(|q| !seen.insert(&q.id)) {
            return Err(ValidationError::DuplicateQuestion {
                question_id: question.id.clone(),
            });
        }
        answers.validate_against(self.bank)?;

        let mut scores = [0u8; 3];
        for (slot, group) in scores.iter_mut().zip(self.bank.category_groups()) {
            let values: Vec<u8> = group
                .questions
                .iter()
                .filter_map(|q| answers.get(&q.id))
                .map(|label| score_answer(label, &self.bank.correct_answers))
                .collect();

            if values.len() < GROUP_SIZE {
                return Err(ValidationError::IncompleteCategory {
                    category: group.category,
                    answered: values.len(),
                    required: GROUP_SIZE,
                });
            }

            *slot = category_score(&values);
            tracing::debug!(category = %group.category, ?values, score = *slot, "scored category");
        }

        let breakdown = ScoreBreakdown::from_categories(scores[0], scores[1], scores[2]);
        tracing::info!(
            bank = %self.bank.id,
            overall = breakdown.overall,
            recommendation = %breakdown.recommendation,
            "evaluated answer set"
        );
        Ok(breakdown)
    }
}
