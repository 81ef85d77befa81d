//! Assessment reports with JSON persistence and retake comparison.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::advice::{advice_for, career_matches, category_details};
use crate::answers::AnswerSet;
use crate::model::{Category, QuestionBank};
use crate::scoring::{Recommendation, ScoreBreakdown};

/// One scored assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the bank the answers were scored against.
    pub bank: BankSummary,
    /// The answers as collected.
    pub answers: AnswerSet,
    /// The derived scores.
    pub scores: ScoreBreakdown,
}

/// Summary of a question bank (without the full question definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}

impl AssessmentReport {
    pub fn new(bank: &QuestionBank, answers: AnswerSet, scores: ScoreBreakdown) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            bank: BankSummary {
                id: bank.id.clone(),
                name: bank.name.clone(),
                question_count: bank.len(),
            },
            answers,
            scores,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the scores, advice and career matches as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        let advice = advice_for(self.scores.recommendation);

        md.push_str(&format!("## {}\n\n", self.bank.name));
        md.push_str(&format!(
            "**Recommendation:** {} ({}/100)\n\n{}\n\n",
            self.scores.recommendation, self.scores.overall, advice.headline
        ));

        md.push_str("| Dimension | Score |\n");
        md.push_str("|-----------|-------|\n");
        for category in Category::ALL {
            let (title, _) = category_details(category);
            md.push_str(&format!(
                "| {} | {}/100 |\n",
                title,
                self.scores.category(category)
            ));
        }
        md.push('\n');

        md.push_str("### Next Steps\n\n");
        for step in advice.next_steps {
            md.push_str(&format!("- {step}\n"));
        }
        md.push('\n');

        md.push_str("### Career Paths\n\n");
        for career in career_matches(&self.scores) {
            md.push_str(&format!("- {}: {} match\n", career.title, career.level));
        }

        md
    }

    /// Compare this report against an earlier attempt.
    ///
    /// A dimension counts as improved or declined only when it moved by at
    /// least `threshold` points.
    pub fn compare(&self, baseline: &AssessmentReport, threshold: u8) -> ProgressReport {
        let dimension =
            |name: &str, before: u8, after: u8| ScoreDelta::new(name, before, after, threshold);

        let mut deltas = vec![dimension(
            "overall",
            baseline.scores.overall,
            self.scores.overall,
        )];
        deltas.extend(Category::ALL.iter().map(|&category| {
            dimension(
                &category.to_string(),
                baseline.scores.category(category),
                self.scores.category(category),
            )
        }));

        ProgressReport {
            baseline_id: baseline.id,
            current_id: self.id,
            deltas,
            baseline_recommendation: baseline.scores.recommendation,
            current_recommendation: self.scores.recommendation,
        }
    }
}

/// Direction of a score change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improved,
    Declined,
    Unchanged,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Improved => write!(f, "improved"),
            Trend::Declined => write!(f, "declined"),
            Trend::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// The change in one scored dimension between two attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub dimension: String,
    pub baseline: u8,
    pub current: u8,
    pub delta: i16,
    pub trend: Trend,
}

impl ScoreDelta {
    fn new(dimension: &str, baseline: u8, current: u8, threshold: u8) -> Self {
        let delta = i16::from(current) - i16::from(baseline);
        let trend = if delta.unsigned_abs() >= u16::from(threshold.max(1)) {
            if delta > 0 {
                Trend::Improved
            } else {
                Trend::Declined
            }
        } else {
            Trend::Unchanged
        };
        Self {
            dimension: dimension.to_string(),
            baseline,
            current,
            delta,
            trend,
        }
    }
}

/// Result of comparing two attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    pub baseline_id: Uuid,
    pub current_id: Uuid,
    /// Overall first, then one entry per category.
    pub deltas: Vec<ScoreDelta>,
    pub baseline_recommendation: Recommendation,
    pub current_recommendation: Recommendation,
}

impl ProgressReport {
    /// Returns true if the recommendation tier differs between attempts.
    pub fn tier_changed(&self) -> bool {
        self.baseline_recommendation != self.current_recommendation
    }

    /// Returns true if any dimension declined.
    pub fn has_declines(&self) -> bool {
        self.deltas.iter().any(|d| d.trend == Trend::Declined)
    }

    /// Format the progress report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Recommendation:** {} -> {}\n\n",
            self.baseline_recommendation, self.current_recommendation
        ));
        md.push_str("| Dimension | Baseline | Current | Delta | Trend |\n");
        md.push_str("|-----------|----------|---------|-------|-------|\n");
        for d in &self.deltas {
            md.push_str(&format!(
                "| {} | {} | {} | {:+} | {} |\n",
                d.dimension, d.baseline, d.current, d.delta, d.trend
            ));
        }

        md
    }
}
