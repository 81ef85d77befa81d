//! Aggregate statistics over many scored assessments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scoring::{Recommendation, ScoreBreakdown};

/// Means and tier distribution across a batch of score breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortStats {
    pub count: usize,
    pub mean_psychometric: f64,
    pub mean_technical: f64,
    pub mean_aptitude: f64,
    pub mean_overall: f64,
    /// Number of breakdowns per tier; every tier is present.
    pub tiers: BTreeMap<Recommendation, usize>,
}

impl CohortStats {
    /// Share of the cohort in `tier`, between 0.0 and 1.0.
    pub fn tier_share(&self, tier: Recommendation) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.tiers.get(&tier).copied().unwrap_or(0) as f64 / self.count as f64
    }
}

fn mean(values: impl Iterator<Item = u8>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.map(f64::from).sum::<f64>() / count as f64
}

/// Summarize a batch of score breakdowns.
pub fn summarize(scores: &[ScoreBreakdown]) -> CohortStats {
    let count = scores.len();

    let mut tiers: BTreeMap<Recommendation, usize> =
        Recommendation::ALL.iter().map(|&tier| (tier, 0)).collect();
    for s in scores {
        *tiers.entry(s.recommendation).or_default() += 1;
    }

    CohortStats {
        count,
        mean_psychometric: mean(scores.iter().map(|s| s.psychometric), count),
        mean_technical: mean(scores.iter().map(|s| s.technical), count),
        mean_aptitude: mean(scores.iter().map(|s| s.aptitude), count),
        mean_overall: mean(scores.iter().map(|s| s.overall), count),
        tiers,
    }
}
