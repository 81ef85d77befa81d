//! Static advice keyed on the recommendation tier.

use std::fmt;

use serde::Serialize;

use crate::model::Category;
use crate::scoring::{Recommendation, ScoreBreakdown, MAYBE_THRESHOLD, YES_THRESHOLD};

/// Advice shown alongside a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advice {
    /// Short description of what the tier means for the respondent.
    pub headline: &'static str,
    /// Ordered next steps.
    pub next_steps: [&'static str; 5],
}

const YES_ADVICE: Advice = Advice {
    headline: "You show strong potential for prompt engineering!",
    next_steps: [
        "Start with OpenAI's GPT-4 or Claude to practice prompt crafting",
        "Take the DeepLearning.AI Prompt Engineering course",
        "Join AI communities on Discord or Reddit for peer feedback",
        "Build a portfolio of prompt engineering projects",
        "Apply for prompt engineer roles at AI companies",
    ],
};

const MAYBE_ADVICE: Advice = Advice {
    headline: "You have some potential but need to develop key skills.",
    next_steps: [
        "Learn AI fundamentals through online courses",
        "Practice with free AI tools like ChatGPT",
        "Study prompt engineering terminology and concepts",
        "Follow AI researchers and prompt engineers on social media",
        "Retake this assessment in 3-6 months",
    ],
};

const NOT_NOW_ADVICE: Advice = Advice {
    headline: "Consider building foundational skills first.",
    next_steps: [
        "Explore foundational AI literacy courses",
        "Consider UX design or technical writing paths",
        "Build general programming or analytical skills",
        "Learn about AI ethics and responsible AI development",
        "Explore related fields like data analysis or content strategy",
    ],
};

/// Advice for a recommendation tier.
pub fn advice_for(recommendation: Recommendation) -> Advice {
    match recommendation {
        Recommendation::Yes => YES_ADVICE,
        Recommendation::Maybe => MAYBE_ADVICE,
        Recommendation::NotNow => NOT_NOW_ADVICE,
    }
}

/// How well a career path fits the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchLevel::High => write!(f, "High"),
            MatchLevel::Medium => write!(f, "Medium"),
            MatchLevel::Low => write!(f, "Low"),
        }
    }
}

/// A related career path and its fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerMatch {
    pub title: &'static str,
    pub level: MatchLevel,
}

/// Score at or above which a secondary path is a high match.
const STRONG_SIGNAL: u8 = 70;

fn high_or_medium(score: u8) -> MatchLevel {
    if score >= STRONG_SIGNAL {
        MatchLevel::High
    } else {
        MatchLevel::Medium
    }
}

/// Rate the related career paths against a score breakdown.
pub fn career_matches(scores: &ScoreBreakdown) -> Vec<CareerMatch> {
    let prompt_engineer = if scores.overall >= YES_THRESHOLD {
        MatchLevel::High
    } else if scores.overall >= MAYBE_THRESHOLD {
        MatchLevel::Medium
    } else {
        MatchLevel::Low
    };

    vec![
        CareerMatch {
            title: "Prompt Engineer",
            level: prompt_engineer,
        },
        CareerMatch {
            title: "AI Interaction Designer",
            level: high_or_medium(scores.psychometric),
        },
        CareerMatch {
            title: "LLM QA Tester",
            level: high_or_medium(scores.technical),
        },
        CareerMatch {
            title: "AI Product Manager",
            level: high_or_medium(scores.overall),
        },
    ]
}

/// A recommended learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const RESOURCES: [Resource; 3] = [
    Resource {
        title: "DeepLearning.AI Course",
        summary: "Prompt Engineering for Developers",
    },
    Resource {
        title: "OpenAI Cookbook",
        summary: "Practical examples and techniques",
    },
    Resource {
        title: "AI Discord Communities",
        summary: "Connect with other practitioners",
    },
];

/// Display title and description of a scoring category.
pub fn category_details(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Psychometric => (
            "Psychometric Fit",
            "Personality traits and cognitive style alignment",
        ),
        Category::Technical => (
            "Technical Knowledge",
            "Understanding of AI and prompt engineering concepts",
        ),
        Category::Aptitude => (
            "Learning Aptitude",
            "Growth mindset and persistence for skill development",
        ),
    }
}
