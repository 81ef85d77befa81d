//! TOML question bank parser and answer file loader.
//!
//! Loads question banks from TOML files and directories, validates them,
//! and reads answer sets from JSON or TOML files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::answers::AnswerSet;
use crate::model::{default_correct_answers, AnswerKind, Category, Question, QuestionBank};
use crate::scoring::scale_value;

/// TOML source of the built-in prompt engineering bank.
pub const BUILTIN_BANK_TOML: &str = include_str!("../banks/prompt-engineer.toml");

/// Intermediate TOML structure for parsing question bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    correct_answers: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    category: String,
    prompt: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default = "default_kind_str")]
    kind: String,
}

fn default_kind_str() -> String {
    "single".to_string()
}

/// Parse the bank that ships with promptfit.
pub fn builtin_bank() -> Result<QuestionBank> {
    parse_question_bank_str(BUILTIN_BANK_TOML, Path::new("banks/prompt-engineer.toml"))
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_question_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_question_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_question_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let category: Category = q
                .category
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question {}: {}", q.id, e))?;
            let kind: AnswerKind = q
                .kind
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question {}: {}", q.id, e))?;

            Ok(Question {
                id: q.id,
                category,
                prompt: q.prompt,
                options: q.options,
                kind,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionBank {
        id: parsed.bank.id,
        name: parsed.bank.name,
        description: parsed.bank.description,
        questions,
        correct_answers: parsed
            .bank
            .correct_answers
            .unwrap_or_else(default_correct_answers),
    })
}

/// Recursively load all `.toml` question banks from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for path in sorted_entries(dir)? {
        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_question_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();
    Ok(paths)
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Number of questions the positional scoring expects.
const EXPECTED_QUESTIONS: usize = 6;

/// Validate a question bank for common issues.
pub fn validate_question_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.len() != EXPECTED_QUESTIONS {
        warnings.push(ValidationWarning {
            question_id: None,
            message: format!(
                "bank has {} questions, scoring groups expect exactly {EXPECTED_QUESTIONS}",
                bank.len()
            ),
        });
    }

    let mut seen_ids = HashSet::new();
    for question in &bank.questions {
        if !seen_ids.insert(&question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("duplicate question ID: {}", question.id),
            });
        }
    }

    for question in &bank.questions {
        if question.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "prompt is empty".into(),
            });
        }

        if !(2..=5).contains(&question.options.len()) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!(
                    "has {} options, expected between 2 and 5",
                    question.options.len()
                ),
            });
        }

        if question.kind == AnswerKind::Scale {
            for option in &question.options {
                if scale_value(option).is_none() {
                    warnings.push(ValidationWarning {
                        question_id: Some(question.id.clone()),
                        message: format!("scale option '{option}' is not on a known ladder"),
                    });
                }
            }
        }
    }

    // Scoring groups by position; flag declared categories that disagree.
    for group in bank.category_groups() {
        for question in group.questions {
            if question.category != group.category {
                warnings.push(ValidationWarning {
                    question_id: Some(question.id.clone()),
                    message: format!(
                        "declared category {} but scored as {} by position",
                        question.category, group.category
                    ),
                });
            }
        }
    }

    for answer in &bank.correct_answers {
        if !bank.questions.iter().any(|q| q.has_option(answer)) {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("correct answer '{answer}' is not offered by any question"),
            });
        }
    }

    warnings
}

/// Parse an answer set, as JSON when `source_path` ends in `.json` and as
/// TOML otherwise.
pub fn parse_answer_set_str(content: &str, source_path: &Path) -> Result<AnswerSet> {
    if source_path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(content)
            .with_context(|| format!("failed to parse JSON: {}", source_path.display()))
    } else {
        toml::from_str(content)
            .with_context(|| format!("failed to parse TOML: {}", source_path.display()))
    }
}

/// Load an answer set from a `.json` or `.toml` file.
pub fn load_answer_set(path: &Path) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers: {}", path.display()))?;

    parse_answer_set_str(&content, path)
}

/// Load every `.json` and `.toml` answer file in a directory (not recursive).
///
/// Each entry keeps its own parse result so one bad file does not hide the
/// rest.
pub fn load_answer_directory(dir: &Path) -> Result<Vec<(PathBuf, Result<AnswerSet>)>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == "json" || ext == "toml")
        })
        .map(|path| {
            let answers = load_answer_set(&path);
            (path, answers)
        })
        .collect())
}
