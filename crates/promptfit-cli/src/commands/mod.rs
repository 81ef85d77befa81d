//! Subcommand implementations and the helpers they share.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Result;

use promptfit_core::answers::AnswerSet;
use promptfit_core::config::PromptfitConfig;
use promptfit_core::model::QuestionBank;
use promptfit_core::parser;
use promptfit_core::report::AssessmentReport;
use promptfit_core::scoring::ScoringEngine;

use crate::render;

pub mod batch;
pub mod compare;
pub mod init;
pub mod score;
pub mod take;
pub mod validate;

/// How a scored report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => anyhow::bail!("unknown format: {other} (expected text, json or markdown)"),
        }
    }
}

/// The `--format` flag if given, else the configured default.
pub fn output_format(flag: Option<String>, config: &PromptfitConfig) -> Result<OutputFormat> {
    flag.as_deref().unwrap_or(&config.default_format).parse()
}

/// Load the bank named on the command line, then the configured one, then
/// fall back to the built-in bank.
pub fn resolve_bank(flag: Option<PathBuf>, config: &PromptfitConfig) -> Result<QuestionBank> {
    match flag.or_else(|| config.question_bank.clone()) {
        Some(path) => {
            tracing::debug!("using question bank {}", path.display());
            parser::parse_question_bank(&path)
        }
        None => parser::builtin_bank(),
    }
}

/// Where to save the report: `--output` if given, the configured output
/// directory with `--save`, otherwise nowhere.
pub fn report_dir(
    flag: Option<PathBuf>,
    save: bool,
    config: &PromptfitConfig,
) -> Option<PathBuf> {
    flag.or_else(|| save.then(|| config.output_dir.clone()))
}

/// Score an answer set, print the result and optionally save the report.
pub fn score_and_render(
    bank: &QuestionBank,
    answers: AnswerSet,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let scores = ScoringEngine::new(bank).evaluate(&answers)?;
    let report = AssessmentReport::new(bank, answers, scores);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Markdown => println!("{}", report.to_markdown()),
        OutputFormat::Text => render::print_report(&report),
    }

    if let Some(dir) = output {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
        let short_id: String = report.id.to_string().chars().take(8).collect();
        let path = dir.join(format!("report-{timestamp}-{short_id}.json"));
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}
