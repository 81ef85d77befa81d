//! The `promptfit score` command.

use std::path::PathBuf;

use anyhow::Result;

use promptfit_core::config::load_config_from;
use promptfit_core::parser;

use super::{output_format, report_dir, resolve_bank, score_and_render};

pub fn execute(
    answers_path: PathBuf,
    bank: Option<PathBuf>,
    format: Option<String>,
    output: Option<PathBuf>,
    save: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = output_format(format, &config)?;
    let bank = resolve_bank(bank, &config)?;
    let output = report_dir(output, save, &config);

    let answers = parser::load_answer_set(&answers_path)?;
    tracing::info!(
        "scoring {} answers from {}",
        answers.len(),
        answers_path.display()
    );

    score_and_render(&bank, answers, format, output.as_deref())
}
