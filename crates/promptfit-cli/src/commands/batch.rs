//! The `promptfit batch` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use promptfit_core::config::load_config_from;
use promptfit_core::parser;
use promptfit_core::scoring::{Recommendation, ScoringEngine};
use promptfit_core::statistics;

use super::resolve_bank;

pub fn execute(
    answers_dir: PathBuf,
    bank: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = resolve_bank(bank, &config)?;
    let engine = ScoringEngine::new(&bank);

    let entries = parser::load_answer_directory(&answers_dir)?;
    if entries.is_empty() {
        println!("No answer files found in {}", answers_dir.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "File",
        "Psychometric",
        "Technical",
        "Aptitude",
        "Overall",
        "Recommendation",
    ]);

    let mut scored = Vec::new();
    let mut failures = 0usize;

    for (path, answers) in &entries {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let result = answers
            .as_ref()
            .map_err(|e| format!("{e:#}"))
            .and_then(|a| engine.evaluate(a).map_err(|e| e.to_string()));

        match result {
            Ok(scores) => {
                table.add_row(vec![
                    Cell::new(&name),
                    Cell::new(scores.psychometric),
                    Cell::new(scores.technical),
                    Cell::new(scores.aptitude),
                    Cell::new(scores.overall),
                    Cell::new(scores.recommendation),
                ]);
                scored.push(scores);
            }
            Err(message) => {
                tracing::warn!("skipping {}: {message}", path.display());
                failures += 1;
                table.add_row(vec![
                    Cell::new(&name),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new(format!("error: {message}")),
                ]);
            }
        }
    }

    println!("{table}");

    let stats = statistics::summarize(&scored);
    println!("\nScored {} assessment(s)", stats.count);
    if stats.count > 0 {
        println!(
            "Mean scores: psychometric {:.1}, technical {:.1}, aptitude {:.1}, overall {:.1}",
            stats.mean_psychometric, stats.mean_technical, stats.mean_aptitude, stats.mean_overall
        );
        for tier in Recommendation::ALL {
            println!(
                "  {tier}: {} ({:.0}%)",
                stats.tiers[&tier],
                stats.tier_share(tier) * 100.0
            );
        }
    }
    if failures > 0 {
        println!("{failures} file(s) could not be scored.");
    }

    Ok(())
}
