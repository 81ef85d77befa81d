//! The `promptfit compare` command.

use std::path::PathBuf;

use anyhow::Result;

use promptfit_core::config::load_config_from;
use promptfit_core::report::{AssessmentReport, Trend};

use super::{output_format, OutputFormat};

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    threshold: Option<u8>,
    fail_on_decline: bool,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = output_format(format, &config)?;
    let threshold = threshold.unwrap_or(config.progress_threshold);

    let baseline = AssessmentReport::load_json(&baseline_path)?;
    let current = AssessmentReport::load_json(&current_path)?;

    let report = current.compare(&baseline, threshold);

    match format {
        OutputFormat::Markdown => {
            println!("{}", report.to_markdown());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if let Some(overall) = report.deltas.first() {
                println!(
                    "Comparison: overall {} -> {} ({:+}), recommendation {} -> {}",
                    overall.baseline,
                    overall.current,
                    overall.delta,
                    report.baseline_recommendation,
                    report.current_recommendation
                );
            }

            for d in report.deltas.iter().skip(1) {
                let marker = match d.trend {
                    Trend::Improved => "+",
                    Trend::Declined => "-",
                    Trend::Unchanged => " ",
                };
                println!(
                    "  {marker} {:<13} {:>3} -> {:>3} ({:+})",
                    d.dimension, d.baseline, d.current, d.delta
                );
            }

            if report.tier_changed() {
                println!("\nRecommendation tier changed.");
            }
        }
    }

    if fail_on_decline && report.has_declines() {
        std::process::exit(1);
    }

    Ok(())
}
