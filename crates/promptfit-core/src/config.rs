//! promptfit configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level promptfit configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptfitConfig {
    /// Question bank to use instead of the built-in one.
    #[serde(default)]
    pub question_bank: Option<PathBuf>,
    /// Output directory for saved reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Output format when none is given: text, json or markdown.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Minimum point change for a retake comparison to count as a change.
    #[serde(default = "default_progress_threshold")]
    pub progress_threshold: u8,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./promptfit-results")
}
fn default_format() -> String {
    "text".to_string()
}
fn default_progress_threshold() -> u8 {
    5
}

impl Default for PromptfitConfig {
    fn default() -> Self {
        Self {
            question_bank: None,
            output_dir: default_output_dir(),
            default_format: default_format(),
            progress_threshold: default_progress_threshold(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `promptfit.toml` in the current directory
/// 2. `~/.config/promptfit/config.toml`
///
/// `PROMPTFIT_BANK` overrides the configured question bank.
pub fn load_config() -> Result<PromptfitConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<PromptfitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("promptfit.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            toml::from_str::<PromptfitConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => PromptfitConfig::default(),
    };

    if let Ok(bank) = std::env::var("PROMPTFIT_BANK") {
        if !bank.is_empty() {
            config.question_bank = Some(PathBuf::from(bank));
        }
    }

    config.question_bank = config.question_bank.as_deref().map(resolve_path);
    config.output_dir = resolve_path(&config.output_dir);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("promptfit"))
}
