//! The `promptfit init` command.

use std::path::Path;

use anyhow::Result;

use promptfit_core::parser::BUILTIN_BANK_TOML;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("promptfit.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("question-banks")?;
    write_if_missing(Path::new("question-banks/example.toml"), BUILTIN_BANK_TOML)?;

    std::fs::create_dir_all("answers")?;
    write_if_missing(Path::new("answers/example.toml"), EXAMPLE_ANSWERS)?;

    println!("\nNext steps:");
    println!("  1. Run: promptfit validate --bank question-banks/example.toml");
    println!("  2. Run: promptfit score --answers answers/example.toml");
    println!("  3. Run: promptfit take");

    Ok(())
}

fn write_if_missing(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, contents)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# promptfit configuration

# question_bank = "question-banks/example.toml"
output_dir = "./promptfit-results"
default_format = "text"
progress_threshold = 5
"#;

const EXAMPLE_ANSWERS: &str = r#"# Answers keyed by question id
"1" = "Agree"
"2" = "Strongly Agree"
"3" = "Crafting inputs to get better AI outputs"
"4" = "The processing speed of the model"
"5" = "Often"
"6" = "Agree"
"#;
