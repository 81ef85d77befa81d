//! The `promptfit take` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use promptfit_core::answers::AnswerSet;
use promptfit_core::config::load_config_from;
use promptfit_core::model::QuestionBank;
use promptfit_core::session::{AssessmentSession, SessionStep};

use super::{output_format, report_dir, resolve_bank, score_and_render};

pub fn execute(
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

    // The questionnaire goes to stderr so stdout carries only the report.
    let stdin = io::stdin();
    let stderr = io::stderr();
    let answers = collect_answers(&bank, stdin.lock(), stderr.lock())?;

    match answers {
        Some(answers) => score_and_render(&bank, answers, format, output.as_deref()),
        None => {
            eprintln!("Assessment abandoned.");
            Ok(())
        }
    }
}

/// Ask every question in `bank`, reading choices line by line.
///
/// Returns `None` if the user quits or input ends before the last answer.
pub fn collect_answers<R: BufRead, W: Write>(
    bank: &QuestionBank,
    mut input: R,
    mut out: W,
) -> Result<Option<AnswerSet>> {
    if bank.is_empty() {
        anyhow::bail!("question bank '{}' has no questions", bank.id);
    }

    let mut session = AssessmentSession::new(bank);
    let total = bank.len();

    writeln!(out, "{}", bank.name)?;
    writeln!(out, "Enter an option number, 'b' to go back or 'q' to quit.")?;

    loop {
        let Some(question) = session.current_question() else {
            break;
        };

        writeln!(out)?;
        writeln!(
            out,
            "[{}/{}] {} ({:.0}% complete)",
            session.index() + 1,
            total,
            question.category.to_string().to_uppercase(),
            session.progress_percent()
        )?;
        writeln!(out, "{}", question.prompt)?;
        for (i, option) in question.options.iter().enumerate() {
            let marker = if session.selected() == Some(option.as_str()) {
                "*"
            } else {
                " "
            };
            writeln!(out, " {marker} {}. {option}", i + 1)?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let choice = line.trim();

        match choice.to_lowercase().as_str() {
            "q" | "quit" => return Ok(None),
            "b" | "back" => {
                if !session.back() {
                    writeln!(out, "Already at the first question.")?;
                }
                continue;
            }
            // Keep the restored selection.
            "" if session.selected().is_some() => {}
            _ => {
                let option = choice
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| question.options.get(i));
                match option {
                    Some(option) => session.select(option)?,
                    None => {
                        writeln!(
                            out,
                            "Please enter a number between 1 and {}.",
                            question.options.len()
                        )?;
                        continue;
                    }
                }
            }
        }

        if session.advance() == SessionStep::Complete {
            break;
        }
    }

    Ok(Some(session.finish()?))
}
