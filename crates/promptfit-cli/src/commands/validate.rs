//! The `promptfit validate` command.
//!
//! Warnings are listed under the positional category group their question
//! is scored in. Bank-wide warnings and questions past the last group are
//! listed after the groups.

use std::path::PathBuf;

use anyhow::Result;

use promptfit_core::model::{QuestionBank, GROUP_SIZE};
use promptfit_core::parser::{self, ValidationWarning};

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let banks = if bank_path.is_dir() {
        parser::load_bank_directory(&bank_path)?
    } else {
        vec![parser::parse_question_bank(&bank_path)?]
    };

    let mut total_warnings = 0;

    for bank in &banks {
        let warnings = parser::validate_question_bank(bank);
        print!("{}", describe_bank(bank, &warnings));
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All question banks valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

/// Index of the scoring group a warning's question falls in.
fn group_index(bank: &QuestionBank, warning: &ValidationWarning) -> Option<usize> {
    let position = bank.position(warning.question_id.as_deref()?)?;
    let group = position / GROUP_SIZE;
    (group < bank.category_groups().len()).then_some(group)
}

fn describe_bank(bank: &QuestionBank, warnings: &[ValidationWarning]) -> String {
    let mut out = format!("Question bank: {} ({} questions)\n", bank.name, bank.len());

    for (index, group) in bank.category_groups().iter().enumerate() {
        let ids: Vec<&str> = group.questions.iter().map(|q| q.id.as_str()).collect();
        if ids.is_empty() {
            out.push_str(&format!("  {}: no questions\n", group.category));
        } else {
            out.push_str(&format!(
                "  {}: questions {}\n",
                group.category,
                ids.join(", ")
            ));
        }
        for w in warnings
            .iter()
            .filter(|w| group_index(bank, w) == Some(index))
        {
            let id = w.question_id.as_deref().unwrap_or_default();
            out.push_str(&format!("    [{id}] WARNING: {}\n", w.message));
        }
    }

    for w in warnings.iter().filter(|w| group_index(bank, w).is_none()) {
        match &w.question_id {
            Some(id) => out.push_str(&format!("  [{id}] WARNING: {}\n", w.message)),
            None => out.push_str(&format!("  WARNING: {}\n", w.message)),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptfit_core::parser::builtin_bank;

    fn warning(question_id: Option<&str>, message: &str) -> ValidationWarning {
        ValidationWarning {
            question_id: question_id.map(str::to_string),
            message: message.into(),
        }
    }

    #[test]
    fn clean_bank_lists_groups() {
        let bank = builtin_bank().unwrap();
        let out = describe_bank(&bank, &[]);
        assert!(out.contains("(6 questions)"));
        assert!(out.contains("  psychometric: questions 1, 2\n"));
        assert!(out.contains("  technical: questions 3, 4\n"));
        assert!(out.contains("  aptitude: questions 5, 6\n"));
        assert!(!out.contains("WARNING"));
    }

    #[test]
    fn warnings_land_under_their_scoring_group() {
        let bank = builtin_bank().unwrap();
        let warnings = [
            warning(Some("4"), "empty prompt"),
            warning(None, "bank has 7 questions"),
        ];
        let out = describe_bank(&bank, &warnings);

        let technical = out.find("technical:").unwrap();
        let aptitude = out.find("aptitude:").unwrap();
        let question = out.find("[4] WARNING: empty prompt").unwrap();
        assert!(technical < question && question < aptitude);
        assert!(out.ends_with("  WARNING: bank has 7 questions\n"));
    }

    #[test]
    fn short_bank_shows_empty_groups() {
        let mut bank = builtin_bank().unwrap();
        bank.questions.truncate(3);
        let out = describe_bank(&bank, &[]);
        assert!(out.contains("  technical: questions 3\n"));
        assert!(out.contains("  aptitude: no questions\n"));
    }

    #[test]
    fn unscored_question_warning_is_listed_after_groups() {
        let mut bank = builtin_bank().unwrap();
        let mut extra = bank.questions[5].clone();
        extra.id = "7".into();
        bank.questions.push(extra);

        let w = warning(Some("7"), "not scored");
        assert_eq!(group_index(&bank, &w), None);
        let out = describe_bank(&bank, &[w]);
        assert!(out.ends_with("  [7] WARNING: not scored\n"));
    }
}
