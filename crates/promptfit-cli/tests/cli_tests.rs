//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BUILTIN_BANK: &str = "../promptfit-core/banks/prompt-engineer.toml";

const TOP_ANSWERS: &str = r#"
"1" = "Strongly Agree"
"2" = "Strongly Agree"
"3" = "Crafting inputs to get better AI outputs"
"4" = "A parameter controlling randomness in outputs"
"5" = "Always"
"6" = "Strongly Agree"
"#;

const LOW_ANSWERS: &str = r#"
"1" = "Strongly Disagree"
"2" = "Strongly Disagree"
"3" = "Writing code for AI models"
"4" = "The training data size"
"5" = "Never"
"6" = "Strongly Disagree"
"#;

fn promptfit() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("promptfit").unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn validate_builtin_bank() {
    promptfit()
        .arg("validate")
        .arg("--bank")
        .arg(BUILTIN_BANK)
        .assert()
        .success()
        .stdout(predicate::str::contains("6 questions"))
        .stdout(predicate::str::contains("technical: questions 3, 4"))
        .stdout(predicate::str::contains("All question banks valid"));
}

#[test]
fn validate_directory() {
    promptfit()
        .arg("validate")
        .arg("--bank")
        .arg("../promptfit-core/banks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Should I Become a Prompt Engineer?"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let bank = write(
        dir.path(),
        "short.toml",
        r#"
[bank]
id = "short"
name = "Short"

[[questions]]
id = "1"
category = "technical"
prompt = "Only one?"
options = ["Yes", "No"]
"#,
    );

    promptfit()
        .arg("validate")
        .arg("--bank")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    promptfit()
        .arg("validate")
        .arg("--bank")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn score_text_output() {
    let dir = TempDir::new().unwrap();
    let answers = write(dir.path(), "top.toml", TOP_ANSWERS);

    promptfit()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommendation: Yes"))
        .stdout(predicate::str::contains("Technical Knowledge"))
        .stdout(predicate::str::contains("Prompt Engineer"));
}

#[test]
fn score_json_output() {
    let dir = TempDir::new().unwrap();
    let answers = write(dir.path(), "low.toml", LOW_ANSWERS);

    let output = promptfit()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["scores"]["psychometric"], 20);
    assert_eq!(report["scores"]["technical"], 40);
    assert_eq!(report["scores"]["aptitude"], 20);
    assert_eq!(report["scores"]["overall"], 27);
    assert_eq!(report["scores"]["recommendation"], "Not Now");
    assert_eq!(report["bank"]["question_count"], 6);
}

#[test]
fn score_json_answer_file_as_markdown() {
    let dir = TempDir::new().unwrap();
    let answers = write(
        dir.path(),
        "mixed.json",
        r#"{
            "1": "Agree",
            "2": "Neutral",
            "3": "Crafting inputs to get better AI outputs",
            "4": "The model's accuracy score",
            "5": "Often",
            "6": "Agree"
        }"#,
    );

    promptfit()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .arg("--format")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("**Recommendation:** Maybe (73/100)"))
        .stdout(predicate::str::contains("| Technical Knowledge | 70/100 |"));
}

#[test]
fn score_saves_report() {
    let dir = TempDir::new().unwrap();
    let answers = write(dir.path(), "top.toml", TOP_ANSWERS);
    let out_dir = dir.path().join("results");

    promptfit()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .arg("--output")
        .arg(&out_dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let saved: Vec<_> = std::fs::read_dir(&out_dir).unwrap().collect();
    assert_eq!(saved.len(), 1);
}

#[test]
fn score_incomplete_answers_fails() {
    let dir = TempDir::new().unwrap();
    let answers = write(
        dir.path(),
        "partial.toml",
        r#"
"1" = "Agree"
"2" = "Agree"
"3" = "Crafting inputs to get better AI outputs"
"5" = "Often"
"6" = "Agree"
"#,
    );

    promptfit()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .failure()
        .stderr(predicate::str::contains("incomplete technical answers"));
}

#[test]
fn score_unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    let answers = write(dir.path(), "top.toml", TOP_ANSWERS);

    promptfit()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .arg("--format")
        .arg("html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn take_reads_answers_from_stdin() {
    promptfit()
        .arg("take")
        .write_stdin("5\n5\n2\n2\n5\n5\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[1/6] PSYCHOMETRIC"))
        .stdout(predicate::str::contains("Recommendation: Yes"))
        .stdout(predicate::str::contains("PSYCHOMETRIC").not());
}

#[test]
fn take_json_output_is_parseable() {
    let output = promptfit()
        .arg("take")
        .arg("--format")
        .arg("json")
        .write_stdin("5\n5\n2\n2\n5\n5\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["scores"]["overall"], 100);
    assert_eq!(report["scores"]["recommendation"], "Yes");
    assert_eq!(report["answers"]["3"], "Crafting inputs to get better AI outputs");
}

#[test]
fn take_quit_abandons() {
    promptfit()
        .arg("take")
        .write_stdin("1\nq\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Assessment abandoned."));
}

#[test]
fn take_empty_bank_fails() {
    let dir = TempDir::new().unwrap();
    let bank = write(
        dir.path(),
        "empty.toml",
        "[bank]\nid = \"empty\"\nname = \"Empty\"\n",
    );

    promptfit()
        .arg("take")
        .arg("--bank")
        .arg(&bank)
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("question bank 'empty' has no questions"));
}

#[test]
fn batch_scores_directory() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.toml", TOP_ANSWERS);
    write(dir.path(), "b.toml", LOW_ANSWERS);
    write(dir.path(), "broken.toml", "\"1\" = ");

    promptfit()
        .arg("batch")
        .arg("--answers")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scored 2 assessment(s)"))
        .stdout(predicate::str::contains("Yes: 1 (50%)"))
        .stdout(predicate::str::contains("Not Now: 1 (50%)"))
        .stdout(predicate::str::contains("1 file(s) could not be scored."));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    promptfit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created promptfit.toml"))
        .stdout(predicate::str::contains("Created question-banks/example.toml"))
        .stdout(predicate::str::contains("Created answers/example.toml"));

    assert!(dir.path().join("promptfit.toml").exists());
    assert!(dir.path().join("question-banks/example.toml").exists());

    // The starter files work together.
    promptfit()
        .current_dir(dir.path())
        .arg("score")
        .arg("--answers")
        .arg("answers/example.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommendation: Yes"));
}

#[test]
fn save_uses_configured_output_dir() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "promptfit.toml", "output_dir = \"saved\"\n");
    write(dir.path(), "top.toml", TOP_ANSWERS);

    promptfit()
        .current_dir(dir.path())
        .arg("score")
        .arg("--answers")
        .arg("top.toml")
        .arg("--save")
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    assert_eq!(std::fs::read_dir(dir.path().join("saved")).unwrap().count(), 1);
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    promptfit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    promptfit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn compare_reports() {
    let dir = TempDir::new().unwrap();
    let baseline = write(dir.path(), "baseline.json", &make_test_report(20, 40, 20));
    let current = write(dir.path(), "current.json", &make_test_report(100, 40, 100));

    promptfit()
        .arg("compare")
        .arg("--baseline")
        .arg(&baseline)
        .arg("--current")
        .arg(&current)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Comparison: overall 27 -> 80 (+53), recommendation Not Now -> Yes",
        ))
        .stdout(predicate::str::contains("Recommendation tier changed."));
}

#[test]
fn compare_fail_on_decline() {
    let dir = TempDir::new().unwrap();
    let baseline = write(dir.path(), "baseline.json", &make_test_report(100, 100, 100));
    let current = write(dir.path(), "current.json", &make_test_report(100, 70, 100));

    promptfit()
        .arg("compare")
        .arg("--baseline")
        .arg(&baseline)
        .arg("--current")
        .arg(&current)
        .arg("--fail-on-decline")
        .assert()
        .failure();
}

#[test]
fn compare_unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    let baseline = write(dir.path(), "baseline.json", &make_test_report(20, 40, 20));
    let current = write(dir.path(), "current.json", &make_test_report(100, 40, 100));

    promptfit()
        .arg("compare")
        .arg("--baseline")
        .arg(&baseline)
        .arg("--current")
        .arg(&current)
        .arg("--format")
        .arg("html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format: html"));
}

#[test]
fn compare_rejects_tampered_report() {
    let dir = TempDir::new().unwrap();
    let baseline = write(dir.path(), "baseline.json", &make_test_report(20, 40, 20));
    let tampered = make_test_report(100, 40, 100).replace("\"overall\": 80", "\"overall\": 95");
    let current = write(dir.path(), "current.json", &tampered);

    promptfit()
        .arg("compare")
        .arg("--baseline")
        .arg(&baseline)
        .arg("--current")
        .arg(&current)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match category scores"));
}

#[test]
fn compare_nonexistent_report() {
    promptfit()
        .arg("compare")
        .arg("--baseline")
        .arg("no_such_file.json")
        .arg("--current")
        .arg("also_no_file.json")
        .assert()
        .failure();
}

#[test]
fn help_output() {
    promptfit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Career-fit assessment"));
}

#[test]
fn version_output() {
    promptfit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("promptfit"));
}

/// A minimal saved report with the given category scores.
fn make_test_report(psychometric: u8, technical: u8, aptitude: u8) -> String {
    let sum = u32::from(psychometric) + u32::from(technical) + u32::from(aptitude);
    let overall = (2 * sum + 3) / 6;
    let recommendation = match overall {
        80.. => "Yes",
        60..=79 => "Maybe",
        _ => "Not Now",
    };

    format!(
        r#"{{
    "id": "00000000-0000-0000-0000-000000000000",
    "created_at": "2025-01-01T00:00:00Z",
    "bank": {{
        "id": "prompt-engineer",
        "name": "Should I Become a Prompt Engineer?",
        "question_count": 6
    }},
    "answers": {{}},
    "scores": {{
        "psychometric": {psychometric},
        "technical": {technical},
        "aptitude": {aptitude},
        "overall": {overall},
        "recommendation": "{recommendation}"
    }}
}}"#
    )
}
