//! Plain-text rendering of assessment results.

use comfy_table::{Cell, Table};

use promptfit_core::advice::{advice_for, career_matches, category_details, RESOURCES};
use promptfit_core::model::Category;
use promptfit_core::report::AssessmentReport;

const BAR_WIDTH: usize = 20;

/// A fixed-width bar for a 0-100 score.
pub fn score_bar(score: u8) -> String {
    let filled = (usize::from(score.min(100)) * BAR_WIDTH + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn print_report(report: &AssessmentReport) {
    let scores = &report.scores;
    let advice = advice_for(scores.recommendation);

    println!("{}", report.bank.name);
    println!();
    println!(
        "Recommendation: {}  (overall {}/100)",
        scores.recommendation, scores.overall
    );
    println!("{}", advice.headline);
    println!();

    let mut table = Table::new();
    table.set_header(vec!["Dimension", "Score", "", "What it measures"]);
    for category in Category::ALL {
        let (title, description) = category_details(category);
        let score = scores.category(category);
        table.add_row(vec![
            Cell::new(title),
            Cell::new(format!("{score}/100")),
            Cell::new(score_bar(score)),
            Cell::new(description),
        ]);
    }
    println!("{table}");

    println!("\nNext steps:");
    for step in advice.next_steps {
        println!("  - {step}");
    }

    let mut careers = Table::new();
    careers.set_header(vec!["Career path", "Match"]);
    for career in career_matches(scores) {
        careers.add_row(vec![
            Cell::new(career.title),
            Cell::new(format!("{} Match", career.level)),
        ]);
    }
    println!("\n{careers}");

    println!("\nRecommended resources:");
    for resource in RESOURCES {
        println!("  - {}: {}", resource.title, resource.summary);
    }
}
