use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use promptfit_core::parser::{
    builtin_bank, parse_answer_set_str, parse_question_bank_str, validate_question_bank,
    BUILTIN_BANK_TOML,
};

fn bench_parse_bank(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_bank");

    group.bench_function("builtin", |b| {
        b.iter(|| parse_question_bank_str(black_box(BUILTIN_BANK_TOML), Path::new("bench.toml")))
    });

    let large = {
        let mut s = String::from("[bank]\nid = \"large\"\nname = \"Large\"\n");
        for i in 0..200 {
            s.push_str(&format!(
                "\n[[questions]]\nid = \"q{i}\"\ncategory = \"aptitude\"\nkind = \"scale\"\n\
                 prompt = \"Question {i}\"\noptions = [\"Never\", \"Rarely\", \"Sometimes\", \"Often\", \"Always\"]\n"
            ));
        }
        s
    };

    group.bench_function("large", |b| {
        b.iter(|| parse_question_bank_str(black_box(&large), Path::new("bench.toml")))
    });

    group.finish();
}

fn bench_validate_bank(c: &mut Criterion) {
    let bank = builtin_bank().unwrap();
    c.bench_function("validate_builtin", |b| {
        b.iter(|| validate_question_bank(black_box(&bank)))
    });
}

fn bench_parse_answers(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_answers");

    let json = r#"{"1": "Agree", "2": "Neutral", "3": "Writing code for AI models",
        "4": "The training data size", "5": "Often", "6": "Strongly Agree"}"#;
    let toml = "1 = \"Agree\"\n2 = \"Neutral\"\n3 = \"Writing code for AI models\"\n\
                4 = \"The training data size\"\n5 = \"Often\"\n6 = \"Strongly Agree\"\n";

    group.bench_function("json", |b| {
        b.iter(|| parse_answer_set_str(black_box(json), Path::new("a.json")))
    });

    group.bench_function("toml", |b| {
        b.iter(|| parse_answer_set_str(black_box(toml), Path::new("a.toml")))
    });

    group.finish();
}

criterion_group!(benches, bench_parse_bank, bench_validate_bank, bench_parse_answers);
criterion_main!(benches);
