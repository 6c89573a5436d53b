use nistbits_tests::{
    ExcursionReport, TestResult, calculate_quality_score, excursion_report, linear_complexity,
    linear_complexity_test,
};
use serde::Serialize;

use super::InputArgs;
use super::complexity::render_test;

#[derive(Serialize)]
struct AllOutput {
    n: usize,
    linear_complexity: usize,
    block_test: TestResult,
    excursions: ExcursionReport,
    quality_score: f64,
}

pub fn run(input: &InputArgs, block_size: usize, json: bool) {
    let bits = super::load_bits(input);
    let excursions = match excursion_report(&bits) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let block_test = linear_complexity_test(&bits, block_size);

    let mut graded = vec![block_test.clone()];
    graded.extend(excursions.test_results());
    let output = AllOutput {
        n: bits.len(),
        linear_complexity: linear_complexity(&bits),
        block_test,
        quality_score: calculate_quality_score(&graded),
        excursions,
    };

    if json {
        super::print_json(&output);
        return;
    }

    println!(
        "🔬 {} bits, linear complexity L = {}\n",
        output.n, output.linear_complexity
    );
    for t in &graded {
        println!("  {}", render_test(t));
    }
    let passed = graded.iter().filter(|t| t.passed).count();
    println!(
        "\n  → {:.0}/100 ({}/{} passed)",
        output.quality_score,
        passed,
        graded.len()
    );
}
