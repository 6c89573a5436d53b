use nistbits_tests::{ExcursionRecord, ExcursionReport, excursion_report};

use super::InputArgs;

pub fn run(input: &InputArgs, view: &str, json: bool) {
    let bits = super::load_bits(input);
    let report = match excursion_report(&bits) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if json {
        super::print_json(&report);
        return;
    }
    match view {
        "table" => println!("{}", render_table(&report)),
        _ => {
            for rec in &report.records {
                println!("{}", render_message(rec));
            }
        }
    }
}

/// One framed block per state, the classic pass/fail message.
pub fn render_message(rec: &ExcursionRecord) -> String {
    let verdict = if rec.passed { "Success" } else { "Unsuccess" };
    format!(
        "------------\nRandom Excursions Variant Test {}\n{} P-value = {}\n------------",
        rec.state, verdict, rec.p_value
    )
}

pub fn render_table(report: &ExcursionReport) -> String {
    let passed = report.records.iter().filter(|r| r.passed).count();
    let mut text = format!(
        "Random Excursions Variant: n={}, J={}, {}/{} states passed\n",
        report.n,
        report.j,
        passed,
        report.records.len()
    );
    text.push_str(&format!(
        "{:>6} {:>8} {:>10} {:>6}\n",
        "State", "Visits", "P-value", "Pass"
    ));
    text.push_str(&"-".repeat(33));
    for rec in &report.records {
        let ok = if rec.passed { "✓" } else { "✗" };
        text.push_str(&format!(
            "\n{:>+6} {:>8} {:>10.6} {:>6}",
            rec.state, rec.visits, rec.p_value, ok
        ));
    }
    text
}
