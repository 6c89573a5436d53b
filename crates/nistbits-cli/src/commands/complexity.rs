use nistbits_tests::{TestResult, linear_complexity, linear_complexity_test};
use serde::Serialize;

use super::InputArgs;

#[derive(Serialize)]
pub struct ComplexityOutput {
    pub n: usize,
    pub linear_complexity: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_test: Option<TestResult>,
}

pub fn run(input: &InputArgs, block_size: Option<usize>, json: bool) {
    let bits = super::load_bits(input);
    let output = ComplexityOutput {
        n: bits.len(),
        linear_complexity: linear_complexity(&bits),
        block_test: block_size.map(|m| linear_complexity_test(&bits, m)),
    };

    if json {
        super::print_json(&output);
        return;
    }
    println!("{}", render(&output));
}

pub fn render(output: &ComplexityOutput) -> String {
    let mut text = format!(
        "Linear complexity: L = {} (n = {})",
        output.linear_complexity, output.n
    );
    if let Some(t) = &output.block_test {
        text.push('\n');
        text.push_str(&render_test(t));
    }
    text
}

pub fn render_test(t: &TestResult) -> String {
    let ok = if t.passed { "✓" } else { "✗" };
    let pval = t
        .p_value
        .map(|p| format!("{p:.6}"))
        .unwrap_or_else(|| "—".to_string());
    format!("{} {} [{}] p={} ({})", ok, t.name, t.grade, pval, t.details)
}
