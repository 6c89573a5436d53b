//! Integration tests for nistbits-tests.
//!
//! These run both scorers through the public API the way a caller would:
//! text or raw symbols → validated sequence → structured results.

use nistbits_tests::excursions::score;
use nistbits_tests::linear_complexity::solve;
use nistbits_tests::{
    BitSequence, CumulativeSum, InvalidInput, StateFrequencyTable, calculate_quality_score,
    excursion_report, linear_complexity, random_excursions_variant,
};

/// xorshift64 bits, independent of the unit-test LCG.
fn xorshift_bits(n: usize, seed: u64) -> Vec<u8> {
    let mut x = seed;
    (0..n)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            (x >> 63) as u8
        })
        .collect()
}

#[test]
fn end_to_end_example() {
    let bits: BitSequence = "1100100001".parse().unwrap();
    assert_eq!(linear_complexity(&bits), 5);

    let report = excursion_report(&bits).unwrap();
    let walk = CumulativeSum::from_bits(&bits);
    let zeros = walk.as_slice().iter().filter(|&&s| s == 0).count() as u64;
    assert_eq!(report.j, zeros + 1);
    assert_eq!(report.records.len(), 18);
    for rec in &report.records {
        assert!(rec.p_value >= 0.0 && rec.p_value <= 1.0);
    }
}

#[test]
fn non_binary_rejected_by_both() {
    assert!(matches!(
        "1021".parse::<BitSequence>(),
        Err(InvalidInput::NonBinary { position: 2, .. })
    ));
    assert!(solve(&[1, 0, 2, 1]).is_err());
    assert!(score(&[1, 0, 2, 1]).is_err());
}

#[test]
fn empty_rejected_by_scorer_only() {
    assert_eq!(solve(&[]).unwrap(), 0);
    assert_eq!(score(&[]).unwrap_err(), InvalidInput::Empty);
}

#[test]
fn complexity_within_bounds() {
    for seed in 1..20u64 {
        for n in [1, 7, 64, 129] {
            let bits = xorshift_bits(n, seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
            let l = solve(&bits).unwrap();
            assert!(l <= n, "seed={seed} n={n} L={l}");
        }
    }
}

#[test]
fn complexity_never_decreases_along_prefixes() {
    let bits = xorshift_bits(200, 0x1234_5678_9ABC_DEF1);
    let mut last = 0;
    for len in 0..=bits.len() {
        let l = solve(&bits[..len]).unwrap();
        assert!(l >= last, "L dropped from {last} to {l} at len={len}");
        last = l;
    }
}

#[test]
fn frequency_table_sums_to_length() {
    for seed in 1..10u64 {
        let bits = BitSequence::from_bits(&xorshift_bits(5000, seed)).unwrap();
        let table = StateFrequencyTable::from_walk(&CumulativeSum::from_bits(&bits));
        assert_eq!(table.total(), 5000);
    }
}

#[test]
fn records_cover_all_states_once() {
    let bits = BitSequence::from_bits(&xorshift_bits(4096, 42)).unwrap();
    let records = random_excursions_variant(&bits).unwrap();
    let states: Vec<i8> = records.iter().map(|r| r.state).collect();
    let mut sorted = states.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(states, sorted);
    assert_eq!(states.len(), 18);
    assert!(!states.contains(&0));
    assert_eq!(states.first(), Some(&-9));
    assert_eq!(states.last(), Some(&9));
}

#[test]
fn results_are_repeatable() {
    let raw = xorshift_bits(3000, 7);
    assert_eq!(solve(&raw).unwrap(), solve(&raw).unwrap());
    assert_eq!(score(&raw).unwrap(), score(&raw).unwrap());
}

#[test]
fn report_serializes_to_json() {
    let bits: BitSequence = "1100100001".parse().unwrap();
    let report = excursion_report(&bits).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["j"], 3);
    assert_eq!(json["records"].as_array().unwrap().len(), 18);
    assert_eq!(json["records"][0]["state"], -9);
}

#[test]
fn graded_results_score() {
    let bits: BitSequence = "1100100001".parse().unwrap();
    let results = excursion_report(&bits).unwrap().test_results();
    let score = calculate_quality_score(&results);
    assert!(score > 0.0 && score <= 100.0);
}
