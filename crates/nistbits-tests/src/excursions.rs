//! Random excursions variant test.
//!
//! The bits are turned into a ±1 random walk; for each of the eighteen states
//! -9..=-1 and 1..=9 the number of visits is compared with the number of
//! returns to the origin, giving one p-value per state.

use log::debug;
use serde::Serialize;
use statrs::function::erf::erfc;

use crate::bits::BitSequence;
use crate::error::{InvalidInput, Result};
use crate::result::TestResult;

/// Largest |state| that is scored.
pub const MAX_STATE: i64 = 9;

const TABLE_SIZE: usize = (2 * MAX_STATE + 1) as usize;

/// Running prefix sums of the ±1 walk, one entry per input bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeSum {
    sums: Vec<i64>,
}

impl CumulativeSum {
    pub fn from_bits(bits: &BitSequence) -> Self {
        let mut sums = Vec::with_capacity(bits.len());
        let mut s: i64 = 0;
        for bit in bits.iter() {
            s += if bit == 1 { 1 } else { -1 };
            sums.push(s);
        }
        Self { sums }
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.sums
    }

    pub fn len(&self) -> usize {
        self.sums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    /// Largest distance from the origin reached by the walk.
    pub fn max_excursion(&self) -> u64 {
        self.sums.iter().map(|s| s.unsigned_abs()).max().unwrap_or(0)
    }
}

/// Visit counts for states -9..=9, indexed by `state + 9`. Positions farther
/// from the origin are only tallied in `outside`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateFrequencyTable {
    counts: [u64; TABLE_SIZE],
    outside: u64,
}

impl StateFrequencyTable {
    pub fn from_walk(walk: &CumulativeSum) -> Self {
        let mut counts = [0u64; TABLE_SIZE];
        let mut outside = 0u64;
        for &s in walk.as_slice() {
            if s.abs() <= MAX_STATE {
                counts[(s + MAX_STATE) as usize] += 1;
            } else {
                outside += 1;
            }
        }
        Self { counts, outside }
    }

    /// Visits to `state`; 0 for states never visited or beyond ±9.
    pub fn count(&self, state: i64) -> u64 {
        if state.abs() > MAX_STATE {
            return 0;
        }
        self.counts[(state + MAX_STATE) as usize]
    }

    /// Positions whose state lies beyond ±9.
    pub fn outside(&self) -> u64 {
        self.outside
    }

    /// Every position of the walk, counted once.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum::<u64>() + self.outside
    }
}

/// Outcome for one state of the walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExcursionRecord {
    pub state: i8,
    pub visits: u64,
    pub p_value: f64,
    pub passed: bool,
}

/// Everything computed for one sequence: `j` is the number of zero visits
/// plus one, and `records` holds the eighteen states in ascending order.
#[derive(Debug, Clone, Serialize)]
pub struct ExcursionReport {
    pub n: usize,
    pub j: u64,
    pub table: StateFrequencyTable,
    pub records: Vec<ExcursionRecord>,
}

impl ExcursionReport {
    pub fn all_passed(&self) -> bool {
        self.records.iter().all(|r| r.passed)
    }

    /// One graded [`TestResult`] per state.
    pub fn test_results(&self) -> Vec<TestResult> {
        self.records
            .iter()
            .map(|r| {
                TestResult::from_p(
                    format!("Random Excursions Variant (x={:+})", r.state),
                    r.p_value,
                    r.visits as f64,
                    format!("visits={}, J={}, n={}", r.visits, self.j, self.n),
                )
            })
            .collect()
    }
}

/// Validate raw 0/1 symbols and score all eighteen states.
pub fn score(symbols: &[u8]) -> Result<Vec<ExcursionRecord>> {
    let bits = BitSequence::from_bits(symbols)?;
    random_excursions_variant(&bits)
}

/// Score all eighteen states of `bits`, -9 first.
pub fn random_excursions_variant(bits: &BitSequence) -> Result<Vec<ExcursionRecord>> {
    Ok(excursion_report(bits)?.records)
}

/// Full excursion breakdown of `bits`. Fails on an empty sequence.
pub fn excursion_report(bits: &BitSequence) -> Result<ExcursionReport> {
    if bits.is_empty() {
        return Err(InvalidInput::Empty);
    }
    let walk = CumulativeSum::from_bits(bits);
    let table = StateFrequencyTable::from_walk(&walk);
    let j = table.count(0) + 1;
    let j_f = j as f64;

    let records: Vec<ExcursionRecord> = (-MAX_STATE..=MAX_STATE)
        .filter(|&x| x != 0)
        .map(|x| {
            let visits = table.count(x);
            let denom = (2.0 * j_f * (4.0 * x.abs() as f64 - 2.0)).sqrt();
            let p_value = erfc((visits as f64 - j_f).abs() / denom);
            ExcursionRecord {
                state: x as i8,
                visits,
                p_value,
                passed: TestResult::pass_from_p(Some(p_value), crate::SIGNIFICANCE_LEVEL),
            }
        })
        .collect();

    debug!(
        "random excursions variant: n={}, J={j}, max|S|={}, outside={}",
        bits.len(),
        walk.max_excursion(),
        table.outside()
    );
    Ok(ExcursionReport {
        n: bits.len(),
        j,
        table,
        records,
    })
}
