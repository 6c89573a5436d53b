//! Linear complexity and random excursions variant scoring for binary sequences.
//!
//! Two independent computations from the NIST SP 800-22 battery:
//!
//! - [`linear_complexity`]: Berlekamp-Massey over GF(2), returning the length
//!   of the shortest LFSR that generates the sequence, plus the block-wise
//!   [`linear_complexity_test`] built on top of it.
//! - [`random_excursions_variant`]: visit counts of a ±1 cumulative-sum walk
//!   for the eighteen states -9..=-1 and 1..=9, each scored with a two-sided
//!   `erfc` p-value.
//!
//! Input is a [`BitSequence`], validated once when it is built. Results are
//! plain structured records; formatting them is up to the caller.
//!
//! ```
//! use nistbits_tests::{BitSequence, linear_complexity, random_excursions_variant};
//!
//! let bits: BitSequence = "1100100001".parse().unwrap();
//! assert_eq!(linear_complexity(&bits), 5);
//!
//! let records = random_excursions_variant(&bits).unwrap();
//! assert_eq!(records.len(), 18);
//! assert!(records.iter().all(|r| (0.0..=1.0).contains(&r.p_value)));
//! ```

pub mod bits;
pub mod error;
pub mod excursions;
pub mod linear_complexity;
pub mod result;

pub use bits::{BitSequence, Progress};
pub use error::{InvalidInput, Result};
pub use excursions::{
    CumulativeSum, ExcursionRecord, ExcursionReport, MAX_STATE, StateFrequencyTable,
    excursion_report, random_excursions_variant,
};
pub use linear_complexity::{
    DEFAULT_BLOCK_SIZE, MIN_BLOCKS, linear_complexity, linear_complexity_test,
};
pub use result::{TestResult, calculate_quality_score};

/// A state or test passes when its p-value is at least this.
pub const SIGNIFICANCE_LEVEL: f64 = 0.01;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
pub(crate) mod test_support {
    /// Generate pseudo-random data for testing (simple LCG).
    pub fn pseudo_random(n: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(n);
        let mut state: u64 = 0xDEAD_BEEF_CAFE_BABE;
        for _ in 0..n {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            data.push((state >> 33) as u8);
        }
        data
    }
}
