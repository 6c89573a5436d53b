//! Linear complexity of binary sequences (Berlekamp-Massey over GF(2)).

use log::debug;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::bits::BitSequence;
use crate::error::Result;
use crate::result::{TestResult, insufficient};

/// Block length used by [`linear_complexity_test`] when the caller has no preference.
pub const DEFAULT_BLOCK_SIZE: usize = 500;

/// Fewer blocks than this and the chi-squared approximation is meaningless.
pub const MIN_BLOCKS: usize = 6;

/// Class probabilities for the T statistic, SP 800-22 section 3.10.
const CLASS_PROBS: [f64; 7] = [0.010417, 0.03125, 0.125, 0.5, 0.25, 0.0625, 0.020833];

/// Validate raw 0/1 symbols and return their linear complexity.
pub fn solve(symbols: &[u8]) -> Result<usize> {
    let bits = BitSequence::from_bits(symbols)?;
    Ok(linear_complexity(&bits))
}

/// Length of the shortest LFSR reproducing `bits`.
///
/// `c` is the current connection polynomial and `b` the one in force before
/// the last length change at index `m`. On a discrepancy the first `l`
/// coefficients of `b`, shifted right by `i - m`, are added into `c`.
pub fn linear_complexity(bits: &BitSequence) -> usize {
    let seq = bits.as_slice();
    let n = seq.len();
    if n == 0 {
        return 0;
    }
    let mut c = vec![0u8; n];
    let mut b = vec![0u8; n];
    c[0] = 1;
    b[0] = 1;
    let mut l: usize = 0;
    let mut m: isize = -1;

    for i in 0..n {
        // seq[i - 1] pairs with c[1], seq[i - l] with c[l].
        let mut d = seq[i];
        for j in 1..=l {
            d ^= c[j] & seq[i - j];
        }
        if d == 1 {
            let grow = 2 * l <= i;
            let t = if grow { Some(c.clone()) } else { None };
            let shift = (i as isize - m) as usize;
            for j in 0..l {
                if b[j] == 1 {
                    c[j + shift] ^= 1;
                }
            }
            if let Some(t) = t {
                l = i + 1 - l;
                m = i as isize;
                b = t;
            }
        }
    }
    l
}

/// Linear complexity test: Berlekamp-Massey on consecutive `block_size`-bit
/// blocks, chi-squared over the seven classes of the T statistic.
pub fn linear_complexity_test(bits: &BitSequence, block_size: usize) -> TestResult {
    let name = "Linear Complexity";
    let n = bits.len();
    let num_blocks = n.checked_div(block_size).unwrap_or(0);
    if num_blocks < MIN_BLOCKS {
        return insufficient(name, MIN_BLOCKS.saturating_mul(block_size.max(1)), n);
    }

    let complexities: Vec<usize> = bits
        .as_slice()
        .chunks_exact(block_size)
        .map(|block| linear_complexity(&BitSequence::from_validated(block)))
        .collect();

    let m = block_size as f64;
    let sign = if block_size % 2 == 0 { 1.0 } else { -1.0 };
    let mu = m / 2.0 + (9.0 - sign) / 36.0 - (m / 3.0 + 2.0 / 9.0) / 2.0_f64.powf(m);

    let mut observed = [0u64; 7];
    for &c in &complexities {
        let t = sign * (c as f64 - mu) + 2.0 / 9.0;
        let bin = if t <= -2.5 {
            0
        } else if t <= -1.5 {
            1
        } else if t <= -0.5 {
            2
        } else if t <= 0.5 {
            3
        } else if t <= 1.5 {
            4
        } else if t <= 2.5 {
            5
        } else {
            6
        };
        observed[bin] += 1;
    }

    let n_f = num_blocks as f64;
    let chi2: f64 = observed
        .iter()
        .zip(CLASS_PROBS.iter())
        .map(|(&obs, &prob)| {
            let expected = prob * n_f;
            let diff = obs as f64 - expected;
            diff * diff / expected
        })
        .sum();

    let p = match ChiSquared::new(6.0) {
        Ok(dist) => dist.sf(chi2),
        Err(_) => 0.0,
    };
    let mean_c = complexities.iter().sum::<usize>() as f64 / n_f;
    debug!("linear complexity: N={num_blocks}, M={block_size}, chi2={chi2:.4}, p={p:.6}");
    TestResult::from_p(
        name,
        p,
        chi2,
        format!("N={num_blocks}, M={block_size}, mean_complexity={mean_c:.1}, classes={observed:?}"),
    )
}
