//! Validated binary sequences.
//!
//! Every scorer in this crate takes a [`BitSequence`], so symbol validation
//! happens exactly once, when the sequence is built.

use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidInput, Result};

/// Conversion progress handed to the observer of
/// [`BitSequence::from_ascii_with_progress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

/// An immutable sequence of bits, each stored as a `u8` equal to 0 or 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSequence {
    bits: Vec<u8>,
}

impl BitSequence {
    /// Build from numeric symbols. Any value other than 0 or 1 is rejected.
    pub fn from_bits(symbols: &[u8]) -> Result<Self> {
        if let Some(position) = symbols.iter().position(|&b| b > 1) {
            return Err(InvalidInput::NonBinary {
                position,
                symbol: symbols[position].to_string(),
            });
        }
        Ok(Self {
            bits: symbols.to_vec(),
        })
    }

    /// Build from `'0'`/`'1'` text.
    pub fn from_ascii(text: &str) -> Result<Self> {
        Self::from_ascii_with_progress(text, 0, |_| {})
    }

    /// Same as [`from_ascii`](Self::from_ascii), calling `observer` every
    /// `every` symbols and once after the last one. `every == 0` disables it.
    pub fn from_ascii_with_progress<F>(text: &str, every: usize, mut observer: F) -> Result<Self>
    where
        F: FnMut(Progress),
    {
        let total = text.chars().count();
        let mut bits = Vec::with_capacity(total);
        for (position, ch) in text.chars().enumerate() {
            match ch {
                '0' => bits.push(0),
                '1' => bits.push(1),
                other => {
                    return Err(InvalidInput::NonBinary {
                        position,
                        symbol: other.to_string(),
                    });
                }
            }
            if every > 0 && (position + 1) % every == 0 && position + 1 < total {
                observer(Progress {
                    done: position + 1,
                    total,
                });
            }
        }
        if every > 0 {
            observer(Progress { done: total, total });
        }
        Ok(Self { bits })
    }

    /// Wrap symbols already known to be 0/1, e.g. a block of another sequence.
    pub(crate) fn from_validated(bits: &[u8]) -> Self {
        debug_assert!(bits.iter().all(|&b| b <= 1));
        Self {
            bits: bits.to_vec(),
        }
    }

    /// Unpack raw bytes into bits (MSB first per byte).
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut bits = Vec::with_capacity(data.len() * 8);
        for &byte in data {
            for shift in (0..8).rev() {
                bits.push((byte >> shift) & 1);
            }
        }
        Self { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().copied()
    }

    /// Number of 1 bits.
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }
}

impl FromStr for BitSequence {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_ascii(s)
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}
