pub mod all;
pub mod complexity;
pub mod excursions;

use std::io::Read;

use clap::Args;
use log::debug;
use nistbits_tests::{BitSequence, InvalidInput};

/// Report conversion progress every this many symbols.
const PROGRESS_EVERY: usize = 1 << 20;

/// Where the bits come from and how they are encoded.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Bit string given inline, e.g. 1100100001
    #[arg(long, conflicts_with = "file")]
    pub bits: Option<String>,

    /// Read the bits from a file (default: stdin)
    #[arg(long)]
    pub file: Option<String>,

    /// Input encoding: ascii ('0'/'1' text, whitespace ignored) or binary (raw bytes, MSB first)
    #[arg(long, default_value = "ascii", value_parser = ["ascii", "binary"])]
    pub format: String,
}

/// Load and validate the input, exiting with a message on failure.
pub fn load_bits(input: &InputArgs) -> BitSequence {
    let raw = match read_raw(input) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("error: failed to read input: {e}");
            std::process::exit(1);
        }
    };
    match decode(&raw, &input.format) {
        Ok(bits) => {
            debug!("loaded {} bits ({} ones)", bits.len(), bits.ones());
            bits
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn read_raw(input: &InputArgs) -> std::io::Result<Vec<u8>> {
    if let Some(bits) = &input.bits {
        return Ok(bits.as_bytes().to_vec());
    }
    match &input.file {
        Some(path) => std::fs::read(path),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Decode raw input in the given format into a validated sequence.
pub fn decode(raw: &[u8], format: &str) -> Result<BitSequence, InvalidInput> {
    match format {
        "binary" => Ok(BitSequence::from_bytes(raw)),
        _ => {
            // Offsets of the kept symbols in the raw text, so errors point at
            // what the user actually wrote.
            let mut offsets = Vec::new();
            let text: String = String::from_utf8_lossy(raw)
                .chars()
                .enumerate()
                .filter(|(_, c)| !c.is_ascii_whitespace())
                .map(|(offset, c)| {
                    offsets.push(offset);
                    c
                })
                .collect();
            BitSequence::from_ascii_with_progress(&text, PROGRESS_EVERY, |p| {
                debug!("converted {}/{} symbols", p.done, p.total)
            })
            .map_err(|e| match e {
                InvalidInput::NonBinary { position, symbol } => InvalidInput::NonBinary {
                    position: offsets.get(position).copied().unwrap_or(position),
                    symbol,
                },
                other => other,
            })
        }
    }
}

/// Print `value` as pretty JSON, exiting on serialization failure.
pub fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("error: failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}
