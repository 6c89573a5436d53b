use thiserror::Error;

/// The only way a computation in this crate can fail: the caller handed us a
/// sequence we refuse to score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// A symbol other than 0/1 was found. `symbol` is the offending value as
    /// written (a character for text input, a decimal number for raw values).
    #[error("invalid input: non-binary symbol {symbol:?} at position {position}")]
    NonBinary { position: usize, symbol: String },

    /// The operation needs at least one bit.
    #[error("invalid input: empty bit sequence")]
    Empty,
}

pub type Result<T> = std::result::Result<T, InvalidInput>;
