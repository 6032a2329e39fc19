///
/// Base64 error types.
///
/// Only the strict decoder reports errors. `encode` and the lenient `decode`
/// accept every input.
///

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base64Error {
    #[error("Invalid base64 symbol {symbol:?} at position {position}")]
    InvalidSymbol { position: usize, symbol: char },

    #[error("Invalid base64 length {length}: must be a multiple of 4")]
    InvalidLength { length: usize },

    #[error("Invalid base64 padding at position {position}")]
    InvalidPadding { position: usize },

    #[error("Invalid last base64 symbol {symbol:?} at position {position}: unused bits must be zero")]
    InvalidLastSymbol { position: usize, symbol: char },
}
