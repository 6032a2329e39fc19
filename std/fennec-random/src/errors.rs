///
/// Random utility error types.
///
/// Raw draws never fail. Errors come from argument validation in the string and
/// number helpers.
///

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    #[error("Character set must not be empty")]
    EmptyCharset,

    #[error("Invalid digit range {min}..={max}: expected 1 <= min <= max <= 19")]
    InvalidDigitRange { min: u32, max: u32 },
}
