//!
//! fennec-encoding - Binary-to-text encodings
//!
//! ## Base64
//! - `encode(data: &[u8]) -> String` - Standard alphabet with `=` padding
//! - `decode(text: &str) -> Vec<u8>` - Lenient: stops at the first symbol outside
//!   the alphabet (including `=`) and returns what was decoded up to that point
//! - `decode_strict(text: &str) -> Result<Vec<u8>, Base64Error>` - Rejects bad
//!   length, stray symbols, misplaced padding and non-zero trailing bits
//! - `encoded_len(n: usize) -> usize` - Output length for `n` input bytes
//!
//! The lenient decoder is the default. Inputs often carry trailing whitespace or
//! separators; callers that need validation use `decode_strict`.
//!

pub mod base64;
pub mod errors;

pub use self::base64::{decode, decode_strict, encode, encoded_len};
pub use errors::Base64Error;
