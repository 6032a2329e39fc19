//!
//! fennec-random - Per-Context Random Number Generation
//!
//! Every execution context (thread, task, request) owns its own `ContextRng`,
//! seeded once from OS entropy. Nothing is shared between contexts, so drawing
//! numbers never takes a lock.
//!
//! ## Owning a generator
//!
//! Long-lived components hold a `ContextRng` directly and pass `&mut` to whatever
//! needs randomness. `ContextRng` implements `rand::RngCore`.
//!
//! ## Resolving the current thread's generator
//!
//! `with_thread_rng` lends the calling thread's generator to a closure. The
//! generator is created and seeded on the first call in each thread. The free
//! functions below all go through it.
//!
//! ## Functions
//!
//! - `random_hex(digits) -> String` - Lowercase hex digits
//! - `random_n_digit_number(min, max) -> u64` - A number with between `min` and
//!   `max` decimal digits
//! - `random_string(length, charset) -> String` - Characters drawn from `charset`
//!

mod context;
pub mod errors;

pub use context::{ContextRng, with_thread_rng};
pub use errors::RandomError;

/// Alphanumerics, used when a caller has no preferred character set
pub const DEFAULT_CHARSET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Largest digit count whose numbers all fit in a u64
pub const MAX_DIGITS: u32 = 19;

impl ContextRng {
    pub fn hex(&mut self, digits: usize) -> String {
        (0..digits)
            .map(|_| HEX_DIGITS[self.range(0, 15) as usize] as char)
            .collect()
    }

    pub fn n_digit_number(&mut self, min_digits: u32, max_digits: u32) -> Result<u64, RandomError> {
        if min_digits == 0 || min_digits > max_digits || max_digits > MAX_DIGITS {
            return Err(RandomError::InvalidDigitRange {
                min: min_digits,
                max: max_digits,
            });
        }

        let len = self.range(min_digits as i64, max_digits as i64) as u32;
        let low = 10u64.pow(len - 1);
        let high = 10u64.pow(len) - 1;
        Ok(self.range_u64(low, high))
    }

    pub fn string(&mut self, length: usize, charset: &str) -> Result<String, RandomError> {
        let chars: Vec<char> = charset.chars().collect();
        if chars.is_empty() {
            return Err(RandomError::EmptyCharset);
        }

        let last = chars.len() as i64 - 1;
        Ok((0..length)
            .map(|_| chars[self.range(0, last) as usize])
            .collect())
    }
}

pub fn random_hex(digits: usize) -> String {
    with_thread_rng(|rng| rng.hex(digits))
}

pub fn random_n_digit_number(min_digits: u32, max_digits: u32) -> Result<u64, RandomError> {
    with_thread_rng(|rng| rng.n_digit_number(min_digits, max_digits))
}

pub fn random_string(length: usize, charset: &str) -> Result<String, RandomError> {
    with_thread_rng(|rng| rng.string(length, charset))
}
