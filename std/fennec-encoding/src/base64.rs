///
/// fennec::encoding::base64 - Base64 Encoding/Decoding
///
/// Bytes <-> text conversion with the standard alphabet (`A-Z a-z 0-9 + /`) and
/// `=` padding.
/// - encode(data) -> string: packs 3 octets into 4 symbols, pads to a multiple of 4
/// - decode(s) -> bytes: truncates at the first non-alphabet symbol
/// - decode_strict(s) -> bytes or Base64Error
///
/// `encode` and `decode_strict` use the `base64` crate's standard engine. The
/// lenient `decode` runs its own bit accumulator, draining 8 bits at a time and
/// stopping at the first symbol the engine would reject.
///

use base64::{DecodeError, Engine, engine::general_purpose::STANDARD};

use crate::errors::Base64Error;

pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

pub const PAD: u8 = b'=';

const INVALID: u8 = 0xFF;

const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Number of symbols `encode` produces for `len` input bytes
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

/// Encode bytes to a padded base64 string
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode a base64 string, stopping at the first symbol outside the alphabet.
///
/// `=` is outside the alphabet, so decoding ends at the padding. Anything after
/// the first invalid symbol is ignored, even if it is valid base64. Bits left over
/// at the end that do not fill an octet are dropped.
pub fn decode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() / 4 * 3);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &c in text.as_bytes() {
        let value = DECODE_TABLE[c as usize];
        if value == INVALID {
            break;
        }
        buffer = (buffer << 6) | value as u32;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    out
}

/// Decode a base64 string, rejecting anything `encode` would not have produced:
/// the length must be a multiple of 4, at most two `=` may appear and only at the
/// end, every other symbol must be in the alphabet, and the unused low bits of
/// the last symbol must be zero.
pub fn decode_strict(text: &str) -> Result<Vec<u8>, Base64Error> {
    if text.len() % 4 != 0 {
        return Err(Base64Error::InvalidLength { length: text.len() });
    }

    STANDARD.decode(text).map_err(|e| match e {
        DecodeError::InvalidByte(position, PAD) => Base64Error::InvalidPadding { position },
        DecodeError::InvalidByte(position, byte) => Base64Error::InvalidSymbol {
            position,
            symbol: symbol_at(text, position, byte),
        },
        DecodeError::InvalidLength(_) => Base64Error::InvalidLength { length: text.len() },
        DecodeError::InvalidLastSymbol(position, byte) => Base64Error::InvalidLastSymbol {
            position,
            symbol: symbol_at(text, position, byte),
        },
        DecodeError::InvalidPadding => Base64Error::InvalidPadding {
            position: text.trim_end_matches(PAD as char).len(),
        },
    })
}

/// The character starting at byte offset `position`, falling back to `byte`.
fn symbol_at(text: &str, position: usize, byte: u8) -> char {
    text.get(position..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(byte as char)
}
