///
/// The `Uuid` value type and string conversions.
///
/// Two parsers are provided:
/// - `parse_uuid_bytes` accepts anything and recovers what hex it can. Name-based
///   generation uses it for namespace strings.
/// - `Uuid::from_str` accepts only the canonical hyphenated form (hex digits of
///   either case) and reports what is wrong otherwise.
///

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::errors::UuidError;

/// Byte offsets of the hyphens in the canonical 36-character form.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

const CANONICAL_LEN: usize = 36;

/// Hex group spans in the canonical form, paired with the bytes they fill.
const GROUPS: [(Range<usize>, Range<usize>); 5] = [
    (0..8, 0..4),
    (9..13, 4..6),
    (14..18, 6..8),
    (19..23, 8..10),
    (24..36, 10..16),
];

/// A 128-bit identifier.
///
/// Displays as 8-4-4-4-12 lowercase hex groups. The version lives in the upper
/// nibble of byte 6 and the variant in the upper bits of byte 8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uuid([u8; 16]);

/// RFC 4122 Appendix C: namespace for fully-qualified domain names.
pub const NAMESPACE_DNS: Uuid = Uuid([
    0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// RFC 4122 Appendix C: namespace for URLs.
pub const NAMESPACE_URL: Uuid = Uuid([
    0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// RFC 4122 Appendix C: namespace for ISO OIDs.
pub const NAMESPACE_OID: Uuid = Uuid([
    0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// RFC 4122 Appendix C: namespace for X.500 distinguished names.
pub const NAMESPACE_X500: Uuid = Uuid([
    0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

impl Uuid {
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub const fn nil() -> Self {
        Self([0; 16])
    }

    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// The version number stored in the upper nibble of byte 6.
    pub fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Whether the upper two bits of byte 8 are `10`.
    pub fn is_rfc4122_variant(&self) -> bool {
        self.0[8] & 0xC0 == 0x80
    }

    /// Best-effort conversion that never fails. See [`parse_uuid_bytes`].
    pub fn parse_lenient(input: &str) -> Self {
        Self(parse_uuid_bytes(input))
    }

    /// Stamp `version` into byte 6 and the RFC 4122 variant into byte 8.
    pub(crate) fn stamped(mut bytes: [u8; 16], version: u8) -> Self {
        bytes[6] = (bytes[6] & 0x0F) | (version << 4);
        bytes[8] = (bytes[8] & 0x3F) | 0x80;
        Self(bytes)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{}-{}-{}-{}-{}",
            hex::encode(&b[0..4]),
            hex::encode(&b[4..6]),
            hex::encode(&b[6..8]),
            hex::encode(&b[8..10]),
            hex::encode(&b[10..16]),
        )
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(uuid: Uuid) -> Self {
        uuid.0
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| UuidError::Malformed {
            input: input.to_string(),
            reason,
        };

        let chars = input.as_bytes();
        if chars.len() != CANONICAL_LEN {
            return Err(malformed(format!(
                "expected {} characters, found {}",
                CANONICAL_LEN,
                chars.len()
            )));
        }

        if let Some(&pos) = HYPHEN_POSITIONS.iter().find(|&&pos| chars[pos] != b'-') {
            return Err(malformed(format!("expected '-' at position {}", pos)));
        }

        let mut bytes = [0u8; 16];
        for (text, out) in GROUPS {
            hex::decode_to_slice(&chars[text.clone()], &mut bytes[out]).map_err(|e| match e {
                hex::FromHexError::InvalidHexCharacter { c, index } => malformed(format!(
                    "invalid hex digit {:?} at position {}",
                    c,
                    text.start + index
                )),
                other => malformed(other.to_string()),
            })?;
        }

        Ok(Self(bytes))
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Convert a UUID string to 16 bytes without ever failing.
///
/// Hyphens are skipped and the rest is read as hex nibble pairs:
/// - a non-hex character where a high nibble is expected is skipped
/// - a non-hex character where a low nibble is expected is consumed and counts as 0
/// - a high nibble followed by `-` or the end of input gets a low nibble of 0
/// - input past the 16th byte is ignored; missing bytes stay 0
///
/// Callers that need to reject malformed input parse with `Uuid::from_str`.
pub fn parse_uuid_bytes(input: &str) -> [u8; 16] {
    let chars = input.as_bytes();
    let mut bytes = [0u8; 16];
    let mut idx = 0;
    let mut i = 0;

    while i < chars.len() && idx < bytes.len() {
        if chars[i] == b'-' {
            i += 1;
            continue;
        }
        let Some(high) = hex_value(chars[i]) else {
            i += 1;
            continue;
        };

        let mut value = high << 4;
        i += 1;
        if i < chars.len() && chars[i] != b'-' {
            if let Some(low) = hex_value(chars[i]) {
                value |= low;
            }
            i += 1;
        }

        bytes[idx] = value;
        idx += 1;
    }

    bytes
}
