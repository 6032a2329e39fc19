//!
//! fennec-uuid - RFC 4122 Identifiers
//!
//! Produces 128-bit identifiers rendered as `xxxxxxxx-xxxx-Vxxx-yxxx-xxxxxxxxxxxx`
//! (lowercase hex, `V` the version, `y` one of `8 9 a b`).
//!
//! ## Functions
//!
//! - `generate_v4() -> String` - Random identifier from the calling thread's
//!   generator
//! - `generate_v3(name, namespace, digest) -> Result<String, UuidError>` -
//!   Deterministic identifier for `name` within `namespace`
//! - `generate_v3_dns(name, digest)` - Same, in the DNS namespace
//! - `parse_uuid_bytes(s) -> [u8; 16]` - Lenient string to bytes conversion
//!
//! ## Digest capability
//!
//! Version 3 needs MD5, which this crate never computes itself. Callers pass a
//! `fennec_crypto::DigestCapability`; without MD5 support generation fails with
//! `UuidError::CapabilityUnavailable`.
//!
//! ```rust,ignore
//! use fennec_crypto::RustCryptoDigest;
//! use fennec_uuid::{generate_v3, generate_v4};
//!
//! let id = generate_v4();
//! let stable = generate_v3("widget", "6ba7b810-9dad-11d1-80b4-00c04fd430c8", &RustCryptoDigest)?;
//! ```
//!

pub mod errors;
mod generator;
mod uuid;

pub use errors::{UuidError, UuidResult};
pub use generator::UuidGenerator;
pub use uuid::{NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500, Uuid, parse_uuid_bytes};

use fennec_crypto::DigestCapability;
use fennec_random::with_thread_rng;

pub fn generate_v4() -> String {
    with_thread_rng(|rng| Uuid::new_v4_with(rng)).to_string()
}

/// The namespace string is parsed with [`parse_uuid_bytes`], so a malformed
/// namespace still yields an identifier (derived from whatever hex it contained).
pub fn generate_v3(
    name: &str,
    namespace: &str,
    digest: &dyn DigestCapability,
) -> UuidResult<String> {
    Uuid::new_v3(&Uuid::parse_lenient(namespace), name, digest).map(|uuid| uuid.to_string())
}

pub fn generate_v3_dns(name: &str, digest: &dyn DigestCapability) -> UuidResult<String> {
    Uuid::new_v3(&NAMESPACE_DNS, name, digest).map(|uuid| uuid.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fennec_crypto::{RustCryptoDigest, UnavailableDigest};

    const DNS: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";

    #[test]
    fn test_generate_v4_format() {
        let uuid = generate_v4();
        let chars: Vec<char> = uuid.chars().collect();
        assert_eq!(chars.len(), 36);
        for pos in [8, 13, 18, 23] {
            assert_eq!(chars[pos], '-');
        }
        assert_eq!(chars[14], '4');
        assert!(matches!(chars[19], '8' | '9' | 'a' | 'b'));
    }

    #[test]
    fn test_generate_v4_uniqueness() {
        assert_ne!(generate_v4(), generate_v4());
    }

    #[test]
    fn test_generate_v3_deterministic() {
        let a = generate_v3("widget", DNS, &RustCryptoDigest).unwrap();
        let b = generate_v3("widget", DNS, &RustCryptoDigest).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, "22c9b63a-35b6-3e7d-b4ed-6f634e8e1b49");
    }

    #[test]
    fn test_generate_v3_name_sensitive() {
        let widget = generate_v3("widget", DNS, &RustCryptoDigest).unwrap();
        let gadget = generate_v3("gadget", DNS, &RustCryptoDigest).unwrap();
        assert_ne!(widget, gadget);
        assert_eq!(gadget, "fc75793b-9ddc-30b9-80f7-3c6902cf3069");
    }

    #[test]
    fn test_generate_v3_dns_matches_explicit_namespace() {
        assert_eq!(
            generate_v3_dns("widget", &RustCryptoDigest).unwrap(),
            generate_v3("widget", DNS, &RustCryptoDigest).unwrap()
        );
    }

    #[test]
    fn test_generate_v3_uppercase_namespace() {
        assert_eq!(
            generate_v3("widget", &DNS.to_uppercase(), &RustCryptoDigest).unwrap(),
            "22c9b63a-35b6-3e7d-b4ed-6f634e8e1b49"
        );
    }

    #[test]
    fn test_generate_v3_without_md5() {
        let err = generate_v3("widget", DNS, &UnavailableDigest).unwrap_err();
        assert!(matches!(err, UuidError::CapabilityUnavailable { .. }));
    }
}
