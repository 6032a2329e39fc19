///
/// fennec::crypto::hash - Hash Algorithms and the Digest Capability
///
/// `DigestCapability` is the seam between code that needs a digest and the code
/// that computes one. Two providers live here:
/// - `RustCryptoDigest`: MD5, SHA-1, SHA-256, SHA-512 via the RustCrypto crates
/// - `UnavailableDigest`: no backend; every request is unsupported
///
/// `digest_hex` renders any provider's output as a lowercase hex string.
///

use std::fmt;

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use crate::errors::DigestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// Placeholder for "no algorithm"; never a valid digest request.
    #[default]
    None,
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::None => "none",
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Map a lowercase algorithm name to its enum value. Unknown names map to `None`.
    pub fn from_name(name: &str) -> HashAlgorithm {
        HashAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == name)
            .unwrap_or(HashAlgorithm::None)
    }

    /// Digest size in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::None => 0,
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deterministic digest function: the same input and algorithm always give the
/// same bytes.
///
/// Implementations must be safe to call from any thread. Providers that cannot
/// compute an algorithm return `DigestError::UnsupportedAlgorithm` and report
/// `false` from `supports`.
pub trait DigestCapability: Send + Sync {
    fn digest(&self, data: &[u8], algorithm: HashAlgorithm) -> Result<Vec<u8>, DigestError>;

    fn supports(&self, algorithm: HashAlgorithm) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoDigest;

impl DigestCapability for RustCryptoDigest {
    fn digest(&self, data: &[u8], algorithm: HashAlgorithm) -> Result<Vec<u8>, DigestError> {
        match algorithm {
            HashAlgorithm::None => Err(DigestError::UnsupportedAlgorithm(algorithm)),
            HashAlgorithm::Md5 => Ok(Md5::digest(data).to_vec()),
            HashAlgorithm::Sha1 => Ok(Sha1::digest(data).to_vec()),
            HashAlgorithm::Sha256 => Ok(Sha256::digest(data).to_vec()),
            HashAlgorithm::Sha512 => Ok(Sha512::digest(data).to_vec()),
        }
    }

    fn supports(&self, algorithm: HashAlgorithm) -> bool {
        algorithm != HashAlgorithm::None
    }
}

/// Stands in for a build with no digest backend linked.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableDigest;

impl DigestCapability for UnavailableDigest {
    fn digest(&self, _data: &[u8], algorithm: HashAlgorithm) -> Result<Vec<u8>, DigestError> {
        Err(DigestError::UnsupportedAlgorithm(algorithm))
    }

    fn supports(&self, _algorithm: HashAlgorithm) -> bool {
        false
    }
}

pub fn digest_hex(
    capability: &dyn DigestCapability,
    data: &[u8],
    algorithm: HashAlgorithm,
) -> Result<String, DigestError> {
    let raw = capability.digest(data, algorithm)?;
    Ok(hex::encode(raw))
}
