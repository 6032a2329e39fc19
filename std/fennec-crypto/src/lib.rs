//!
//! fennec-crypto - Digest Capability
//!
//! Hashing is consumed as an injected capability rather than called directly, so
//! callers decide at construction time which backend (if any) is linked in:
//!
//! - **Algorithms**: `HashAlgorithm` names MD5, SHA-1, SHA-256, SHA-512
//! - **Capability**: `DigestCapability` computes raw digest bytes or reports
//!   `DigestError::UnsupportedAlgorithm`
//! - **Backends**: `RustCryptoDigest` (md-5, sha1, sha2) and `UnavailableDigest`
//! - **Configuration**: `DigestConfig` reads `[digest]` from TOML and builds a
//!   `DigestProvider`
//!

pub mod config;
pub mod errors;
pub mod hash;

pub use config::{DigestBackend, DigestConfig, DigestProvider};
pub use errors::DigestError;
pub use hash::{DigestCapability, HashAlgorithm, RustCryptoDigest, UnavailableDigest, digest_hex};
