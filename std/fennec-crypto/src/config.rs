///
/// # Digest Configuration
///
/// Selects the digest backend at configuration time instead of at compile time.
/// Callers that need hashing load a `DigestConfig`, build a `DigestProvider` from
/// it, and inject the provider wherever a `DigestCapability` is expected.
///
/// ## Example
///
/// ```toml
/// [digest]
/// backend = "rust-crypto"   # or "unavailable"
/// disabled = ["md5"]        # algorithms the provider refuses
/// ```
///
/// Both keys are optional. A missing `[digest]` table gives the default
/// configuration: the RustCrypto backend with nothing disabled.
///

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::DigestError;
use crate::hash::{DigestCapability, HashAlgorithm, RustCryptoDigest, UnavailableDigest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestBackend {
    #[default]
    RustCrypto,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DigestConfig {
    #[serde(default)]
    pub backend: DigestBackend,
    #[serde(default)]
    pub disabled: Vec<HashAlgorithm>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    digest: DigestConfig,
}

impl DigestConfig {
    pub fn from_path(path: &Path) -> Result<DigestConfig, DigestError> {
        let content = std::fs::read_to_string(path)?;
        DigestConfig::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<DigestConfig, DigestError> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| DigestError::InvalidConfig(e.to_string()))?;
        Ok(file.digest)
    }

    pub fn build(&self) -> DigestProvider {
        tracing::debug!(
            backend = ?self.backend,
            disabled = ?self.disabled,
            "resolved digest provider"
        );
        DigestProvider {
            backend: self.backend,
            disabled: self.disabled.clone(),
        }
    }
}

/// A digest capability assembled from configuration.
#[derive(Debug, Clone, Default)]
pub struct DigestProvider {
    backend: DigestBackend,
    disabled: Vec<HashAlgorithm>,
}

impl DigestProvider {
    pub fn backend(&self) -> DigestBackend {
        self.backend
    }

    fn inner(&self) -> &dyn DigestCapability {
        match self.backend {
            DigestBackend::RustCrypto => &RustCryptoDigest,
            DigestBackend::Unavailable => &UnavailableDigest,
        }
    }
}

impl DigestCapability for DigestProvider {
    fn digest(&self, data: &[u8], algorithm: HashAlgorithm) -> Result<Vec<u8>, DigestError> {
        if self.disabled.contains(&algorithm) {
            return Err(DigestError::UnsupportedAlgorithm(algorithm));
        }
        self.inner().digest(data, algorithm)
    }

    fn supports(&self, algorithm: HashAlgorithm) -> bool {
        !self.disabled.contains(&algorithm) && self.inner().supports(algorithm)
    }
}
