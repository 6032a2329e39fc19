///
/// Digest error types.
///
/// Covers requests a provider cannot serve and configuration that cannot be
/// loaded or parsed.
///

use crate::hash::HashAlgorithm;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(HashAlgorithm),

    #[error("Invalid digest configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = DigestError::UnsupportedAlgorithm(HashAlgorithm::Md5);
        assert_eq!(err.to_string(), "Unsupported digest algorithm: md5");

        let err = DigestError::UnsupportedAlgorithm(HashAlgorithm::None);
        assert!(err.to_string().contains("none"));

        let err = DigestError::InvalidConfig("unknown field `colour`".to_string());
        assert!(err.to_string().contains("Invalid digest configuration"));
        assert!(err.to_string().contains("colour"));
    }
}
