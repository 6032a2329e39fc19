///
/// Identifier generation.
///
/// - v4: 128 random bits from four 32-bit draws, then version 4 and the RFC 4122
///   variant are stamped in
/// - v3: MD5 over namespace bytes followed by the name's UTF-8 bytes, first 16
///   bytes kept, then version 3 and the variant are stamped in
///
/// `UuidGenerator` bundles a private `ContextRng` with a digest capability for
/// components that generate many identifiers from one execution context.
///

use std::sync::Arc;

use fennec_crypto::{DigestCapability, HashAlgorithm, RustCryptoDigest, UnavailableDigest};
use fennec_random::ContextRng;
use rand::RngCore;

use crate::errors::UuidError;
use crate::uuid::Uuid;

impl Uuid {
    /// A random (version 4) identifier drawn from `rng`.
    pub fn new_v4_with<R: RngCore + ?Sized>(rng: &mut R) -> Uuid {
        let mut bytes = [0u8; 16];
        for chunk in bytes.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rng.next_u32().to_be_bytes());
        }
        Uuid::stamped(bytes, 4)
    }

    /// A name-based (version 3) identifier.
    ///
    /// Fails with `CapabilityUnavailable` before hashing anything if `digest`
    /// cannot compute MD5.
    pub fn new_v3(
        namespace: &Uuid,
        name: &str,
        digest: &dyn DigestCapability,
    ) -> Result<Uuid, UuidError> {
        if !digest.supports(HashAlgorithm::Md5) {
            tracing::warn!(uuid_name = name, "md5 digest unavailable, cannot derive v3 uuid");
            return Err(UuidError::CapabilityUnavailable {
                reason: "provider does not support md5".to_string(),
            });
        }

        let mut input = Vec::with_capacity(16 + name.len());
        input.extend_from_slice(namespace.as_bytes());
        input.extend_from_slice(name.as_bytes());

        let hash = digest.digest(&input, HashAlgorithm::Md5).map_err(|e| {
            tracing::warn!(uuid_name = name, error = %e, "md5 digest failed, cannot derive v3 uuid");
            UuidError::CapabilityUnavailable {
                reason: e.to_string(),
            }
        })?;

        let bytes: [u8; 16] = hash
            .get(..16)
            .and_then(|head| head.try_into().ok())
            .ok_or(UuidError::ShortDigest { len: hash.len() })?;

        Ok(Uuid::stamped(bytes, 3))
    }
}

/// Generates identifiers from an owned random generator and a shared digest
/// capability.
///
/// Keep one per thread or task; `v4` needs `&mut self`.
pub struct UuidGenerator {
    rng: ContextRng,
    digest: Arc<dyn DigestCapability>,
}

impl Default for UuidGenerator {
    fn default() -> Self {
        Self::new(Arc::new(RustCryptoDigest))
    }
}

impl UuidGenerator {
    pub fn new(digest: Arc<dyn DigestCapability>) -> Self {
        Self::with_rng(ContextRng::from_entropy(), digest)
    }

    pub fn with_rng(rng: ContextRng, digest: Arc<dyn DigestCapability>) -> Self {
        Self { rng, digest }
    }

    /// A generator that can only produce v4 identifiers.
    pub fn without_digest() -> Self {
        Self::new(Arc::new(UnavailableDigest))
    }

    pub fn digest(&self) -> &dyn DigestCapability {
        self.digest.as_ref()
    }

    pub fn v4(&mut self) -> Uuid {
        Uuid::new_v4_with(&mut self.rng)
    }

    pub fn v3(&self, namespace: &Uuid, name: &str) -> Result<Uuid, UuidError> {
        Uuid::new_v3(namespace, name, self.digest.as_ref())
    }

    pub fn v4_string(&mut self) -> String {
        self.v4().to_string()
    }

    /// Name-based identifier with the namespace given as a string, parsed leniently.
    pub fn v3_string(&self, name: &str, namespace: &str) -> Result<String, UuidError> {
        self.v3(&Uuid::parse_lenient(namespace), name)
            .map(|uuid| uuid.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uuid::NAMESPACE_DNS;
    use fennec_crypto::DigestError;

    struct FixedDigest(Vec<u8>);

    impl DigestCapability for FixedDigest {
        fn digest(&self, _data: &[u8], _algorithm: HashAlgorithm) -> Result<Vec<u8>, DigestError> {
            Ok(self.0.clone())
        }

        fn supports(&self, _algorithm: HashAlgorithm) -> bool {
            true
        }
    }

    /// Claims MD5 support but fails when asked.
    struct FlakyDigest;

    impl DigestCapability for FlakyDigest {
        fn digest(&self, _data: &[u8], algorithm: HashAlgorithm) -> Result<Vec<u8>, DigestError> {
            Err(DigestError::UnsupportedAlgorithm(algorithm))
        }

        fn supports(&self, _algorithm: HashAlgorithm) -> bool {
            true
        }
    }

    #[test]
    fn test_v4_layout() {
        let mut rng = ContextRng::seeded(42);
        let uuid = Uuid::new_v4_with(&mut rng);
        assert_eq!(uuid.version(), 4);
        assert!(uuid.is_rfc4122_variant());
    }

    #[test]
    fn test_v4_packs_draws_big_endian() {
        let mut a = ContextRng::seeded(9);
        let mut b = ContextRng::seeded(9);
        let uuid = Uuid::new_v4_with(&mut a);
        let first = b.next_u32();
        assert_eq!(&uuid.as_bytes()[..4], &first.to_be_bytes());
    }

    #[test]
    fn test_v4_seeded_is_reproducible() {
        let mut a = UuidGenerator::with_rng(ContextRng::seeded(3), Arc::new(RustCryptoDigest));
        let mut b = UuidGenerator::with_rng(ContextRng::seeded(3), Arc::new(RustCryptoDigest));
        assert_eq!(a.v4(), b.v4());
        assert_ne!(a.v4(), a.v4());
    }

    #[test]
    fn test_v3_known_answer() {
        let uuid = Uuid::new_v3(&NAMESPACE_DNS, "python.org", &RustCryptoDigest).unwrap();
        assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
        assert_eq!(uuid.version(), 3);
        assert!(uuid.is_rfc4122_variant());
    }

    #[test]
    fn test_v3_stamps_over_digest_bytes() {
        let digest = FixedDigest(vec![0xFF; 16]);
        let uuid = Uuid::new_v3(&NAMESPACE_DNS, "anything", &digest).unwrap();
        assert_eq!(uuid.to_string(), "ffffffff-ffff-3fff-bfff-ffffffffffff");
    }

    #[test]
    fn test_v3_uses_first_sixteen_bytes() {
        let mut raw = vec![0u8; 16];
        raw.extend_from_slice(&[0xFF; 16]);
        let uuid = Uuid::new_v3(&NAMESPACE_DNS, "x", &FixedDigest(raw)).unwrap();
        assert_eq!(uuid.to_string(), "00000000-0000-3000-8000-000000000000");
    }

    #[test]
    fn test_v3_short_digest() {
        let err = Uuid::new_v3(&NAMESPACE_DNS, "x", &FixedDigest(vec![1, 2, 3])).unwrap_err();
        assert_eq!(err, UuidError::ShortDigest { len: 3 });
    }

    #[test]
    fn test_v3_without_md5() {
        let err = Uuid::new_v3(&NAMESPACE_DNS, "widget", &UnavailableDigest).unwrap_err();
        assert!(matches!(err, UuidError::CapabilityUnavailable { .. }));
    }

    #[test]
    fn test_v3_digest_failure_is_capability_unavailable() {
        let err = Uuid::new_v3(&NAMESPACE_DNS, "widget", &FlakyDigest).unwrap_err();
        assert!(matches!(
            err,
            UuidError::CapabilityUnavailable { ref reason } if reason.contains("md5")
        ));
    }

    #[test]
    fn test_generator_without_digest() {
        let mut generator = UuidGenerator::without_digest();
        assert_eq!(generator.v4().version(), 4);
        assert!(!generator.digest().supports(HashAlgorithm::Md5));
        assert!(generator.v3(&NAMESPACE_DNS, "widget").is_err());
    }

    #[test]
    fn test_generator_string_forms() {
        let mut generator = UuidGenerator::default();
        assert_eq!(generator.v4_string().len(), 36);
        assert_eq!(
            generator
                .v3_string("widget", "6ba7b810-9dad-11d1-80b4-00c04fd430c8")
                .unwrap(),
            "22c9b63a-35b6-3e7d-b4ed-6f634e8e1b49"
        );
    }
}
