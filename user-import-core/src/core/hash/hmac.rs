use super::{SignerKey, UserImportHash};
use crate::shared::types::{HashOptions, ImportResult};

/// HMAC digest variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacAlgorithm {
    Sha512,
    Sha256,
    Sha1,
    Md5,
}

impl HmacAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            HmacAlgorithm::Sha512 => "HMAC_SHA512",
            HmacAlgorithm::Sha256 => "HMAC_SHA256",
            HmacAlgorithm::Sha1 => "HMAC_SHA1",
            HmacAlgorithm::Md5 => "HMAC_MD5",
        }
    }
}

/// HMAC password hash. Requires a signing key.
#[derive(Debug, Clone)]
pub struct Hmac {
    algorithm: HmacAlgorithm,
    key: SignerKey,
}

impl Hmac {
    pub fn new(algorithm: HmacAlgorithm) -> Self {
        Self {
            algorithm,
            key: SignerKey::new(),
        }
    }

    pub fn sha512() -> Self {
        Self::new(HmacAlgorithm::Sha512)
    }

    pub fn sha256() -> Self {
        Self::new(HmacAlgorithm::Sha256)
    }

    pub fn sha1() -> Self {
        Self::new(HmacAlgorithm::Sha1)
    }

    pub fn md5() -> Self {
        Self::new(HmacAlgorithm::Md5)
    }

    pub fn with_key(mut self, key: impl AsRef<[u8]>) -> Self {
        self.key.set(key);
        self
    }

    pub fn algorithm(&self) -> HmacAlgorithm {
        self.algorithm
    }
}

impl UserImportHash for Hmac {
    fn hash_name(&self) -> &'static str {
        self.algorithm.name()
    }

    fn options(&self) -> ImportResult<HashOptions> {
        self.key.options()
    }
}
