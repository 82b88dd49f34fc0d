use super::{Rounds, UserImportHash};
use crate::shared::types::{HashOptions, ImportResult};

/// Plain and key-derivation digests that only take a rounds count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    PbkdfSha1,
    Pbkdf2Sha256,
}

impl DigestAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "MD5",
            DigestAlgorithm::Sha1 => "SHA1",
            DigestAlgorithm::Sha256 => "SHA256",
            DigestAlgorithm::Sha512 => "SHA512",
            DigestAlgorithm::PbkdfSha1 => "PBKDF_SHA1",
            DigestAlgorithm::Pbkdf2Sha256 => "PBKDF2_SHA256",
        }
    }

    /// Inclusive rounds range accepted by the service
    pub fn rounds_range(&self) -> (i32, i32) {
        match self {
            DigestAlgorithm::Md5 => (0, 8192),
            DigestAlgorithm::Sha1 | DigestAlgorithm::Sha256 | DigestAlgorithm::Sha512 => (1, 8192),
            DigestAlgorithm::PbkdfSha1 | DigestAlgorithm::Pbkdf2Sha256 => (0, 120_000),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RepeatableDigest {
    algorithm: DigestAlgorithm,
    rounds: Rounds,
}

impl RepeatableDigest {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        let (min, max) = algorithm.rounds_range();
        Self {
            algorithm,
            rounds: Rounds::bounded(min, max),
        }
    }

    pub fn md5() -> Self {
        Self::new(DigestAlgorithm::Md5)
    }

    pub fn sha1() -> Self {
        Self::new(DigestAlgorithm::Sha1)
    }

    pub fn sha256() -> Self {
        Self::new(DigestAlgorithm::Sha256)
    }

    pub fn sha512() -> Self {
        Self::new(DigestAlgorithm::Sha512)
    }

    pub fn pbkdf_sha1() -> Self {
        Self::new(DigestAlgorithm::PbkdfSha1)
    }

    pub fn pbkdf2_sha256() -> Self {
        Self::new(DigestAlgorithm::Pbkdf2Sha256)
    }

    pub fn with_rounds(mut self, rounds: i32) -> Self {
        self.rounds.set(rounds);
        self
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }
}

impl UserImportHash for RepeatableDigest {
    fn hash_name(&self) -> &'static str {
        self.algorithm.name()
    }

    fn options(&self) -> ImportResult<HashOptions> {
        self.rounds.options()
    }
}
