//! Hash configuration loaded from the environment
//!
//! A `.env` file is read first if present. Numeric values are parsed here but
//! range-checked only when the hash options are read.

use crate::core::hash::{
    Bcrypt, DigestAlgorithm, Hmac, HmacAlgorithm, RepeatableDigest, Scrypt, StandardScrypt,
    UserImportHash,
};
use crate::core::import::UserImportOptions;
use crate::shared::constants::*;
use crate::shared::error::UserImportError;
use crate::shared::types::ImportResult;
use dotenv::dotenv;
use std::env;
use zeroize::Zeroizing;

#[derive(Default)]
pub struct HashSettings {
    pub algorithm: Option<String>,
    pub key: Option<Zeroizing<String>>,
    pub rounds: Option<i32>,
    pub memory_cost: Option<i32>,
    pub salt_separator: Option<String>,
    pub derived_key_length: Option<i32>,
    pub block_size: Option<i32>,
    pub parallelization: Option<i32>,
}

impl HashSettings {
    pub fn from_env() -> ImportResult<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> ImportResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |name: &str| -> ImportResult<Option<i32>> {
            match lookup(name) {
                Some(value) => value.trim().parse::<i32>().map(Some).map_err(|e| {
                    UserImportError::config(format!("{} is not a valid integer: {}", name, e))
                }),
                None => Ok(None),
            }
        };

        Ok(Self {
            algorithm: lookup(ENV_HASH_ALGORITHM)
                .map(|a| a.trim().to_uppercase())
                .filter(|a| !a.is_empty()),
            key: lookup(ENV_HASH_KEY).map(Zeroizing::new),
            rounds: number(ENV_HASH_ROUNDS)?,
            memory_cost: number(ENV_HASH_MEMORY_COST)?,
            salt_separator: lookup(ENV_HASH_SALT_SEPARATOR),
            derived_key_length: number(ENV_HASH_DERIVED_KEY_LENGTH)?,
            block_size: number(ENV_HASH_BLOCK_SIZE)?,
            parallelization: number(ENV_HASH_PARALLELIZATION)?,
        })
    }

    /// Build the configured hash, or `None` when no algorithm is set
    pub fn build(&self) -> ImportResult<Option<Box<dyn UserImportHash>>> {
        let algorithm = match self.algorithm.as_deref() {
            Some(algorithm) => algorithm,
            None => return Ok(None),
        };

        let hash: Box<dyn UserImportHash> = match algorithm {
            "HMAC_SHA512" => Box::new(self.hmac(HmacAlgorithm::Sha512)),
            "HMAC_SHA256" => Box::new(self.hmac(HmacAlgorithm::Sha256)),
            "HMAC_SHA1" => Box::new(self.hmac(HmacAlgorithm::Sha1)),
            "HMAC_MD5" => Box::new(self.hmac(HmacAlgorithm::Md5)),
            "MD5" => Box::new(self.digest(DigestAlgorithm::Md5)),
            "SHA1" => Box::new(self.digest(DigestAlgorithm::Sha1)),
            "SHA256" => Box::new(self.digest(DigestAlgorithm::Sha256)),
            "SHA512" => Box::new(self.digest(DigestAlgorithm::Sha512)),
            "PBKDF_SHA1" => Box::new(self.digest(DigestAlgorithm::PbkdfSha1)),
            "PBKDF2_SHA256" => Box::new(self.digest(DigestAlgorithm::Pbkdf2Sha256)),
            "SCRYPT" => Box::new(self.scrypt()),
            "STANDARD_SCRYPT" => Box::new(self.standard_scrypt()),
            "BCRYPT" => Box::new(Bcrypt::new()),
            other => {
                return Err(UserImportError::config(format!(
                    "unsupported hash algorithm: {}",
                    other
                )))
            }
        };

        log::debug!("Resolved {} hash from settings", hash.hash_name());
        Ok(Some(hash))
    }

    pub fn into_options(self) -> ImportResult<UserImportOptions> {
        Ok(match self.build()? {
            Some(hash) => UserImportOptions::from(hash),
            None => UserImportOptions::new(),
        })
    }

    fn hmac(&self, algorithm: HmacAlgorithm) -> Hmac {
        let mut hash = Hmac::new(algorithm);
        if let Some(key) = &self.key {
            hash = hash.with_key(key.as_bytes());
        }
        hash
    }

    fn digest(&self, algorithm: DigestAlgorithm) -> RepeatableDigest {
        let mut hash = RepeatableDigest::new(algorithm);
        if let Some(rounds) = self.rounds {
            hash = hash.with_rounds(rounds);
        }
        hash
    }

    fn scrypt(&self) -> Scrypt {
        let mut hash = Scrypt::new();
        if let Some(key) = &self.key {
            hash = hash.with_key(key.as_bytes());
        }
        if let Some(rounds) = self.rounds {
            hash = hash.with_rounds(rounds);
        }
        if let Some(memory_cost) = self.memory_cost {
            hash = hash.with_memory_cost(memory_cost);
        }
        if let Some(salt_separator) = &self.salt_separator {
            hash = hash.with_salt_separator(salt_separator.as_bytes());
        }
        hash
    }

    fn standard_scrypt(&self) -> StandardScrypt {
        let mut hash = StandardScrypt::new();
        if let Some(derived_key_length) = self.derived_key_length {
            hash = hash.with_derived_key_length(derived_key_length);
        }
        if let Some(block_size) = self.block_size {
            hash = hash.with_block_size(block_size);
        }
        if let Some(parallelization) = self.parallelization {
            hash = hash.with_parallelization(parallelization);
        }
        if let Some(memory_cost) = self.memory_cost {
            hash = hash.with_memory_cost(memory_cost);
        }
        hash
    }
}

impl std::fmt::Debug for HashSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashSettings")
            .field("algorithm", &self.algorithm)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("rounds", &self.rounds)
            .field("memory_cost", &self.memory_cost)
            .field("salt_separator", &self.salt_separator)
            .field("derived_key_length", &self.derived_key_length)
            .field("block_size", &self.block_size)
            .field("parallelization", &self.parallelization)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> ImportResult<HashSettings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HashSettings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_no_algorithm() {
        let settings = settings(&[]).unwrap();
        assert!(settings.build().unwrap().is_none());
        assert!(settings.into_options().unwrap().hash().is_none());
    }

    #[test]
    fn test_scrypt_from_settings() {
        let settings = settings(&[
            (ENV_HASH_ALGORITHM, "scrypt"),
            (ENV_HASH_KEY, "key"),
            (ENV_HASH_ROUNDS, "8"),
            (ENV_HASH_MEMORY_COST, "14"),
            (ENV_HASH_SALT_SEPARATOR, "x"),
        ])
        .unwrap();
        let hash = settings.build().unwrap().unwrap();
        let options = hash.options().unwrap();
        assert_eq!(hash.hash_name(), "SCRYPT");
        assert_eq!(options["signerKey"], "a2V5");
        assert_eq!(options["saltSeparator"], "eA");
    }

    #[test]
    fn test_standard_scrypt_from_settings() {
        let settings = settings(&[
            (ENV_HASH_ALGORITHM, "STANDARD_SCRYPT"),
            (ENV_HASH_DERIVED_KEY_LENGTH, "64"),
            (ENV_HASH_BLOCK_SIZE, "8"),
            (ENV_HASH_PARALLELIZATION, "1"),
            (ENV_HASH_MEMORY_COST, "1024"),
        ])
        .unwrap();
        let options = settings.build().unwrap().unwrap().options().unwrap();
        assert_eq!(options["dkLen"], 64);
        assert_eq!(options["parallelization"], 1);
    }

    #[test]
    fn test_out_of_range_value_fails_on_read() {
        let settings = settings(&[(ENV_HASH_ALGORITHM, "SHA256"), (ENV_HASH_ROUNDS, "0")]).unwrap();
        let hash = settings.build().unwrap().unwrap();
        assert!(matches!(hash.options(), Err(UserImportError::OutOfRange(_))));
    }

    #[test]
    fn test_invalid_settings() {
        assert!(matches!(
            settings(&[(ENV_HASH_ROUNDS, "many")]),
            Err(UserImportError::Config(_))
        ));

        let unknown = settings(&[(ENV_HASH_ALGORITHM, "ROT13")]).unwrap();
        assert!(matches!(unknown.build(), Err(UserImportError::Config(_))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let settings = settings(&[(ENV_HASH_KEY, "super-secret")]).unwrap();
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }
}
