use super::{Rounds, SignerKey, UserImportHash};
use crate::shared::error::UserImportError;
use crate::shared::types::{HashOptions, ImportResult};
use crate::shared::utils::base64url_encode;
use serde_json::Value;

const MIN_ROUNDS: i32 = 0;
const MAX_ROUNDS: i32 = 8;
const MIN_MEMORY_COST: i32 = 1;
const MAX_MEMORY_COST: i32 = 14;

/// The modified Scrypt algorithm used by the identity service.
///
/// See [`StandardScrypt`](super::StandardScrypt) for the standard algorithm.
/// Requires a signing key, rounds in `[0, 8]` and a memory cost in `[1, 14]`.
/// The salt separator defaults to an empty byte sequence.
#[derive(Debug, Clone)]
pub struct Scrypt {
    key: SignerKey,
    rounds: Rounds,
    memory_cost: Option<i32>,
    salt_separator: Option<Vec<u8>>,
}

impl Default for Scrypt {
    fn default() -> Self {
        Self {
            key: SignerKey::new(),
            rounds: Rounds::bounded(MIN_ROUNDS, MAX_ROUNDS),
            memory_cost: None,
            salt_separator: None,
        }
    }
}

impl Scrypt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: impl AsRef<[u8]>) -> Self {
        self.key.set(key);
        self
    }

    pub fn with_rounds(mut self, rounds: i32) -> Self {
        self.rounds.set(rounds);
        self
    }

    pub fn with_memory_cost(mut self, memory_cost: i32) -> Self {
        self.memory_cost = Some(memory_cost);
        self
    }

    pub fn with_salt_separator(mut self, salt_separator: impl Into<Vec<u8>>) -> Self {
        self.salt_separator = Some(salt_separator.into());
        self
    }

    fn memory_cost(&self) -> ImportResult<i32> {
        let memory_cost = self
            .memory_cost
            .ok_or_else(|| UserImportError::missing_field("memory cost must be set"))?;

        if !(MIN_MEMORY_COST..=MAX_MEMORY_COST).contains(&memory_cost) {
            return Err(UserImportError::out_of_range(format!(
                "memory cost must be between {} and {} (inclusive)",
                MIN_MEMORY_COST, MAX_MEMORY_COST
            )));
        }

        Ok(memory_cost)
    }

    fn salt_separator(&self) -> String {
        base64url_encode(self.salt_separator.as_deref().unwrap_or_default())
    }
}

impl UserImportHash for Scrypt {
    fn hash_name(&self) -> &'static str {
        "SCRYPT"
    }

    fn options(&self) -> ImportResult<HashOptions> {
        let mut options = self.key.options()?;
        options.extend(self.rounds.options()?);
        options.insert("memoryCost".to_string(), Value::from(self.memory_cost()?));
        options.insert("saltSeparator".to_string(), Value::from(self.salt_separator()));
        Ok(options)
    }
}
