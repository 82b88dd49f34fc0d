use super::UserImportHash;
use crate::shared::error::UserImportError;
use crate::shared::types::{HashOptions, ImportResult};
use serde_json::Value;

/// The standard Scrypt algorithm.
///
/// All four parameters are required and must be non-negative.
#[derive(Debug, Clone, Default)]
pub struct StandardScrypt {
    derived_key_length: Option<i32>,
    block_size: Option<i32>,
    parallelization: Option<i32>,
    memory_cost: Option<i32>,
}

impl StandardScrypt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_derived_key_length(mut self, derived_key_length: i32) -> Self {
        self.derived_key_length = Some(derived_key_length);
        self
    }

    pub fn with_block_size(mut self, block_size: i32) -> Self {
        self.block_size = Some(block_size);
        self
    }

    pub fn with_parallelization(mut self, parallelization: i32) -> Self {
        self.parallelization = Some(parallelization);
        self
    }

    pub fn with_memory_cost(mut self, memory_cost: i32) -> Self {
        self.memory_cost = Some(memory_cost);
        self
    }
}

fn required_non_negative(value: Option<i32>, name: &str) -> ImportResult<i32> {
    match value {
        None => Err(UserImportError::missing_field(format!("{} must be initialized", name))),
        Some(v) if v < 0 => Err(UserImportError::out_of_range(format!(
            "{} must be non-negative",
            name
        ))),
        Some(v) => Ok(v),
    }
}

impl UserImportHash for StandardScrypt {
    fn hash_name(&self) -> &'static str {
        "STANDARD_SCRYPT"
    }

    fn options(&self) -> ImportResult<HashOptions> {
        let mut options = HashOptions::new();
        options.insert(
            "dkLen".to_string(),
            Value::from(required_non_negative(self.derived_key_length, "derived key length")?),
        );
        options.insert(
            "blockSize".to_string(),
            Value::from(required_non_negative(self.block_size, "block size")?),
        );
        options.insert(
            "parallelization".to_string(),
            Value::from(required_non_negative(self.parallelization, "parallelization")?),
        );
        options.insert(
            "memoryCost".to_string(),
            Value::from(required_non_negative(self.memory_cost, "memory cost")?),
        );
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> StandardScrypt {
        StandardScrypt::new()
            .with_derived_key_length(64)
            .with_block_size(8)
            .with_parallelization(2)
            .with_memory_cost(1024)
    }

    #[test]
    fn test_standard_scrypt_options() {
        let hash = valid();
        let options = hash.options().unwrap();
        assert_eq!(hash.hash_name(), "STANDARD_SCRYPT");
        assert_eq!(options.len(), 4);
        assert_eq!(options["dkLen"], 64);
        assert_eq!(options["blockSize"], 8);
        assert_eq!(options["parallelization"], 2);
        assert_eq!(options["memoryCost"], 1024);
    }

    #[test]
    fn test_zero_is_allowed() {
        let hash = StandardScrypt::new()
            .with_derived_key_length(0)
            .with_block_size(0)
            .with_parallelization(0)
            .with_memory_cost(0);
        assert!(hash.options().is_ok());
    }

    #[test]
    fn test_each_parameter_is_required() {
        let missing = [
            StandardScrypt { derived_key_length: None, ..valid() },
            StandardScrypt { block_size: None, ..valid() },
            StandardScrypt { parallelization: None, ..valid() },
            StandardScrypt { memory_cost: None, ..valid() },
        ];
        for hash in missing.iter() {
            assert!(matches!(hash.options(), Err(UserImportError::MissingField(_))));
        }
    }

    #[test]
    fn test_negative_values() {
        assert!(matches!(
            valid().with_block_size(-1).options(),
            Err(UserImportError::OutOfRange(_))
        ));
        assert!(valid().with_memory_cost(-8).options().is_err());
    }
}
