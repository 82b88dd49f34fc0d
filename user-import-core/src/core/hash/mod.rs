//! Password hash configurations for user import
//!
//! Each algorithm describes how the service should verify the password hashes
//! carried by imported users. Parameters are validated when the options are
//! read, not when they are set.

pub mod signer_key;
pub mod rounds;
pub mod hmac;
pub mod repeatable_digest;
pub mod scrypt;
pub mod standard_scrypt;
pub mod bcrypt;

// Re-export all public items from submodules
pub use signer_key::*;
pub use rounds::*;
pub use hmac::*;
pub use repeatable_digest::*;
pub use scrypt::*;
pub use standard_scrypt::*;
pub use bcrypt::*;

use crate::shared::constants::HASH_ALGORITHM_FIELD;
use crate::shared::types::{HashOptions, ImportResult};
use serde_json::Value;

/// Password hash algorithm used by imported users
pub trait UserImportHash: std::fmt::Debug + Send + Sync {
    /// Algorithm name understood by the service
    fn hash_name(&self) -> &'static str;

    /// Algorithm parameters, failing if any is missing or out of range
    fn options(&self) -> ImportResult<HashOptions>;

    /// Options merged with the algorithm name
    fn properties(&self) -> ImportResult<HashOptions> {
        let mut properties = self.options()?;
        properties.insert(
            HASH_ALGORITHM_FIELD.to_string(),
            Value::from(self.hash_name()),
        );
        Ok(properties)
    }
}
