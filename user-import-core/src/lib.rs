//! User Import Core
//!
//! Prepares bulk "import users" requests for the identity service admin API.
//! Validates user records, encodes password material, and attaches the
//! password hash configuration the service needs to verify imported hashes.
//!
//! ## Architecture
//!
//! - **Core**: hash configurations, import records, request assembly, settings
//! - **Domain**: provider and metadata value objects
//! - **Shared**: common types, constants, validators, and errors
//!
//! ## Usage
//!
//! ```rust
//! use user_import_core::{Hmac, ImportUserRecordArgs, UserImportOptions, UserImportRequest};
//!
//! let users = vec![
//!     ImportUserRecordArgs::new("user1")
//!         .email("user1@example.com")
//!         .password_hash(b"password-hash".to_vec()),
//! ];
//! let options = UserImportOptions::with_hash(Hmac::sha256().with_key("secret"));
//!
//! let request = UserImportRequest::new(&users, &options)?;
//! assert_eq!(request.users_count(), 1);
//! let payload = request.to_json()?;
//! # Ok::<(), user_import_core::UserImportError>(())
//! ```

pub mod core;
pub mod domain;
pub mod shared;

// Re-export main types and traits
pub use crate::core::config::HashSettings;
pub use crate::core::hash::{
    Bcrypt, DigestAlgorithm, Hmac, HmacAlgorithm, RepeatableDigest, Rounds, Scrypt, SignerKey,
    StandardScrypt, UserImportHash,
};
pub use crate::core::import::{
    ErrorInfo, ImportUserRecordArgs, UserImportOptions, UserImportRequest, UserImportResult,
};

// Re-export domain entities
pub use crate::domain::{UserMetadata, UserProvider};

// Re-export shared types
pub use shared::error::UserImportError;
pub use shared::types::{CustomClaims, HashOptions, ImportResult, UserProperties};
pub use shared::utils::{base64url_decode, base64url_encode};

// Initialize logging
pub fn init() {
    let _ = env_logger::try_init();
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "user-import-core");
    }

    #[test]
    fn test_end_to_end_payload() {
        let users = vec![
            ImportUserRecordArgs::new("user1").password_hash(b"hash".to_vec()),
            ImportUserRecordArgs::new("user2").email("user2@example.com"),
        ];
        let options = UserImportOptions::with_hash(RepeatableDigest::pbkdf2_sha256().with_rounds(1000));
        let request = UserImportRequest::new(&users, &options).unwrap();

        let value: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
        assert_eq!(value["algorithm"], "PBKDF2_SHA256");
        assert_eq!(value["rounds"], 1000);
        assert_eq!(value["users"].as_array().unwrap().len(), 2);
        assert_eq!(value["users"][1]["email"], "user2@example.com");
    }
}
