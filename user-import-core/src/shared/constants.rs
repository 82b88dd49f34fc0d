//! Constants for user import
//!
//! This module contains platform limits and wire field names.

// Batch limits
pub const MAX_IMPORT_USERS: usize = 1000;

// User field limits
pub const MAX_UID_LENGTH: usize = 128;
pub const MAX_CLAIMS_PAYLOAD_SIZE: usize = 1000;

// Wire field names
pub const CUSTOM_ATTRIBUTES: &str = "customAttributes";
pub const HASH_ALGORITHM_FIELD: &str = "algorithm";

// Claim names reserved by the token issuer
pub const RESERVED_CLAIMS: &[&str] = &[
    "acr",
    "amr",
    "at_hash",
    "aud",
    "auth_time",
    "azp",
    "cnf",
    "c_hash",
    "exp",
    "firebase",
    "iat",
    "iss",
    "jti",
    "nbf",
    "nonce",
    "sub",
];

// Environment configuration keys
pub const ENV_HASH_ALGORITHM: &str = "USER_IMPORT_HASH_ALGORITHM";
pub const ENV_HASH_KEY: &str = "USER_IMPORT_HASH_KEY";
pub const ENV_HASH_ROUNDS: &str = "USER_IMPORT_HASH_ROUNDS";
pub const ENV_HASH_MEMORY_COST: &str = "USER_IMPORT_HASH_MEMORY_COST";
pub const ENV_HASH_SALT_SEPARATOR: &str = "USER_IMPORT_HASH_SALT_SEPARATOR";
pub const ENV_HASH_DERIVED_KEY_LENGTH: &str = "USER_IMPORT_HASH_DERIVED_KEY_LENGTH";
pub const ENV_HASH_BLOCK_SIZE: &str = "USER_IMPORT_HASH_BLOCK_SIZE";
pub const ENV_HASH_PARALLELIZATION: &str = "USER_IMPORT_HASH_PARALLELIZATION";
