use serde_json::{Map, Value};

// Basic types for import payloads
pub type Uid = String;
pub type HashOptions = Map<String, Value>;
pub type UserProperties = Map<String, Value>;
pub type CustomClaims = Map<String, Value>;

// Result type for import operations
pub type ImportResult<T> = Result<T, crate::shared::error::UserImportError>;
