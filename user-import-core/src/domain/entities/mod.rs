//! Domain entities and value objects
//!
//! This module contains the value objects attached to imported users.

pub mod user_provider;
pub mod user_metadata;

// Re-export entities
pub use user_provider::*;
pub use user_metadata::*;
