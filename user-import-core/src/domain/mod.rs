//! Domain layer - value objects carried by imported users

pub mod entities;

// Re-export domain components
pub use entities::*;
