//! Core import functionality
//!
//! Password hash configurations, per-user records, request assembly, and the
//! environment-driven hash settings.

pub mod hash;
pub mod import;
pub mod config;
