//! Bulk user import
//!
//! Per-user records, import options, the assembled request, and the parsed
//! service result.

pub mod import_user_record;
pub mod user_import_options;
pub mod user_import_request;
pub mod user_import_result;

// Re-export all public items from submodules
pub use import_user_record::*;
pub use user_import_options::*;
pub use user_import_request::*;
pub use user_import_result::*;
