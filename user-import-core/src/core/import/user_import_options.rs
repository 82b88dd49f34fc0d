use crate::core::hash::UserImportHash;
use crate::shared::types::{HashOptions, ImportResult};

/// Options for a user import call
#[derive(Debug, Default)]
pub struct UserImportOptions {
    hash: Option<Box<dyn UserImportHash>>,
}

impl UserImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hash(hash: impl UserImportHash + 'static) -> Self {
        Self {
            hash: Some(Box::new(hash)),
        }
    }

    pub fn hash(&self) -> Option<&dyn UserImportHash> {
        self.hash.as_deref()
    }

    /// Hash options plus algorithm name, or `None` if no hash is configured
    pub fn hash_properties(&self) -> ImportResult<Option<HashOptions>> {
        self.hash.as_ref().map(|hash| hash.properties()).transpose()
    }
}

impl From<Box<dyn UserImportHash>> for UserImportOptions {
    fn from(hash: Box<dyn UserImportHash>) -> Self {
        Self { hash: Some(hash) }
    }
}
