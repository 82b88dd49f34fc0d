use super::UserImportHash;
use crate::shared::types::{HashOptions, ImportResult};

/// Bcrypt. Parameters are embedded in each password hash, so there are no options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bcrypt;

impl Bcrypt {
    pub fn new() -> Self {
        Self
    }
}

impl UserImportHash for Bcrypt {
    fn hash_name(&self) -> &'static str {
        "BCRYPT"
    }

    fn options(&self) -> ImportResult<HashOptions> {
        Ok(HashOptions::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_properties() {
        let properties = Bcrypt::new().properties().unwrap();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties["algorithm"], "BCRYPT");
    }
}
