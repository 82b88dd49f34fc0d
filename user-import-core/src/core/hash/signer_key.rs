use crate::shared::error::UserImportError;
use crate::shared::types::{HashOptions, ImportResult};
use crate::shared::utils::base64url_encode;
use serde_json::Value;
use zeroize::Zeroizing;

/// Signing key held by keyed hash algorithms.
///
/// The key is encoded to URL-safe base64 when set. An empty or missing key is
/// only reported when the options are read.
#[derive(Clone, Default)]
pub struct SignerKey {
    encoded: Option<Zeroizing<String>>,
}

impl SignerKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl AsRef<[u8]>) {
        self.encoded = Some(Zeroizing::new(base64url_encode(key.as_ref())));
    }

    pub fn is_set(&self) -> bool {
        self.encoded.is_some()
    }

    /// Encoded key, or an error if it was never set or is empty
    pub fn encoded(&self) -> ImportResult<&str> {
        match self.encoded.as_deref() {
            None => Err(UserImportError::missing_field("key must be initialized")),
            Some(key) if key.is_empty() => {
                Err(UserImportError::missing_field("key must not be empty"))
            }
            Some(key) => Ok(key.as_str()),
        }
    }

    pub fn options(&self) -> ImportResult<HashOptions> {
        let mut options = HashOptions::new();
        options.insert("signerKey".to_string(), Value::from(self.encoded()?));
        Ok(options)
    }
}

impl std::fmt::Debug for SignerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignerKey")
            .field("set", &self.is_set())
            .finish()
    }
}
