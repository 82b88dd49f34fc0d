use super::{ImportUserRecordArgs, UserImportOptions};
use crate::shared::constants::MAX_IMPORT_USERS;
use crate::shared::error::UserImportError;
use crate::shared::types::{HashOptions, ImportResult, UserProperties};
use serde::Serialize;

/// A validated user import payload.
///
/// Hashing properties sit at the root of the serialized object next to
/// `users`, and only when at least one user carries a password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserImportRequest {
    users: Vec<UserProperties>,
    #[serde(flatten)]
    hashing_properties: HashOptions,
}

impl UserImportRequest {
    /// Validate every user and assemble the request.
    ///
    /// Fails on an empty batch, more than 1000 users, any invalid user, or
    /// password hashes without a hash configuration.
    pub fn new(users: &[ImportUserRecordArgs], options: &UserImportOptions) -> ImportResult<Self> {
        if users.is_empty() {
            return Err(UserImportError::batch_size("users must not be empty"));
        }

        if users.len() > MAX_IMPORT_USERS {
            return Err(UserImportError::batch_size(format!(
                "users list must not contain more than {} items",
                MAX_IMPORT_USERS
            )));
        }

        let has_password = users.iter().any(ImportUserRecordArgs::has_password);
        log::debug!(
            "Assembling import request for {} users (passwords: {})",
            users.len(),
            has_password
        );

        let users = users
            .iter()
            .enumerate()
            .map(|(index, user)| {
                user.properties().map_err(|e| {
                    log::warn!("Rejected user at index {}: {}", index, e);
                    e
                })
            })
            .collect::<ImportResult<Vec<_>>>()?;

        let mut hashing_properties = HashOptions::new();
        if has_password {
            hashing_properties = options.hash_properties()?.ok_or_else(|| {
                UserImportError::missing_hash(
                    "a hash option is required when at least one user has a password; \
                     provide one with UserImportOptions::with_hash()",
                )
            })?;
            if let Some(hash) = options.hash() {
                log::debug!("Using {} password hash", hash.hash_name());
            }
        }

        Ok(Self {
            users,
            hashing_properties,
        })
    }

    pub fn users_count(&self) -> usize {
        self.users.len()
    }

    pub fn users(&self) -> &[UserProperties] {
        &self.users
    }

    pub fn hashing_properties(&self) -> &HashOptions {
        &self.hashing_properties
    }

    pub fn to_json(&self) -> ImportResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::{Hmac, Scrypt, StandardScrypt, UserImportHash};
    use serde_json::{json, Value};

    fn users(count: usize) -> Vec<ImportUserRecordArgs> {
        (0..count)
            .map(|i| ImportUserRecordArgs::new(format!("user{}", i)))
            .collect()
    }

    #[test]
    fn test_single_user_without_password() {
        let request = UserImportRequest::new(&users(1), &UserImportOptions::new()).unwrap();
        assert_eq!(request.users_count(), 1);
        assert!(request.hashing_properties().is_empty());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"users": [{"localId": "user0"}]})
        );
    }

    #[test]
    fn test_hash_is_ignored_without_passwords() {
        let options = UserImportOptions::with_hash(Hmac::sha256().with_key("key"));
        let request = UserImportRequest::new(&users(2), &options).unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
        assert!(value.get("algorithm").is_none());
    }

    #[test]
    fn test_unused_invalid_hash_is_not_read() {
        let options = UserImportOptions::with_hash(Scrypt::new());
        assert!(UserImportRequest::new(&users(1), &options).is_ok());
    }

    #[test]
    fn test_password_requires_hash() {
        let batch = vec![
            ImportUserRecordArgs::new("user0"),
            ImportUserRecordArgs::new("user1").password_hash("hash"),
        ];
        let result = UserImportRequest::new(&batch, &UserImportOptions::new());
        assert!(matches!(result, Err(UserImportError::MissingHash(_))));
    }

    #[test]
    fn test_password_with_hash() {
        let hash = Scrypt::new()
            .with_key("key")
            .with_rounds(8)
            .with_memory_cost(14)
            .with_salt_separator("x");
        let expected = hash.options().unwrap();
        let batch = vec![ImportUserRecordArgs::new("user1")
            .password_hash("hash")
            .password_salt("salt")];

        let request = UserImportRequest::new(&batch, &UserImportOptions::with_hash(hash)).unwrap();
        let value = serde_json::to_value(&request).unwrap();
        let root = value.as_object().unwrap();

        assert_eq!(root["algorithm"], "SCRYPT");
        for (key, option) in expected.iter() {
            assert_eq!(&root[key], option);
        }
        assert_eq!(root.len(), expected.len() + 2);
        assert_eq!(value["users"][0]["passwordHash"], "aGFzaA");
        assert!(value["users"][0].get("algorithm").is_none());
    }

    #[test]
    fn test_invalid_hash_with_password() {
        let batch = vec![ImportUserRecordArgs::new("user1").password_hash("hash")];
        let options = UserImportOptions::with_hash(StandardScrypt::new().with_block_size(8));
        let result = UserImportRequest::new(&batch, &options);
        assert!(matches!(result, Err(UserImportError::MissingField(_))));
    }

    #[test]
    fn test_batch_size_limits() {
        let empty = UserImportRequest::new(&[], &UserImportOptions::new());
        assert!(matches!(empty, Err(UserImportError::BatchSize(_))));

        let max = UserImportRequest::new(&users(1000), &UserImportOptions::new()).unwrap();
        assert_eq!(max.users_count(), 1000);

        let over = UserImportRequest::new(&users(1001), &UserImportOptions::new());
        assert!(matches!(over, Err(UserImportError::BatchSize(_))));
    }

    #[test]
    fn test_one_invalid_user_aborts_batch() {
        let mut batch = users(3);
        batch[1].email = Some("not-an-email".to_string());
        let result = UserImportRequest::new(&batch, &UserImportOptions::new());
        assert!(matches!(result, Err(UserImportError::InvalidArgument(_))));
    }

    #[test]
    fn test_to_json() {
        let request = UserImportRequest::new(&users(1), &UserImportOptions::new()).unwrap();
        let parsed: Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
        assert_eq!(parsed["users"][0]["localId"], "user0");
    }
}
