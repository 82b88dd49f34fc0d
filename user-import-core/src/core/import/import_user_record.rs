use crate::domain::entities::{UserMetadata, UserProvider};
use crate::shared::constants::CUSTOM_ATTRIBUTES;
use crate::shared::types::{CustomClaims, ImportResult, Uid, UserProperties};
use crate::shared::utils::{
    base64url_encode, validate_custom_claims, validate_email, validate_phone_number,
    validate_photo_url, validate_uid,
};
use serde_json::Value;

/// A user account to be imported. Must contain at least a uid.
#[derive(Debug, Clone, Default)]
pub struct ImportUserRecordArgs {
    pub uid: Uid,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub display_name: Option<String>,
    pub phone_number: Option<String>,
    pub photo_url: Option<String>,
    pub disabled: Option<bool>,
    pub user_metadata: Option<UserMetadata>,
    pub password_hash: Option<Vec<u8>>,
    pub password_salt: Option<Vec<u8>>,
    pub user_providers: Vec<UserProvider>,
    pub custom_claims: CustomClaims,
}

impl ImportUserRecordArgs {
    pub fn new(uid: impl Into<Uid>) -> Self {
        Self {
            uid: uid.into(),
            ..Default::default()
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn email_verified(mut self, email_verified: bool) -> Self {
        self.email_verified = Some(email_verified);
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn user_metadata(mut self, user_metadata: UserMetadata) -> Self {
        self.user_metadata = Some(user_metadata);
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<Vec<u8>>) -> Self {
        self.password_hash = Some(password_hash.into());
        self
    }

    pub fn password_salt(mut self, password_salt: impl Into<Vec<u8>>) -> Self {
        self.password_salt = Some(password_salt.into());
        self
    }

    pub fn user_provider(mut self, provider: UserProvider) -> Self {
        self.user_providers.push(provider);
        self
    }

    pub fn custom_claims(mut self, claims: CustomClaims) -> Self {
        self.custom_claims = claims;
        self
    }

    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Validate the record and produce its wire properties.
    ///
    /// Absent optional fields are left out of the map entirely.
    pub fn properties(&self) -> ImportResult<UserProperties> {
        let mut properties = UserProperties::new();

        validate_uid(&self.uid)?;
        properties.insert("localId".to_string(), Value::from(self.uid.as_str()));

        if let Some(email) = non_empty(&self.email) {
            validate_email(email)?;
            properties.insert("email".to_string(), Value::from(email));
        }

        if let Some(photo_url) = non_empty(&self.photo_url) {
            validate_photo_url(photo_url)?;
            properties.insert("photoUrl".to_string(), Value::from(photo_url));
        }

        if let Some(phone_number) = non_empty(&self.phone_number) {
            validate_phone_number(phone_number)?;
            properties.insert("phoneNumber".to_string(), Value::from(phone_number));
        }

        if let Some(display_name) = non_empty(&self.display_name) {
            properties.insert("displayName".to_string(), Value::from(display_name));
        }

        if let Some(metadata) = &self.user_metadata {
            if let Some(created_at) = metadata.creation_timestamp {
                properties.insert("createdAt".to_string(), Value::from(created_at));
            }
            if let Some(last_login_at) = metadata.last_sign_in_timestamp {
                properties.insert("lastLoginAt".to_string(), Value::from(last_login_at));
            }
        }

        if let Some(password_hash) = &self.password_hash {
            properties.insert(
                "passwordHash".to_string(),
                Value::from(base64url_encode(password_hash)),
            );
        }

        if let Some(password_salt) = &self.password_salt {
            properties.insert("salt".to_string(), Value::from(base64url_encode(password_salt)));
        }

        if !self.user_providers.is_empty() {
            properties.insert(
                "providerUserInfo".to_string(),
                serde_json::to_value(&self.user_providers)?,
            );
        }

        if !self.custom_claims.is_empty() {
            validate_custom_claims(&self.custom_claims)?;
            properties.insert(
                CUSTOM_ATTRIBUTES.to_string(),
                Value::Object(self.custom_claims.clone()),
            );
        }

        if let Some(email_verified) = self.email_verified {
            properties.insert("emailVerified".to_string(), Value::from(email_verified));
        }

        if let Some(disabled) = self.disabled {
            properties.insert("disabled".to_string(), Value::from(disabled));
        }

        Ok(properties)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
