//! Identity provider linked to an imported user

use serde::{Deserialize, Serialize};

/// A user identity provider that can be associated with an imported user.
/// Carried to the wire as-is; the service validates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProvider {
    #[serde(rename = "rawId")]
    pub uid: String,
    pub provider_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl UserProvider {
    pub fn new(uid: impl Into<String>, provider_id: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            provider_id: provider_id.into(),
            ..Default::default()
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_provider_wire_format() {
        let provider = UserProvider::new("google-uid", "google.com")
            .with_display_name("Jane")
            .with_email("jane@example.com");
        let value = serde_json::to_value(&provider).unwrap();
        assert_eq!(
            value,
            json!({
                "rawId": "google-uid",
                "providerId": "google.com",
                "displayName": "Jane",
                "email": "jane@example.com",
            })
        );
    }
}
