//! Utility functions for user import
//!
//! Field validators and the URL-safe base64 transform used on the wire.

use crate::shared::constants::{MAX_CLAIMS_PAYLOAD_SIZE, MAX_UID_LENGTH, RESERVED_CLAIMS};
use crate::shared::error::UserImportError;
use crate::shared::types::{CustomClaims, ImportResult};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap();
    static ref PHONE_NUMBER_PATTERN: Regex = Regex::new(r"^\+.*[0-9A-Za-z]").unwrap();
    static ref URL_PATTERN: Regex =
        Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+[^\s]*$").unwrap();
}

/// Encode bytes as URL-safe base64 without padding
pub fn base64url_encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode URL-safe base64, with or without trailing padding
pub fn base64url_decode(encoded: &str) -> ImportResult<Vec<u8>> {
    Ok(URL_SAFE_NO_PAD.decode(encoded.trim_end_matches('='))?)
}

/// Validate a user uid
pub fn validate_uid(uid: &str) -> Result<(), UserImportError> {
    if uid.is_empty() {
        return Err(UserImportError::missing_field("uid must not be empty"));
    }

    if uid.chars().count() > MAX_UID_LENGTH {
        return Err(UserImportError::invalid_argument(format!(
            "uid must not be longer than {} characters",
            MAX_UID_LENGTH
        )));
    }

    Ok(())
}

/// Validate email address format
pub fn validate_email(email: &str) -> Result<(), UserImportError> {
    if email.is_empty() {
        return Err(UserImportError::missing_field("email must not be empty"));
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserImportError::invalid_argument(format!(
            "malformed email address string: {}",
            email
        )));
    }

    Ok(())
}

/// Validate phone number format
pub fn validate_phone_number(phone_number: &str) -> Result<(), UserImportError> {
    if phone_number.is_empty() {
        return Err(UserImportError::missing_field("phone number must not be empty"));
    }

    if !PHONE_NUMBER_PATTERN.is_match(phone_number) {
        return Err(UserImportError::invalid_argument(
            "phone number must be a valid, E.164 compliant identifier starting with a '+' sign",
        ));
    }

    Ok(())
}

/// Validate photo URL format
pub fn validate_photo_url(url: &str) -> Result<(), UserImportError> {
    if url.is_empty() {
        return Err(UserImportError::missing_field("photo url must not be empty"));
    }

    if !URL_PATTERN.is_match(url) {
        return Err(UserImportError::invalid_argument(format!(
            "malformed photo url string: {}",
            url
        )));
    }

    Ok(())
}

/// Validate developer claims against the reserved names and the payload limit
pub fn validate_custom_claims(claims: &CustomClaims) -> Result<(), UserImportError> {
    for key in claims.keys() {
        if key.is_empty() {
            return Err(UserImportError::invalid_argument("claim names must not be empty"));
        }

        if RESERVED_CLAIMS.contains(&key.as_str()) {
            return Err(UserImportError::reserved_claim(format!(
                "claim \"{}\" is reserved and must not be set",
                key
            )));
        }
    }

    let serialized = serde_json::to_string(claims)?;
    if serialized.chars().count() > MAX_CLAIMS_PAYLOAD_SIZE {
        return Err(UserImportError::invalid_argument(format!(
            "claims payload must not exceed {} characters",
            MAX_CLAIMS_PAYLOAD_SIZE
        )));
    }

    Ok(())
}
