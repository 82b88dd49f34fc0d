use crate::shared::error::UserImportError;
use crate::shared::types::ImportResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An error reported by the service for one imported user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Position of the failed user in the submitted list
    pub index: usize,
    #[serde(rename = "message")]
    pub reason: String,
}

impl ErrorInfo {
    pub fn new(index: usize, reason: impl Into<String>) -> Self {
        Self {
            index,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadAccountResponse {
    #[serde(default)]
    error: Vec<ErrorInfo>,
}

/// Outcome of a user import call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserImportResult {
    success_count: usize,
    errors: Vec<ErrorInfo>,
}

impl UserImportResult {
    pub fn new(users_count: usize, errors: Vec<ErrorInfo>) -> ImportResult<Self> {
        if errors.len() > users_count {
            return Err(UserImportError::invalid_argument(format!(
                "{} errors reported for {} users",
                errors.len(),
                users_count
            )));
        }

        if let Some(error) = errors.iter().find(|e| e.index >= users_count) {
            return Err(UserImportError::invalid_argument(format!(
                "error index {} is outside the {} submitted users",
                error.index, users_count
            )));
        }

        let mut seen = HashSet::new();
        if let Some(error) = errors.iter().find(|e| !seen.insert(e.index)) {
            return Err(UserImportError::invalid_argument(format!(
                "error index {} is reported more than once",
                error.index
            )));
        }

        Ok(Self {
            success_count: users_count - errors.len(),
            errors,
        })
    }

    /// Parse the service response for a request of `users_count` users
    pub fn from_response(users_count: usize, body: &str) -> ImportResult<Self> {
        let response: UploadAccountResponse = serde_json::from_str(body)?;
        if !response.error.is_empty() {
            log::info!(
                "User import finished with {} failures out of {}",
                response.error.len(),
                users_count
            );
        }
        Self::new(users_count, response.error)
    }

    pub fn success_count(&self) -> usize {
        self.success_count
    }

    pub fn failure_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ErrorInfo] {
        &self.errors
    }
}
