//! Account timestamps for an imported user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation and last sign-in times, in milliseconds since the epoch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    pub creation_timestamp: Option<i64>,
    pub last_sign_in_timestamp: Option<i64>,
}

impl UserMetadata {
    pub fn new(creation_timestamp: Option<i64>, last_sign_in_timestamp: Option<i64>) -> Self {
        Self {
            creation_timestamp,
            last_sign_in_timestamp,
        }
    }

    pub fn with_creation_time(mut self, time: DateTime<Utc>) -> Self {
        self.creation_timestamp = Some(time.timestamp_millis());
        self
    }

    pub fn with_last_sign_in_time(mut self, time: DateTime<Utc>) -> Self {
        self.last_sign_in_timestamp = Some(time.timestamp_millis());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_from_datetime() {
        let created = DateTime::from_timestamp(1_600_000_000, 0).unwrap();
        let metadata = UserMetadata::default().with_creation_time(created);
        assert_eq!(metadata.creation_timestamp, Some(1_600_000_000_000));
        assert_eq!(metadata.last_sign_in_timestamp, None);
    }
}
