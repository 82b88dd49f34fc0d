use crate::shared::error::UserImportError;
use crate::shared::types::{HashOptions, ImportResult};
use serde_json::Value;

/// Repetition count bounded by an algorithm-specific closed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounds {
    value: Option<i32>,
    min: i32,
    max: i32,
}

impl Rounds {
    pub const fn bounded(min: i32, max: i32) -> Self {
        Self { value: None, min, max }
    }

    pub fn set(&mut self, rounds: i32) {
        self.value = Some(rounds);
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Validated rounds value
    pub fn value(&self) -> ImportResult<i32> {
        let rounds = self
            .value
            .ok_or_else(|| UserImportError::missing_field("rounds must be initialized"))?;

        if rounds < self.min || rounds > self.max {
            return Err(UserImportError::out_of_range(format!(
                "rounds value must be between {} and {} (inclusive)",
                self.min, self.max
            )));
        }

        Ok(rounds)
    }

    pub fn options(&self) -> ImportResult<HashOptions> {
        let mut options = HashOptions::new();
        options.insert("rounds".to_string(), Value::from(self.value()?));
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unset_rounds_fails_on_read() {
        let rounds = Rounds::bounded(0, 8);
        assert!(matches!(rounds.value(), Err(UserImportError::MissingField(_))));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut rounds = Rounds::bounded(0, 8);
        assert_eq!((rounds.min(), rounds.max()), (0, 8));
        rounds.set(rounds.min());
        assert_eq!(rounds.value().unwrap(), 0);
        rounds.set(rounds.max());
        assert_eq!(rounds.options().unwrap()["rounds"], 8);
    }

    proptest! {
        #[test]
        fn prop_rounds_range(value in -100i32..200) {
            let mut rounds = Rounds::bounded(1, 100);
            rounds.set(value);
            if (1..=100).contains(&value) {
                prop_assert_eq!(rounds.value().unwrap(), value);
            } else {
                prop_assert!(matches!(rounds.value(), Err(UserImportError::OutOfRange(_))));
            }
        }
    }
}
