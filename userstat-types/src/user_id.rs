use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Length of `i64::MAX`; longer ids can never fit.
const MAX_DIGITS: usize = 19;

/// A validated user identifier: ASCII decimal digits whose value fits an `i64`.
///
/// Kept as a string so ids round-trip unchanged (leading zeros included).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate `raw` as a user id.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if `raw` is empty, contains anything other
    /// than ASCII digits, or exceeds `i64::MAX`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::new(raw, "user id is empty"));
        }
        if raw.len() > MAX_DIGITS {
            return Err(ValidationError::new(raw, "user id is too long"));
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::new(raw, "user id must be decimal digits"));
        }
        if raw.parse::<i64>().is_err() {
            return Err(ValidationError::new(raw, "user id is out of range"));
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}
