//! Validated email address value object

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

// local-part@domain.tld, where the final label is at least two letters
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

/// A validated, immutable email address.
///
/// There is no way to obtain an `Email` that fails validation: construction,
/// `TryFrom`, `FromStr`, and deserialization all go through [`Email::new`].
///
/// # Example
///
/// ```
/// use studygroup_domain::Email;
///
/// let email = Email::new("alice@example.com").unwrap();
/// assert_eq!(email.as_str(), "alice@example.com");
/// assert!(Email::new("bad-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new validated email address.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEmailFormat` if the value is not of the
    /// form `local-part@domain.tld`.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !EMAIL_RE.is_match(&value) {
            return Err(DomainError::invalid_email(value));
        }
        Ok(Self(value))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl std::str::FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> String {
        email.0
    }
}
