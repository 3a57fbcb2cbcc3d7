//! Identifier types for the identity domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable user identity issued by the identity provider.
///
/// The value is opaque to the application; it is only compared for
/// equality and stored as the owner of each task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wraps an identifier issued by the provider.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for serde_json::Value {
    fn from(value: UserId) -> Self {
        Self::String(value.0)
    }
}
