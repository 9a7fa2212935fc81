use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Opaque account handle identifying every actor in the registry.
///
/// The execution environment authenticates the handle before any operation
/// reaches the registry; the registry itself treats it as an opaque,
/// globally unique key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl AccountId {
    /// Create a new account handle. Empty handles are rejected.
    pub fn new(handle: impl Into<String>) -> Result<Self, CoreError> {
        let handle = handle.into();
        if handle.trim().is_empty() {
            return Err(CoreError::InvalidAccount(
                "account handle must not be empty".into(),
            ));
        }
        Ok(Self(handle))
    }

    /// Get the handle string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
