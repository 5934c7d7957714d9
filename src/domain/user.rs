//! User domain entity.

use serde::{Deserialize, Serialize};

/// User domain entity.
///
/// Only the identifier is required by this crate; the remaining fields
/// are carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    /// Create a user known only by its identifier
    pub fn new(id: i32) -> Self {
        Self {
            id,
            email: None,
            name: None,
        }
    }

    /// Attach an email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
