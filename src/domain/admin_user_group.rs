//! Admin user group membership entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Link between a user and an administrative group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUserGroup {
    pub user_id: i32,
    pub group_id: i32,
    pub created_at: DateTime<Utc>,
}

impl AdminUserGroup {
    /// Create a membership stamped with the current time
    pub fn new(user_id: i32, group_id: i32) -> Self {
        Self {
            user_id,
            group_id,
            created_at: Utc::now(),
        }
    }

    /// Check if this membership belongs to the given user
    pub fn belongs_to(&self, user_id: i32) -> bool {
        self.user_id == user_id
    }
}
