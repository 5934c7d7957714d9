//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod admin_user_group_repository;
pub(crate) mod entities;

pub use admin_user_group_repository::{AdminUserGroupRepository, AdminUserGroupStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use admin_user_group_repository::MockAdminUserGroupRepository;
