//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod admin_user_group_service;

pub use admin_user_group_service::{AdminUserGroupManager, AdminUserGroupService};
