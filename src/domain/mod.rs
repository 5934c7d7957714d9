//! Domain layer - Core entities and value objects
//!
//! DDD: Domain layer has NO infrastructure dependencies.
//! Contains: Entities, Value Objects.

pub mod address;
pub mod admin_user_group;
pub mod user;

pub use address::Address;
pub use admin_user_group::AdminUserGroup;
pub use user::User;
