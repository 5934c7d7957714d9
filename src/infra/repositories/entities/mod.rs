//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod admin_user_group;

#[allow(unused_imports)]
pub use admin_user_group::{
    ActiveModel as AdminUserGroupActiveModel, Entity as AdminUserGroupEntity,
    Model as AdminUserGroupModel,
};
