//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections, migrations and repositories
//! - Template rendering

pub mod db;
pub mod repositories;
pub mod templates;

pub use db::{Database, Migrator};
pub use repositories::{AdminUserGroupRepository, AdminUserGroupStore};
pub use templates::{TemplateEngine, TemplateRenderer};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockAdminUserGroupRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use templates::MockTemplateRenderer;
