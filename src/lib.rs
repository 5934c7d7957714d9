//! Admin panel components
//!
//! Presentation widgets, a Gravatar helper and storage for admin user
//! group memberships, wired together behind a small CLI.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and value objects
//! - **services**: Application use cases
//! - **infra**: Database, migrations, repositories and template rendering
//! - **widgets**: Identifiable UI rendering units
//! - **utils**: Helpers (Gravatar)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Remove every admin group of user 42
//! cargo run -- groups revoke --user-id 42
//!
//! # Print an avatar tag
//! cargo run -- avatar someone@example.com --size 80
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod utils;
pub mod widgets;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{Address, AdminUserGroup, User};
pub use errors::{AppError, AppResult};
pub use utils::GravatarHelper;
pub use widgets::{AddressWidget, RenderOutcome, SsoWidget, Widget, WidgetContext, WidgetRegistry};
