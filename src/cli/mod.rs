//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `migrate` - Database migrations
//! - `groups` - Admin user group maintenance
//! - `avatar` - Gravatar image tags
//! - `widgets` - Widget listing and rendering

pub mod args;

pub use args::{Cli, Commands};
