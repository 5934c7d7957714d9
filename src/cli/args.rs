//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Admin panel - widgets, avatars and admin group maintenance
#[derive(Parser, Debug)]
#[command(name = "admin-panel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Manage admin user group memberships
    Groups(GroupsArgs),

    /// Print a Gravatar image tag
    Avatar(AvatarArgs),

    /// Inspect and render widgets
    Widgets(WidgetsArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the groups command
#[derive(Parser, Debug)]
pub struct GroupsArgs {
    #[command(subcommand)]
    pub action: GroupsAction,
}

/// Group membership actions
#[derive(Subcommand, Debug)]
pub enum GroupsAction {
    /// List the groups of a user
    List {
        #[arg(short, long)]
        user_id: i32,
    },
    /// Add a user to a group
    Add {
        #[arg(short, long)]
        user_id: i32,
        #[arg(short, long)]
        group_id: i32,
    },
    /// Remove a user from all admin groups
    Revoke {
        #[arg(short, long)]
        user_id: i32,
    },
}

/// Arguments for the avatar command
#[derive(Parser, Debug)]
pub struct AvatarArgs {
    /// Email address to hash
    pub email: String,

    /// Image size in pixels (defaults to GRAVATAR_DEFAULT_SIZE)
    #[arg(short, long)]
    pub size: Option<u32>,
}

/// Arguments for the widgets command
#[derive(Parser, Debug)]
pub struct WidgetsArgs {
    /// Directory of template overrides (takes precedence over TEMPLATE_DIR)
    #[arg(long)]
    pub template_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub action: WidgetsAction,
}

/// Widget actions
#[derive(Subcommand, Debug)]
pub enum WidgetsAction {
    /// List registered widgets
    List,
    /// Render the address widget
    Address {
        #[arg(long)]
        street: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        postal_code: Option<String>,
        #[arg(long)]
        country: Option<String>,
    },
    /// Render the SSO widget
    Sso {
        /// URL to return to after sign-in
        #[arg(long)]
        redirect_url: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_groups_revoke() {
        let cli = Cli::parse_from(["admin-panel", "groups", "revoke", "--user-id", "12"]);
        match cli.command {
            Commands::Groups(GroupsArgs {
                action: GroupsAction::Revoke { user_id },
            }) => assert_eq!(user_id, 12),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_avatar_with_size() {
        let cli = Cli::parse_from(["admin-panel", "avatar", "test@example.com", "--size", "200"]);
        match cli.command {
            Commands::Avatar(args) => {
                assert_eq!(args.email, "test@example.com");
                assert_eq!(args.size, Some(200));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
