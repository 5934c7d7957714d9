//! Groups command - Admin user group membership maintenance.

use std::sync::Arc;

use crate::cli::args::{GroupsAction, GroupsArgs};
use crate::config::Config;
use crate::domain::User;
use crate::errors::AppResult;
use crate::infra::{AdminUserGroupStore, Database};
use crate::services::{AdminUserGroupManager, AdminUserGroupService};

/// Execute the groups command
pub async fn execute(args: GroupsArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let service = AdminUserGroupManager::new(Arc::new(AdminUserGroupStore::new(
        db.into_connection(),
    )));

    match args.action {
        GroupsAction::List { user_id } => {
            let groups = service.list_groups(&User::new(user_id)).await?;
            if groups.is_empty() {
                println!("User {} has no admin groups", user_id);
            }
            for group in groups {
                println!("{}\t{}", group.group_id, group.created_at.to_rfc3339());
            }
        }
        GroupsAction::Add { user_id, group_id } => {
            service.grant_group(&User::new(user_id), group_id).await?;
            println!("Added user {} to group {}", user_id, group_id);
        }
        GroupsAction::Revoke { user_id } => {
            let removed = service.revoke_admin_access(&User::new(user_id)).await?;
            println!("Removed {} group membership(s) from user {}", removed, user_id);
        }
    }

    Ok(())
}
