//! Admin user group service - administrative access use cases.
//!
//! SOLID (DIP): Depends on the repository abstraction, not the store.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{AdminUserGroup, User};
use crate::errors::{AppError, AppResult};
use crate::infra::AdminUserGroupRepository;

/// Admin user group service trait for dependency injection.
#[async_trait]
pub trait AdminUserGroupService: Send + Sync {
    /// Strip every administrative group from the user, e.g. before the
    /// account is deleted or demoted. Returns the number of groups removed.
    async fn revoke_admin_access(&self, user: &User) -> AppResult<u64>;

    /// Grant membership of a group
    async fn grant_group(&self, user: &User, group_id: i32) -> AppResult<AdminUserGroup>;

    /// List the user's groups
    async fn list_groups(&self, user: &User) -> AppResult<Vec<AdminUserGroup>>;
}

/// Concrete implementation using the repository pattern.
pub struct AdminUserGroupManager {
    repo: Arc<dyn AdminUserGroupRepository>,
}

impl AdminUserGroupManager {
    /// Create new service instance with repository
    pub fn new(repo: Arc<dyn AdminUserGroupRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AdminUserGroupService for AdminUserGroupManager {
    async fn revoke_admin_access(&self, user: &User) -> AppResult<u64> {
        let removed = self.repo.remove_groups_for_user(user).await?;
        if removed == 0 {
            tracing::info!(user_id = user.id, "User had no admin groups");
        } else {
            tracing::info!(user_id = user.id, removed, "Revoked admin groups");
        }
        Ok(removed)
    }

    async fn grant_group(&self, user: &User, group_id: i32) -> AppResult<AdminUserGroup> {
        if group_id <= 0 {
            return Err(AppError::validation("Group id must be positive"));
        }
        let membership = self.repo.add_user_to_group(user.id, group_id).await?;
        tracing::info!(user_id = user.id, group_id, "Granted admin group");
        Ok(membership)
    }

    async fn list_groups(&self, user: &User) -> AppResult<Vec<AdminUserGroup>> {
        self.repo.groups_for_user(user.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockAdminUserGroupRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_revoke_returns_removed_count() {
        let mut repo = MockAdminUserGroupRepository::new();
        repo.expect_remove_groups_for_user()
            .withf(|user| user.id == 11)
            .times(1)
            .returning(|_| Ok(4));

        let service = AdminUserGroupManager::new(Arc::new(repo));

        assert_eq!(service.revoke_admin_access(&User::new(11)).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_revoke_propagates_storage_error() {
        let mut repo = MockAdminUserGroupRepository::new();
        repo.expect_remove_groups_for_user()
            .returning(|_| Err(AppError::Database(sea_orm::DbErr::Custom("gone".into()))));

        let service = AdminUserGroupManager::new(Arc::new(repo));
        let result = service.revoke_admin_access(&User::new(11)).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_grant_group() {
        let mut repo = MockAdminUserGroupRepository::new();
        repo.expect_add_user_to_group()
            .with(eq(3), eq(7))
            .times(1)
            .returning(|user_id, group_id| Ok(AdminUserGroup::new(user_id, group_id)));

        let service = AdminUserGroupManager::new(Arc::new(repo));
        let membership = service.grant_group(&User::new(3), 7).await.unwrap();

        assert_eq!((membership.user_id, membership.group_id), (3, 7));
    }

    #[tokio::test]
    async fn test_grant_group_rejects_invalid_group() {
        let mut repo = MockAdminUserGroupRepository::new();
        repo.expect_add_user_to_group().never();

        let service = AdminUserGroupManager::new(Arc::new(repo));
        let result = service.grant_group(&User::new(3), 0).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_groups() {
        let mut repo = MockAdminUserGroupRepository::new();
        repo.expect_groups_for_user()
            .with(eq(3))
            .returning(|user_id| Ok(vec![AdminUserGroup::new(user_id, 1), AdminUserGroup::new(user_id, 2)]));

        let service = AdminUserGroupManager::new(Arc::new(repo));
        let groups = service.list_groups(&User::new(3)).await.unwrap();

        assert_eq!(groups.len(), 2);
    }
}
