//! Admin user group repository over the `admin_user_groups` table.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};

use super::entities::admin_user_group::{self, ActiveModel, Entity as AdminUserGroupEntity};
use crate::domain::{AdminUserGroup, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Admin user group repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AdminUserGroupRepository: Send + Sync {
    /// Delete every membership row of the user, returning the number removed.
    ///
    /// Issues a single `DELETE` scoped by `user_id`, so calling it again
    /// for the same user returns 0.
    async fn remove_groups_for_user(&self, user: &User) -> AppResult<u64>;

    /// Add the user to a group
    async fn add_user_to_group(&self, user_id: i32, group_id: i32) -> AppResult<AdminUserGroup>;

    /// List memberships of a user ordered by group
    async fn groups_for_user(&self, user_id: i32) -> AppResult<Vec<AdminUserGroup>>;

    /// Count memberships of a user
    async fn count_for_user(&self, user_id: i32) -> AppResult<u64>;
}

/// Concrete implementation of AdminUserGroupRepository
pub struct AdminUserGroupStore {
    db: DatabaseConnection,
}

impl AdminUserGroupStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminUserGroupRepository for AdminUserGroupStore {
    async fn remove_groups_for_user(&self, user: &User) -> AppResult<u64> {
        let result = AdminUserGroupEntity::delete_many()
            .filter(admin_user_group::Column::UserId.eq(user.id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        tracing::debug!(
            user_id = user.id,
            removed = result.rows_affected,
            "Removed admin user groups"
        );

        Ok(result.rows_affected)
    }

    async fn add_user_to_group(&self, user_id: i32, group_id: i32) -> AppResult<AdminUserGroup> {
        let active_model = ActiveModel {
            user_id: Set(user_id),
            group_id: Set(group_id),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            into_conflict(e, || format!("Membership of user {} in group {}", user_id, group_id))
        })?;
        Ok(AdminUserGroup::from(model))
    }

    async fn groups_for_user(&self, user_id: i32) -> AppResult<Vec<AdminUserGroup>> {
        let models = AdminUserGroupEntity::find()
            .filter(admin_user_group::Column::UserId.eq(user_id))
            .order_by_asc(admin_user_group::Column::GroupId)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(AdminUserGroup::from).collect())
    }

    async fn count_for_user(&self, user_id: i32) -> AppResult<u64> {
        AdminUserGroupEntity::find()
            .filter(admin_user_group::Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}

/// Map unique violations to `Conflict`, everything else passes through.
fn into_conflict(err: DbErr, entity: impl FnOnce() -> String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(entity()),
        _ => AppError::Database(err),
    }
}
