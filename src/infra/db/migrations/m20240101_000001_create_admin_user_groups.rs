//! Migration: Create the admin_user_groups membership table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminUserGroups::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AdminUserGroups::UserId).integer().not_null())
                    .col(ColumnDef::new(AdminUserGroups::GroupId).integer().not_null())
                    .col(
                        ColumnDef::new(AdminUserGroups::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(AdminUserGroups::UserId)
                            .col(AdminUserGroups::GroupId),
                    )
                    .to_owned(),
            )
            .await?;

        // Bulk removal filters on user_id
        manager
            .create_index(
                Index::create()
                    .name("idx_admin_user_groups_user_id")
                    .table(AdminUserGroups::Table)
                    .col(AdminUserGroups::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminUserGroups::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AdminUserGroups {
    Table,
    UserId,
    GroupId,
    CreatedAt,
}
