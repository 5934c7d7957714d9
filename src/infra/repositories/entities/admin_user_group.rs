//! Admin user group membership entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::AdminUserGroup;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admin_user_groups")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub group_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for AdminUserGroup {
    fn from(model: Model) -> Self {
        AdminUserGroup {
            user_id: model.user_id,
            group_id: model.group_id,
            created_at: model.created_at,
        }
    }
}
