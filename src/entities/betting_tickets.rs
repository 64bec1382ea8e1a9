use super::SelectionKey;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 投票券
/// ユーザーとレースを参照するが, どちらにも所有されない
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "betting_tickets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub race_id: Uuid,
    #[sea_orm(column_name = "type")]
    pub bet_type: String,
    #[sea_orm(column_type = "Json")]
    pub key: SelectionKey,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::races::Entity",
        from = "Column::RaceId",
        to = "super::races::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Race,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::races::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Race.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
