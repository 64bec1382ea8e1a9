use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// ポイント残高
    pub balance: i64,
    /// 払戻金累計
    pub payoff: i64,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::betting_tickets::Entity")]
    BettingTickets,
}

impl Related<super::betting_tickets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BettingTickets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
