use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// レース
/// - start_at: 発走時刻
/// - close_at: 投票締切時刻 (発走前)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "races")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub start_at: DateTime<Utc>,
    pub close_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::race_entries::Entity")]
    RaceEntries,
    #[sea_orm(has_many = "super::odds_items::Entity")]
    OddsItems,
    #[sea_orm(has_many = "super::betting_tickets::Entity")]
    BettingTickets,
}

impl Related<super::race_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaceEntries.def()
    }
}

impl Related<super::odds_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OddsItems.def()
    }
}

impl Related<super::betting_tickets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BettingTickets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
