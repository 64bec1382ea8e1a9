use super::SelectionKey;
use sea_orm::entity::prelude::*;

/// オッズ (現状は三連単のみ)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "odds_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub race_id: Uuid,
    #[sea_orm(column_name = "type")]
    pub odds_type: String,
    #[sea_orm(column_type = "Json")]
    pub key: SelectionKey,
    pub odds: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::races::Entity",
        from = "Column::RaceId",
        to = "super::races::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Race,
}

impl Related<super::races::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Race.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
