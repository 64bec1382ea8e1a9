use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub short_name: String,
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::race_entries::Entity")]
    RaceEntries,
}

impl Related<super::race_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RaceEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
