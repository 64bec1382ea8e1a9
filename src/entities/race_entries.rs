use sea_orm::entity::prelude::*;

/// 出走表の1行
/// 説明:
/// - first / second / third / others: 過去の着順回数, 合計が率の分母
/// - first_rate: 1着率 (%)
/// - third_rate: 3着内率 (%)
/// - rock_win + scissors_win + paper_win = first
/// - prediction_mark: ◎ ○ △ × のいずれか, または空文字
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "race_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub race_id: Uuid,
    pub player_id: Uuid,
    /// 枠番 (1始まり)
    pub number: i32,
    pub comment: String,
    pub prediction_mark: String,
    pub first: i32,
    pub second: i32,
    pub third: i32,
    pub others: i32,
    pub first_rate: f64,
    pub third_rate: f64,
    pub rock_win: i32,
    pub scissors_win: i32,
    pub paper_win: i32,
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
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Player,
}

impl Related<super::races::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Race.def()
    }
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
