use sea_orm_migration::prelude::*;

/// 出走選手
#[derive(DeriveIden)]
enum Players {
    Table,
    Id,
    Name,
    ShortName,
    Image,
}

/// レース
#[derive(DeriveIden)]
enum Races {
    Table,
    Id,
    Name,
    Image,
    StartAt,
    CloseAt,
}

/// 出走表
#[derive(DeriveIden)]
enum RaceEntries {
    Table,
    Id,
    RaceId,
    PlayerId,
    Number,
    Comment,
    PredictionMark,
    First,
    Second,
    Third,
    Others,
    FirstRate,
    ThirdRate,
    RockWin,
    ScissorsWin,
    PaperWin,
}

/// オッズ
#[derive(DeriveIden)]
enum OddsItems {
    Table,
    Id,
    RaceId,
    Type,
    Key,
    Odds,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Players::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Players::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Players::ShortName).string_len(64).not_null())
                    .col(ColumnDef::new(Players::Image).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Races::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Races::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Races::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Races::Image).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Races::StartAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Races::CloseAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 開始時刻での範囲検索用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_races_start_at")
                    .table(Races::Table)
                    .col(Races::StartAt)
                    .to_owned(),
            )
            .await?;

        // 出走表はレース削除時に一緒に消える
        manager
            .create_table(
                Table::create()
                    .table(RaceEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RaceEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RaceEntries::RaceId).uuid().not_null())
                    .col(ColumnDef::new(RaceEntries::PlayerId).uuid().not_null())
                    .col(ColumnDef::new(RaceEntries::Number).integer().not_null())
                    .col(ColumnDef::new(RaceEntries::Comment).string_len(255).not_null())
                    .col(
                        ColumnDef::new(RaceEntries::PredictionMark)
                            .string_len(8)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(RaceEntries::First).integer().not_null().default(0))
                    .col(ColumnDef::new(RaceEntries::Second).integer().not_null().default(0))
                    .col(ColumnDef::new(RaceEntries::Third).integer().not_null().default(0))
                    .col(ColumnDef::new(RaceEntries::Others).integer().not_null().default(0))
                    .col(ColumnDef::new(RaceEntries::FirstRate).double().not_null().default(0.0))
                    .col(ColumnDef::new(RaceEntries::ThirdRate).double().not_null().default(0.0))
                    .col(ColumnDef::new(RaceEntries::RockWin).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(RaceEntries::ScissorsWin)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(RaceEntries::PaperWin).integer().not_null().default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_race_entries_race")
                            .from(RaceEntries::Table, RaceEntries::RaceId)
                            .to(Races::Table, Races::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_race_entries_player")
                            .from(RaceEntries::Table, RaceEntries::PlayerId)
                            .to(Players::Table, Players::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_race_entries_race_number_unique")
                    .table(RaceEntries::Table)
                    .col(RaceEntries::RaceId)
                    .col(RaceEntries::Number)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OddsItems::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(OddsItems::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(OddsItems::RaceId).uuid().not_null())
                    .col(ColumnDef::new(OddsItems::Type).string_len(32).not_null())
                    .col(ColumnDef::new(OddsItems::Key).json().not_null())
                    .col(ColumnDef::new(OddsItems::Odds).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_odds_items_race")
                            .from(OddsItems::Table, OddsItems::RaceId)
                            .to(Races::Table, Races::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_odds_items_race")
                    .table(OddsItems::Table)
                    .col(OddsItems::RaceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 削除順序: オッズ -> 出走表 -> レース -> 選手
        manager
            .drop_table(Table::drop().if_exists().table(OddsItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(RaceEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Races::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Players::Table).to_owned())
            .await?;
        Ok(())
    }
}
