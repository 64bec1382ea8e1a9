use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Balance,
    Payoff,
    Image,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Races {
    Table,
    Id,
}

/// 投票券
#[derive(DeriveIden)]
enum BettingTickets {
    Table,
    Id,
    UserId,
    RaceId,
    Type,
    Key,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Balance)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::Payoff)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Users::Image).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // ユーザーもレースも投票券を所有しない (ON DELETE なし)
        manager
            .create_table(
                Table::create()
                    .table(BettingTickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BettingTickets::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BettingTickets::UserId).uuid().not_null())
                    .col(ColumnDef::new(BettingTickets::RaceId).uuid().not_null())
                    .col(ColumnDef::new(BettingTickets::Type).string_len(32).not_null())
                    .col(ColumnDef::new(BettingTickets::Key).json().not_null())
                    .col(
                        ColumnDef::new(BettingTickets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_betting_tickets_user")
                            .from(BettingTickets::Table, BettingTickets::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_betting_tickets_race")
                            .from(BettingTickets::Table, BettingTickets::RaceId)
                            .to(Races::Table, Races::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_betting_tickets_user_race")
                    .table(BettingTickets::Table)
                    .col(BettingTickets::UserId)
                    .col(BettingTickets::RaceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(BettingTickets::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
