use crate::entities::{
    odds_item_entity as odds_items, player_entity as players, race_entity as races,
    race_entry_entity as race_entries,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

/// 三連単のオッズ種別
pub const TRIFECTA: &str = "trifecta";

#[derive(Clone)]
pub struct RaceService {
    pool: DatabaseConnection,
}

impl RaceService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// レース一覧 (UNIX 秒の範囲指定, 両端含む)
    pub async fn list_races(&self, query: &RaceQuery) -> AppResult<Vec<RaceResponse>> {
        let since = query.since.map(parse_unix_time).transpose()?;
        let until = query.until.map(parse_unix_time).transpose()?;

        let list = self.find_races(since, until).await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 発走時刻で絞り込んだレース (昇順)
    pub async fn find_races(
        &self,
        since: Option<DateTime<Utc>>,
        until: Option<DateTime<Utc>>,
    ) -> AppResult<Vec<races::Model>> {
        let mut select = races::Entity::find();
        if let Some(since) = since {
            select = select.filter(races::Column::StartAt.gte(since));
        }
        if let Some(until) = until {
            select = select.filter(races::Column::StartAt.lte(until));
        }

        let list = select
            .order_by_asc(races::Column::StartAt)
            .order_by_asc(races::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list)
    }

    /// レース詳細 (出走表, 三連単オッズ付き)
    pub async fn get_race_detail(&self, race_id: &str) -> AppResult<RaceDetailResponse> {
        let race = self.find_race(race_id).await?;

        let rows = race_entries::Entity::find()
            .filter(race_entries::Column::RaceId.eq(race.id))
            .find_also_related(players::Entity)
            .order_by_asc(race_entries::Column::Number)
            .all(&self.pool)
            .await?;

        let entries = rows
            .into_iter()
            .map(|(entry, player)| {
                let player = player.ok_or_else(|| {
                    AppError::InternalError(format!("Player missing for entry {}", entry.id))
                })?;
                Ok(RaceEntryResponse::new(entry, player))
            })
            .collect::<AppResult<Vec<_>>>()?;

        let mut odds = odds_items::Entity::find()
            .filter(odds_items::Column::RaceId.eq(race.id))
            .filter(odds_items::Column::OddsType.eq(TRIFECTA))
            .all(&self.pool)
            .await?;
        odds.sort_by(|a, b| a.key.0.cmp(&b.key.0));

        Ok(RaceDetailResponse {
            race: race.into(),
            entries,
            trifecta_odds: odds.into_iter().map(Into::into).collect(),
        })
    }

    /// ID 文字列からレースを引く。形式が不正な ID も「存在しない」とする
    pub async fn find_race(&self, race_id: &str) -> AppResult<races::Model> {
        let not_found = || AppError::NotFound("Race not found".to_string());
        let id = Uuid::parse_str(race_id).map_err(|_| not_found())?;

        races::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(not_found)
    }
}

fn parse_unix_time(secs: i64) -> AppResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or_else(|| AppError::ValidationError(format!("Invalid timestamp: {secs}")))
}
