use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{RaceResponse, TopRacePage, UserResponse};

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct TopPageQuery {
    /// 表示する日付 (YYYY-MM-DD, 省略時は今日)
    #[schema(example = "2026-10-18")]
    pub date: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopRaceItem {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub start_at: DateTime<Utc>,
    pub close_at: DateTime<Utc>,
    /// 発走時刻 (H:MM)
    #[schema(example = "10:30")]
    pub start_time: String,
    /// 締切表示
    #[schema(example = "締切15分前")]
    pub close_label: String,
    /// 順番に表示するための遅延 (ms)
    pub reveal_delay_ms: u64,
}

impl TopRaceItem {
    pub fn new(
        race: RaceResponse,
        start_time: String,
        close_label: String,
        reveal_delay_ms: u64,
    ) -> Self {
        Self {
            id: race.id,
            name: race.name,
            image: race.image,
            start_at: race.start_at,
            close_at: race.close_at,
            start_time,
            close_label,
            reveal_delay_ms,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopPageResponse {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    pub races: TopRacePage,
}
