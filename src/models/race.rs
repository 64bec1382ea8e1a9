use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::{
    odds_item_entity as odds_items, player_entity as players, race_entity as races,
    race_entry_entity as race_entries,
};
use crate::utils::to_webp;

/// レース一覧の絞り込み (UNIX 秒, 両端を含む)
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct RaceQuery {
    pub since: Option<i64>,
    pub until: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RaceResponse {
    pub id: Uuid,
    pub name: String,
    #[schema(example = "/assets/images/races/1.webp")]
    pub image: String,
    pub start_at: DateTime<Utc>,
    pub close_at: DateTime<Utc>,
}

impl From<races::Model> for RaceResponse {
    fn from(race: races::Model) -> Self {
        Self {
            id: race.id,
            name: race.name,
            image: to_webp(&race.image),
            start_at: race.start_at,
            close_at: race.close_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RaceListResponse {
    pub races: Vec<RaceResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: Uuid,
    pub name: String,
    pub short_name: String,
    pub image: String,
}

impl From<players::Model> for PlayerResponse {
    fn from(player: players::Model) -> Self {
        Self {
            id: player.id,
            name: player.name,
            short_name: player.short_name,
            image: to_webp(&player.image),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RaceEntryResponse {
    pub id: Uuid,
    pub number: i32,
    pub player: PlayerResponse,
    pub comment: String,
    #[schema(example = "◎")]
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

impl RaceEntryResponse {
    pub fn new(entry: race_entries::Model, player: players::Model) -> Self {
        Self {
            id: entry.id,
            number: entry.number,
            player: player.into(),
            comment: entry.comment,
            prediction_mark: entry.prediction_mark,
            first: entry.first,
            second: entry.second,
            third: entry.third,
            others: entry.others,
            first_rate: entry.first_rate,
            third_rate: entry.third_rate,
            rock_win: entry.rock_win,
            scissors_win: entry.scissors_win,
            paper_win: entry.paper_win,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OddsItemResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    #[schema(example = "trifecta")]
    pub odds_type: String,
    #[schema(example = json!([1, 2, 3]))]
    pub key: Vec<i32>,
    pub odds: f64,
}

impl From<odds_items::Model> for OddsItemResponse {
    fn from(item: odds_items::Model) -> Self {
        Self {
            id: item.id,
            odds_type: item.odds_type,
            key: item.key.0,
            odds: item.odds,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RaceDetailResponse {
    #[serde(flatten)]
    pub race: RaceResponse,
    pub entries: Vec<RaceEntryResponse>,
    pub trifecta_odds: Vec<OddsItemResponse>,
}
