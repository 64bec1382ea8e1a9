use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::betting_ticket_entity as betting_tickets;

/// 1枚あたりの購入ポイント
pub const BETTING_TICKET_PRICE: i64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBettingTicketRequest {
    #[serde(rename = "type")]
    #[schema(example = "trifecta")]
    pub bet_type: String,
    #[schema(example = json!([1, 2, 3]))]
    pub key: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BettingTicketResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub bet_type: String,
    pub key: Vec<i32>,
    pub race_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<betting_tickets::Model> for BettingTicketResponse {
    fn from(ticket: betting_tickets::Model) -> Self {
        Self {
            id: ticket.id,
            bet_type: ticket.bet_type,
            key: ticket.key.0,
            race_id: ticket.race_id,
            user_id: ticket.user_id,
            created_at: ticket.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BettingTicketListResponse {
    pub betting_tickets: Vec<BettingTicketResponse>,
}
