use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::user_entity as users;
use crate::utils::to_webp;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    /// ポイント残高
    pub balance: i64,
    /// 払戻金
    pub payoff: i64,
    #[schema(example = "/assets/images/users/default.webp")]
    pub image: String,
    pub created_at: DateTime<Utc>,
}

impl From<users::Model> for UserResponse {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            balance: user.balance,
            payoff: user.payoff,
            image: to_webp(&user.image),
            created_at: user.created_at,
        }
    }
}

/// 金額は正の整数のみ受け付ける
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChargeRequest {
    #[schema(example = 10000)]
    pub amount: i64,
}
