use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// 買い目 (着順どおりに並んだ枠番), JSON 配列として保存する
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct SelectionKey(pub Vec<i32>);

impl From<Vec<i32>> for SelectionKey {
    fn from(numbers: Vec<i32>) -> Self {
        Self(numbers)
    }
}
