use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// エラー応答の本体 (`{"success": false, "error": {...}}` の `error`)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: ApiError,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HeroImageResponse {
    /// キャッシュバスター
    #[schema(example = "4821937465")]
    pub hash: String,
    #[schema(example = "/assets/images/hero.webp")]
    pub url: String,
}
