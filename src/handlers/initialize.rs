use crate::services::SeedService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/initialize",
    tag = "admin",
    responses(
        (status = 204, description = "初期化完了"),
        (status = 500, description = "初期化失敗")
    )
)]
/// 全データを消してレースデータを作り直す
pub async fn initialize(seed_service: web::Data<SeedService>) -> Result<HttpResponse> {
    match seed_service.initialize().await {
        Ok(_) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn initialize_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/initialize", web::post().to(initialize));
}
