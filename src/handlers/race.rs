use super::betting_ticket::{create_betting_ticket, list_betting_tickets};
use crate::models::*;
use crate::services::RaceService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/races",
    tag = "race",
    params(
        ("since" = Option<i64>, Query, description = "発走時刻の下限 (UNIX 秒)"),
        ("until" = Option<i64>, Query, description = "発走時刻の上限 (UNIX 秒)")
    ),
    responses(
        (status = 200, description = "レース一覧", body = RaceListResponse),
        (status = 400, description = "時刻が不正", body = ApiErrorResponse)
    )
)]
pub async fn list_races(
    race_service: web::Data<RaceService>,
    query: web::Query<RaceQuery>,
) -> Result<HttpResponse> {
    match race_service.list_races(&query).await {
        Ok(races) => Ok(HttpResponse::Ok().json(RaceListResponse { races })),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/races/{race_id}",
    tag = "race",
    params(
        ("race_id" = String, Path, description = "レースID")
    ),
    responses(
        (status = 200, description = "レース詳細 (出走表, 三連単オッズ)", body = RaceDetailResponse),
        (status = 404, description = "レースが存在しない", body = ApiErrorResponse)
    )
)]
pub async fn get_race(
    race_service: web::Data<RaceService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match race_service.get_race_detail(&path).await {
        Ok(race) => Ok(HttpResponse::Ok().json(race)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn race_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/races")
            .route("", web::get().to(list_races))
            .route("/{race_id}", web::get().to(get_race))
            .route(
                "/{race_id}/betting-tickets",
                web::get().to(list_betting_tickets),
            )
            .route(
                "/{race_id}/betting-tickets",
                web::post().to(create_betting_ticket),
            ),
    );
}
