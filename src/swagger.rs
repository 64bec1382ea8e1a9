use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::user::get_me,
        handlers::user::charge,
        handlers::hero::get_hero,
        handlers::race::list_races,
        handlers::race::get_race,
        handlers::betting_ticket::list_betting_tickets,
        handlers::betting_ticket::create_betting_ticket,
        handlers::top::get_top,
        handlers::initialize::initialize,
    ),
    components(
        schemas(
            UserResponse,
            ChargeRequest,
            HeroImageResponse,
            RaceResponse,
            RaceListResponse,
            PlayerResponse,
            RaceEntryResponse,
            OddsItemResponse,
            RaceDetailResponse,
            CreateBettingTicketRequest,
            BettingTicketResponse,
            BettingTicketListResponse,
            TopRaceItem,
            TopRacePage,
            TopPageResponse,
            ApiError,
            ApiErrorResponse,
        )
    ),
    tags(
        (name = "user", description = "ユーザーとポイント"),
        (name = "hero", description = "ヒーロー画像"),
        (name = "race", description = "レースとオッズ"),
        (name = "betting_ticket", description = "投票券"),
        (name = "top", description = "トップページ"),
        (name = "admin", description = "初期化"),
    ),
    info(
        title = "Race Betting API",
        version = "1.0.0",
        description = "レース投票サービスの REST API"
    ),
    servers(
        (url = "/api", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/users/me",
            "/users/me/charge",
            "/hero",
            "/races",
            "/races/{race_id}",
            "/races/{race_id}/betting-tickets",
            "/top",
            "/initialize",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
