use crate::middlewares::UserIdentity;
use crate::models::*;
use crate::services::BettingTicketService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/races/{race_id}/betting-tickets",
    tag = "betting_ticket",
    params(
        ("race_id" = String, Path, description = "レースID"),
        ("x-app-userid" = String, Header, description = "ユーザーID")
    ),
    responses(
        (status = 200, description = "購入済みの投票券", body = BettingTicketListResponse),
        (status = 401, description = "ユーザーIDなし", body = ApiErrorResponse)
    )
)]
pub async fn list_betting_tickets(
    service: web::Data<BettingTicketService>,
    identity: UserIdentity,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match service.list_tickets(identity.0, &path).await {
        Ok(list) => Ok(HttpResponse::Ok().json(list)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/races/{race_id}/betting-tickets",
    tag = "betting_ticket",
    request_body = CreateBettingTicketRequest,
    params(
        ("race_id" = String, Path, description = "レースID"),
        ("x-app-userid" = String, Header, description = "ユーザーID")
    ),
    responses(
        (status = 200, description = "購入した投票券", body = BettingTicketResponse),
        (status = 400, description = "リクエストが不正", body = ApiErrorResponse),
        (status = 401, description = "ユーザーIDなし", body = ApiErrorResponse),
        (status = 404, description = "レースが存在しない", body = ApiErrorResponse),
        (status = 412, description = "残高不足", body = ApiErrorResponse)
    )
)]
/// 投票券を1枚 (100pt) 購入する
pub async fn create_betting_ticket(
    service: web::Data<BettingTicketService>,
    identity: UserIdentity,
    path: web::Path<String>,
    request: web::Json<CreateBettingTicketRequest>,
) -> Result<HttpResponse> {
    match service
        .create_ticket(identity.0, &path, request.into_inner())
        .await
    {
        Ok(ticket) => Ok(HttpResponse::Ok().json(ticket)),
        Err(e) => Ok(e.error_response()),
    }
}
