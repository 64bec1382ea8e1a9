use crate::middlewares::UserIdentity;
use crate::models::*;
use crate::services::UserService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/users/me",
    tag = "user",
    params(
        ("x-app-userid" = Option<String>, Header, description = "ユーザーID (省略時は新規作成)")
    ),
    responses(
        (status = 200, description = "現在のユーザー", body = UserResponse),
        (status = 404, description = "ユーザーが存在しない", body = ApiErrorResponse)
    )
)]
/// 現在のユーザーを返す。ヘッダーが無ければユーザーを新規作成して返す
pub async fn get_me(
    user_service: web::Data<UserService>,
    identity: Option<UserIdentity>,
) -> Result<HttpResponse> {
    match user_service.get_or_create(identity.map(|i| i.0)).await {
        Ok(user) => Ok(HttpResponse::Ok().json(user)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/users/me/charge",
    tag = "user",
    request_body = ChargeRequest,
    params(
        ("x-app-userid" = String, Header, description = "ユーザーID")
    ),
    responses(
        (status = 204, description = "チャージ成功"),
        (status = 400, description = "金額が不正", body = ApiErrorResponse),
        (status = 401, description = "ユーザーIDなし", body = ApiErrorResponse)
    )
)]
pub async fn charge(
    user_service: web::Data<UserService>,
    identity: UserIdentity,
    request: web::Json<ChargeRequest>,
) -> Result<HttpResponse> {
    match user_service.charge(identity.0, request.amount).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn user_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users/me")
            .route("", web::get().to(get_me))
            .route("/charge", web::post().to(charge)),
    );
}
