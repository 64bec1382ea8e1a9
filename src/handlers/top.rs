use crate::middlewares::UserIdentity;
use crate::models::*;
use crate::services::{TopPageOptions, TopPageService};
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use chrono::Utc;

/// 視差効果を減らす設定を伝えるクライアントヒント
pub const REDUCED_MOTION_HEADER: &str = "Sec-CH-Prefers-Reduced-Motion";

fn prefers_reduced_motion(req: &HttpRequest) -> bool {
    req.headers()
        .get(REDUCED_MOTION_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("reduce"))
}

#[utoipa::path(
    get,
    path = "/top",
    tag = "top",
    params(
        ("date" = Option<String>, Query, description = "日付 (YYYY-MM-DD, 省略時は今日)"),
        ("page" = Option<u64>, Query, description = "ページ (既定 1)"),
        ("per_page" = Option<u64>, Query, description = "1ページの件数 (既定 10)"),
        ("x-app-userid" = Option<String>, Header, description = "ユーザーID"),
        ("Sec-CH-Prefers-Reduced-Motion" = Option<String>, Header, description = "reduce なら遅延なし")
    ),
    responses(
        (status = 200, description = "トップページ", body = TopPageResponse),
        (status = 400, description = "日付が不正", body = ApiErrorResponse)
    )
)]
/// その日のレースを発走順に返す
///
/// 各行の `revealDelayMs` の順に1件ずつ表示し, 最下部までスクロールしたら次のページを取りに来る想定。
pub async fn get_top(
    service: web::Data<TopPageService>,
    req: HttpRequest,
    identity: Option<UserIdentity>,
    query: web::Query<TopPageQuery>,
) -> Result<HttpResponse> {
    let options = TopPageOptions {
        reduced_motion: prefers_reduced_motion(&req),
        now: Utc::now(),
    };

    match service
        .top_page(identity.map(|i| i.0), &query, options)
        .await
    {
        Ok(page) => Ok(HttpResponse::Ok()
            .insert_header(("Accept-CH", REDUCED_MOTION_HEADER))
            .json(page)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn top_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/top", web::get().to(get_top));
}
