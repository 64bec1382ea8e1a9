use crate::error::AppError;
use actix_web::http::Method;
use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest,
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};
use uuid::Uuid;

/// クライアントがユーザーIDを載せてくるヘッダー
pub const USER_ID_HEADER: &str = "x-app-userid";

/// リクエスト単位のユーザーID (ヘッダーから復元)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdentity(pub Uuid);

/// ヘッダーのユーザーIDを解釈してリクエスト拡張に入れる
///
/// ヘッダーが無ければ匿名として通す。形式が不正なら存在しないユーザーとして扱う。
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AuthMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // CORS プリフライトは素通し
        let header = if req.method() == Method::OPTIONS {
            None
        } else {
            req.headers()
                .get(USER_ID_HEADER)
                .map(|value| value.to_str().ok().and_then(|s| Uuid::parse_str(s.trim()).ok()))
        };

        match header {
            Some(None) => {
                // Err ではなく 404 の応答を返す (外側の CORS を通す)
                let error = AppError::NotFound("User not found".to_string());
                let response = req.error_response(error).map_into_right_body();
                Box::pin(async move { Ok(response) })
            }
            Some(Some(user_id)) => {
                req.extensions_mut().insert(UserIdentity(user_id));
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            None => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
        }
    }
}

impl FromRequest for UserIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            current_user_id(req)
                .map(UserIdentity)
                .ok_or_else(|| AppError::AuthError("Missing user id".to_string())),
        )
    }
}

/// 現在のユーザーID (匿名なら None)
pub fn current_user_id(req: &HttpRequest) -> Option<Uuid> {
    req.extensions().get::<UserIdentity>().map(|identity| identity.0)
}
