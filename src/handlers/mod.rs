pub mod betting_ticket;
pub mod hero;
pub mod initialize;
pub mod race;
pub mod top;
pub mod user;

pub use hero::hero_config;
pub use initialize::initialize_config;
pub use race::race_config;
pub use top::top_config;
pub use user::user_config;

use crate::error::AppError;
use actix_web::web;

/// JSON ボディの型違い (文字列の金額, 数値以外の買い目など) を 400 として返す
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// クエリの型違い (数値でない since / until など) を 400 として返す
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// `/api` 配下のルーティング
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(
            web::scope("/api")
                .configure(user_config)
                .configure(hero_config)
                .configure(race_config)
                .configure(top_config)
                .configure(initialize_config),
        );
}
