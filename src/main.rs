use actix_web::{App, HttpServer, middleware::Logger};
use chrono::Local; // ログ行のタイムスタンプ
use env_logger::{Env, Target};
use std::io::Write; // env_logger のフォーマッタ用

use race_betting_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    handlers,
    middlewares::{AuthMiddleware, create_cors},
    services::AppServices,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 設定の読み込み
    let config = Config::from_toml().expect("Failed to load configuration file");

    // DB 接続とマイグレーション
    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let services = AppServices::new(pool, &config);

    // レースが1件もなければ初期データを入れる
    if config.app.seed_on_startup {
        match services.seed_service.seed_if_empty().await {
            Ok(Some(summary)) => log::info!("Seeded initial data: {summary:?}"),
            Ok(None) => log::info!("Races already exist, skipping seed"),
            Err(e) => log::error!("Failed to seed initial data: {e:?}"),
        }
    }

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        let services = services.clone();
        App::new()
            .wrap(AuthMiddleware::new())
            .wrap(Logger::default())
            .wrap(create_cors())
            .configure(|cfg| services.register(cfg))
            .configure(swagger_config)
            .configure(handlers::api_config)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
