pub mod betting_ticket_service;
pub mod race_service;
pub mod seed_service;
pub mod top_page_service;
pub mod user_service;

pub use betting_ticket_service::*;
pub use race_service::*;
pub use seed_service::*;
pub use top_page_service::*;
pub use user_service::*;

use crate::config::Config;
use sea_orm::DatabaseConnection;

/// ハンドラーから使うサービス一式
#[derive(Clone)]
pub struct AppServices {
    pub user_service: UserService,
    pub race_service: RaceService,
    pub betting_ticket_service: BettingTicketService,
    pub seed_service: SeedService,
    pub top_page_service: TopPageService,
}

impl AppServices {
    pub fn new(pool: DatabaseConnection, config: &Config) -> Self {
        let timezone = config.app.timezone();
        let user_service = UserService::new(pool.clone(), config.app.initial_balance);
        let race_service = RaceService::new(pool.clone());

        Self {
            betting_ticket_service: BettingTicketService::new(pool.clone()),
            seed_service: SeedService::new(pool, config.seed.clone(), timezone),
            top_page_service: TopPageService::new(
                race_service.clone(),
                user_service.clone(),
                timezone,
                config.app.reveal_interval_ms,
            ),
            user_service,
            race_service,
        }
    }

    /// `web::Data` として登録する
    pub fn register(&self, cfg: &mut actix_web::web::ServiceConfig) {
        use actix_web::web::Data;

        cfg.app_data(Data::new(self.user_service.clone()))
            .app_data(Data::new(self.race_service.clone()))
            .app_data(Data::new(self.betting_ticket_service.clone()))
            .app_data(Data::new(self.seed_service.clone()))
            .app_data(Data::new(self.top_page_service.clone()));
    }
}
