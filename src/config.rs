use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 日付の区切りに使うタイムゾーン (UTC からの分)
    pub utc_offset_minutes: i32,
    /// 新規ユーザーの初期ポイント
    pub initial_balance: i64,
    /// トップページでレースを1件ずつ表示する間隔 (ms)
    pub reveal_interval_ms: u64,
    /// 起動時にレースが空ならシードする
    pub seed_on_startup: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 540,
            initial_balance: 0,
            reveal_interval_ms: 100,
            seed_on_startup: true,
        }
    }
}

impl AppConfig {
    /// 範囲外のオフセットなら UTC にする
    pub fn timezone(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| {
            log::warn!(
                "Invalid utc_offset_minutes {}, falling back to UTC",
                self.utc_offset_minutes
            );
            FixedOffset::east_opt(0).expect("zero offset is valid")
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub players: usize,
    pub days: u32,
    pub races_per_day: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            players: 30,
            days: 3,
            races_per_day: 24,
        }
    }
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        Self::from_path(&config_path)
    }

    pub fn from_path(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        use std::io::ErrorKind;

        // 設定ファイルがなければ環境変数だけで組み立てる
        let mut config: Config = match std::fs::read_to_string(config_path) {
            Ok(config_str) => toml::from_str(&config_str)
                .map_err(|e| format!("Failed to parse config file: {e}"))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let database_url = env::var("DATABASE_URL")
                    .map_err(|_| "DATABASE_URL is not set and config.toml was not found")?;

                Config {
                    server: ServerConfig {
                        host: "0.0.0.0".to_string(),
                        port: 8080,
                    },
                    database: DatabaseConfig {
                        url: database_url,
                        max_connections: 10,
                    },
                    app: AppConfig::default(),
                    seed: SeedConfig::default(),
                }
            }
            Err(e) => {
                return Err(format!("Unable to read config file {config_path}: {e}").into());
            }
        };

        // 環境変数はファイルの値より優先
        config.apply_env_overrides();

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
            env::var(name).ok().and_then(|v| v.parse::<T>().ok())
        }

        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Some(p) = parse_env("SERVER_PORT") {
            self.server.port = p;
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = v;
        }
        if let Some(mc) = parse_env("DB_MAX_CONNECTIONS") {
            self.database.max_connections = mc;
        }
        if let Some(n) = parse_env("APP_UTC_OFFSET_MINUTES") {
            self.app.utc_offset_minutes = n;
        }
        if let Some(n) = parse_env("APP_INITIAL_BALANCE") {
            self.app.initial_balance = n;
        }
        if let Some(n) = parse_env("APP_REVEAL_INTERVAL_MS") {
            self.app.reveal_interval_ms = n;
        }
        if let Some(b) = parse_env("APP_SEED_ON_STARTUP") {
            self.app.seed_on_startup = b;
        }
        if let Some(n) = parse_env("SEED_PLAYERS") {
            self.seed.players = n;
        }
        if let Some(n) = parse_env("SEED_DAYS") {
            self.seed.days = n;
        }
        if let Some(n) = parse_env("SEED_RACES_PER_DAY") {
            self.seed.races_per_day = n;
        }
    }
}
