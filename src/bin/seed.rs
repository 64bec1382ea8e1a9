//! 初期データ投入ツール
//!
//! サーバーと同じ設定ファイルを読み, 選手・レース・出走表・オッズを作る。

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;

use race_betting_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    services::{SeedService, insert_race_entries},
};

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "レースデータの初期投入")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 設定ファイルのパス
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// 設定ファイルの DB URL を上書きする
    #[arg(long)]
    database_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// 選手とレースを作る (レースがあれば何もしない)
    Seed {
        /// 全テーブルを空にしてから作り直す
        #[arg(long)]
        force: bool,
    },
    /// 全テーブルを空にする
    Reset,
    /// 既存のレースに出走表と三連単オッズを追加する
    Entries,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = Config::from_path(&cli.config)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Failed to load {}", cli.config))?;
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }

    let pool = create_pool(&config.database)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let seed_service = SeedService::new(pool.clone(), config.seed.clone(), config.app.timezone());

    match cli.command {
        Commands::Seed { force: true } => {
            let summary = seed_service.initialize().await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Seed { force: false } => match seed_service.seed_if_empty().await? {
            Some(summary) => println!("{}", serde_json::to_string_pretty(&summary)?),
            None => println!("Races already exist; use --force to re-seed"),
        },
        Commands::Reset => {
            seed_service.reset().await?;
            println!("All tables cleared");
        }
        Commands::Entries => {
            let (entries, odds) = insert_race_entries(&pool).await?;
            println!("Inserted {entries} entries and {odds} odds items");
        }
    }

    Ok(())
}
