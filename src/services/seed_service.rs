use crate::config::SeedConfig;
use crate::entities::{
    SelectionKey, betting_ticket_entity as betting_tickets, odds_item_entity as odds_items,
    player_entity as players, race_entity as races, race_entry_entity as race_entries,
    user_entity as users,
};
use crate::error::{AppError, AppResult};
use crate::services::TRIFECTA;
use crate::utils::{EntryStats, shuffled_prediction_marks, trifecta_odds};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set, TransactionTrait,
};
use serde::Serialize;
use uuid::Uuid;

const FAMILY_NAMES: [&str; 10] = [
    "佐藤", "鈴木", "高橋", "田中", "伊藤", "渡辺", "山本", "中村", "小林", "加藤",
];
const GIVEN_NAMES: [&str; 10] = [
    "蓮", "陽翔", "湊", "結衣", "陽葵", "凛", "大和", "葵", "悠真", "芽依",
];
const COMMENTS: [&str; 15] = [
    "今日も頑張ります",
    "拳を鍛えてきました",
    "チョキの力に自信あり",
    "開いた手の大きさなら負けません",
    "ビギナーズラックで勝つ",
    "今度こそ勝つ",
    "あいこになったら負けません",
    "今日の運勢一番でした",
    "おみくじ大吉でした",
    "前回の反省を活かしたい",
    "自分の癖が見えてきた",
    "なんかいけそう",
    "相手の研究は完璧",
    "子供時代は連戦連勝",
    "今日も朝練してきました",
];

/// 1レースあたりの出走数
const MIN_ENTRIES: usize = 6;
const MAX_ENTRIES: usize = 12;
/// 第1レースの発走時刻 (現地時間)
const FIRST_RACE_HOUR: u32 = 10;
const RACE_INTERVAL_MINUTES: i64 = 30;
const CLOSE_BEFORE_START_MINUTES: i64 = 2;
const RACE_IMAGE_COUNT: usize = 20;
/// 一括 INSERT の行数上限
const INSERT_CHUNK: usize = 500;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub players: usize,
    pub races: usize,
    pub entries: usize,
    pub odds: usize,
}

/// デモ用のレースデータを作る
#[derive(Clone)]
pub struct SeedService {
    pool: DatabaseConnection,
    config: SeedConfig,
    timezone: FixedOffset,
}

impl SeedService {
    pub fn new(pool: DatabaseConnection, config: SeedConfig, timezone: FixedOffset) -> Self {
        Self {
            pool,
            config,
            timezone,
        }
    }

    /// レースが1件もなければシードする
    pub async fn seed_if_empty(&self) -> AppResult<Option<SeedSummary>> {
        if races::Entity::find().count(&self.pool).await? > 0 {
            return Ok(None);
        }
        self.seed_catalog().await.map(Some)
    }

    /// 全データを消してから作り直す
    pub async fn initialize(&self) -> AppResult<SeedSummary> {
        self.reset().await?;
        self.seed_catalog().await
    }

    /// 全テーブルを空にする (外部キーの依存順)
    pub async fn reset(&self) -> AppResult<()> {
        let txn = self.pool.begin().await?;
        betting_tickets::Entity::delete_many().exec(&txn).await?;
        users::Entity::delete_many().exec(&txn).await?;
        odds_items::Entity::delete_many().exec(&txn).await?;
        race_entries::Entity::delete_many().exec(&txn).await?;
        races::Entity::delete_many().exec(&txn).await?;
        players::Entity::delete_many().exec(&txn).await?;
        txn.commit().await?;

        log::info!("Storage reset");
        Ok(())
    }

    /// 選手, レース, 出走表, オッズを作る
    pub async fn seed_catalog(&self) -> AppResult<SeedSummary> {
        let first_day = (Utc::now().with_timezone(&self.timezone) - Duration::days(1)).date_naive();

        let txn = self.pool.begin().await?;

        let player_models = build_players(self.config.players);
        for chunk in player_models.chunks(INSERT_CHUNK) {
            players::Entity::insert_many(chunk.to_vec()).exec(&txn).await?;
        }

        let race_models = build_races(
            first_day,
            self.config.days,
            self.config.races_per_day,
            self.timezone,
        )?;
        for chunk in race_models.chunks(INSERT_CHUNK) {
            races::Entity::insert_many(chunk.to_vec()).exec(&txn).await?;
        }

        let (entries, odds) = insert_race_entries(&txn).await?;
        txn.commit().await?;

        let summary = SeedSummary {
            players: player_models.len(),
            races: race_models.len(),
            entries,
            odds,
        };
        log::info!(
            "Seeded {} players, {} races, {} entries, {} odds",
            summary.players,
            summary.races,
            summary.entries,
            summary.odds
        );
        Ok(summary)
    }
}

/// 既存の全レースに出走表と三連単オッズを作る。作成した (出走数, オッズ数) を返す
pub async fn insert_race_entries<C: ConnectionTrait>(db: &C) -> AppResult<(usize, usize)> {
    let player_list = players::Entity::find().all(db).await?;
    let race_list = races::Entity::find().all(db).await?;

    let mut rng = StdRng::from_entropy();
    let mut entry_count = 0;
    let mut odds_count = 0;

    for race in &race_list {
        let (entries, odds) = build_race_card(race.id, &player_list, &mut rng);
        entry_count += entries.len();
        odds_count += odds.len();

        for chunk in entries.chunks(INSERT_CHUNK) {
            race_entries::Entity::insert_many(chunk.to_vec()).exec(db).await?;
        }
        for chunk in odds.chunks(INSERT_CHUNK) {
            odds_items::Entity::insert_many(chunk.to_vec()).exec(db).await?;
        }
    }

    Ok((entry_count, odds_count))
}

fn build_players(count: usize) -> Vec<players::ActiveModel> {
    (0..count)
        .map(|i| {
            let family = FAMILY_NAMES[i % FAMILY_NAMES.len()];
            let given = GIVEN_NAMES[(i / FAMILY_NAMES.len()) % GIVEN_NAMES.len()];
            players::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(format!("{family} {given}")),
                short_name: Set(family.to_string()),
                image: Set(format!("/assets/images/players/{i}.jpg")),
            }
        })
        .collect()
}

fn build_races(
    first_day: NaiveDate,
    days: u32,
    races_per_day: u32,
    timezone: FixedOffset,
) -> AppResult<Vec<races::ActiveModel>> {
    let mut models = Vec::new();
    for day in 0..days {
        let date = first_day + Duration::days(i64::from(day));
        let opening = local_time(date, FIRST_RACE_HOUR, timezone)?;

        for n in 0..races_per_day {
            let start_at = opening + Duration::minutes(RACE_INTERVAL_MINUTES * i64::from(n));
            let image_index = models.len() % RACE_IMAGE_COUNT;
            models.push(races::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(format!("{} 第{}レース", date.format("%m/%d"), n + 1)),
                image: Set(format!("/assets/images/races/{image_index}.jpg")),
                start_at: Set(start_at),
                close_at: Set(start_at - Duration::minutes(CLOSE_BEFORE_START_MINUTES)),
            });
        }
    }
    Ok(models)
}

fn local_time(date: NaiveDate, hour: u32, timezone: FixedOffset) -> AppResult<DateTime<Utc>> {
    date.and_hms_opt(hour, 0, 0)
        .and_then(|naive| naive.and_local_timezone(timezone).single())
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| AppError::InternalError(format!("Invalid race time on {date}")))
}

/// 1レース分の出走表とオッズ
fn build_race_card<R: Rng + ?Sized>(
    race_id: Uuid,
    player_list: &[players::Model],
    rng: &mut R,
) -> (Vec<race_entries::ActiveModel>, Vec<odds_items::ActiveModel>) {
    let wanted = rng.gen_range(MIN_ENTRIES..=MAX_ENTRIES).min(player_list.len());
    let chosen: Vec<&players::Model> = player_list.choose_multiple(rng, wanted).collect();
    let marks = shuffled_prediction_marks(rng, chosen.len());

    let mut weights = Vec::with_capacity(chosen.len());
    let entries: Vec<race_entries::ActiveModel> = chosen
        .iter()
        .zip(marks)
        .enumerate()
        .map(|(idx, (player, mark))| {
            let number = idx as i32 + 1;
            let stats = EntryStats::random(rng);
            weights.push((number, stats.first_rate() + 1.0));

            race_entries::ActiveModel {
                id: Set(Uuid::new_v4()),
                race_id: Set(race_id),
                player_id: Set(player.id),
                number: Set(number),
                comment: Set(COMMENTS[rng.gen_range(0..COMMENTS.len())].to_string()),
                prediction_mark: Set(mark.to_string()),
                first: Set(stats.first),
                second: Set(stats.second),
                third: Set(stats.third),
                others: Set(stats.others),
                first_rate: Set(stats.first_rate()),
                third_rate: Set(stats.third_rate()),
                rock_win: Set(stats.rock_win),
                scissors_win: Set(stats.scissors_win),
                paper_win: Set(stats.paper_win),
            }
        })
        .collect();

    let odds = trifecta_odds(&weights)
        .into_iter()
        .map(|item| odds_items::ActiveModel {
            id: Set(Uuid::new_v4()),
            race_id: Set(race_id),
            odds_type: Set(TRIFECTA.to_string()),
            key: Set(SelectionKey(item.key.to_vec())),
            odds: Set(item.odds),
        })
        .collect();

    (entries, odds)
}
