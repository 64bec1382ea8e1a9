use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::{RaceService, UserService};
use crate::utils::{format_close_at, format_time, is_same_day, reveal_delays, today};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use uuid::Uuid;

/// トップページ表示用のデータを組み立てる
#[derive(Clone)]
pub struct TopPageService {
    race_service: RaceService,
    user_service: UserService,
    timezone: FixedOffset,
    reveal_interval_ms: u64,
}

/// 表示オプション
#[derive(Debug, Clone, Copy)]
pub struct TopPageOptions {
    pub reduced_motion: bool,
    pub now: DateTime<Utc>,
}

impl TopPageService {
    pub fn new(
        race_service: RaceService,
        user_service: UserService,
        timezone: FixedOffset,
        reveal_interval_ms: u64,
    ) -> Self {
        Self {
            race_service,
            user_service,
            timezone,
            reveal_interval_ms,
        }
    }

    pub async fn top_page(
        &self,
        user_id: Option<Uuid>,
        query: &TopPageQuery,
        options: TopPageOptions,
    ) -> AppResult<TopPageResponse> {
        let date = match query.date.as_deref() {
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| AppError::ValidationError(format!("Invalid date: {raw}")))?,
            None => today(options.now, self.timezone),
        };

        let user = match user_id {
            Some(id) => Some(self.user_service.find_user(id).await?.into()),
            None => None,
        };

        let (since, until) = self.day_bounds(date)?;
        let races: Vec<RaceResponse> = self
            .race_service
            .find_races(Some(since), Some(until))
            .await?
            .into_iter()
            .filter(|race| is_same_day(race.start_at, date, self.timezone))
            .map(Into::into)
            .collect();

        let params = PaginationParams::new(query.page, query.per_page);
        let total = races.len() as u64;
        let page: Vec<RaceResponse> = races
            .into_iter()
            .skip(usize::try_from(params.get_offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(params.get_limit()).unwrap_or(usize::MAX))
            .collect();

        let delays = reveal_delays(page.len(), self.reveal_interval_ms, options.reduced_motion);
        let items = page
            .into_iter()
            .zip(delays)
            .map(|(race, delay)| {
                let start_time = format_time(race.start_at, self.timezone);
                let close_label = format_close_at(race.close_at, options.now);
                TopRaceItem::new(race, start_time, close_label, delay)
            })
            .collect();

        Ok(TopPageResponse {
            date,
            user,
            races: PaginatedResponse::new(items, &params, total),
        })
    }

    /// その日の 0:00:00 から 23:59:59 まで (UTC)
    fn day_bounds(&self, date: NaiveDate) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
        let start = date
            .and_hms_opt(0, 0, 0)
            .and_then(|naive| naive.and_local_timezone(self.timezone).single())
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(|| AppError::ValidationError(format!("Invalid date: {date}")))?;
        Ok((start, start + Duration::days(1) - Duration::seconds(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedConfig;
    use crate::database::test_pool;
    use crate::services::SeedService;

    fn jst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    async fn service() -> (TopPageService, UserService) {
        let pool = test_pool().await;
        SeedService::new(
            pool.clone(),
            SeedConfig {
                players: 10,
                days: 3,
                races_per_day: 12,
            },
            jst(),
        )
        .seed_catalog()
        .await
        .unwrap();

        let users = UserService::new(pool.clone(), 0);
        let top = TopPageService::new(RaceService::new(pool), users.clone(), jst(), 100);
        (top, users)
    }

    fn options(reduced_motion: bool) -> TopPageOptions {
        TopPageOptions {
            reduced_motion,
            now: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn test_today_first_page() {
        let (top, _) = service().await;
        let page = top
            .top_page(None, &TopPageQuery::default(), options(false))
            .await
            .unwrap();

        assert_eq!(page.date, today(Utc::now(), jst()));
        assert!(page.user.is_none());
        assert_eq!(page.races.total, 12);
        assert_eq!(page.races.items.len(), 10);
        assert!(page.races.has_more);

        let delays: Vec<u64> = page.races.items.iter().map(|r| r.reveal_delay_ms).collect();
        assert_eq!(delays, (0..10).map(|i| i * 100).collect::<Vec<_>>());
        assert!(page.races.items.windows(2).all(|w| w[0].start_at <= w[1].start_at));
        assert_eq!(page.races.items[0].start_time, "10:00");
        assert!(page.races.items.iter().all(|r| r.image.ends_with(".webp")));
    }

    #[actix_web::test]
    async fn test_second_page_with_reduced_motion() {
        let (top, _) = service().await;
        let query = TopPageQuery {
            date: None,
            page: Some(2),
            per_page: None,
        };
        let page = top.top_page(None, &query, options(true)).await.unwrap();

        assert_eq!(page.races.items.len(), 2);
        assert!(!page.races.has_more);
        assert!(page.races.items.iter().all(|r| r.reveal_delay_ms == 0));
    }

    #[actix_web::test]
    async fn test_day_without_races() {
        let (top, _) = service().await;
        let query = TopPageQuery {
            date: Some("2001-01-01".to_string()),
            ..Default::default()
        };
        let page = top.top_page(None, &query, options(false)).await.unwrap();
        assert_eq!(page.races.total, 0);
        assert!(page.races.items.is_empty());
    }

    #[actix_web::test]
    async fn test_invalid_date() {
        let (top, _) = service().await;
        let query = TopPageQuery {
            date: Some("18/10/2026".to_string()),
            ..Default::default()
        };
        let err = top.top_page(None, &query, options(false)).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[actix_web::test]
    async fn test_includes_user() {
        let (top, users) = service().await;
        let user = users.get_or_create(None).await.unwrap();

        let page = top
            .top_page(Some(user.id), &TopPageQuery::default(), options(false))
            .await
            .unwrap();
        assert_eq!(page.user.map(|u| u.id), Some(user.id));
    }
}
