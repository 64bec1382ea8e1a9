use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};

/// 残りがこれより長ければ「投票受付中」
const OPEN_LABEL_THRESHOLD_MINUTES: i64 = 120;

/// 指定タイムゾーンで `at` が `date` の日に含まれるか
pub fn is_same_day(at: DateTime<Utc>, date: NaiveDate, tz: FixedOffset) -> bool {
    at.with_timezone(&tz).date_naive() == date
}

/// 今日の日付 (指定タイムゾーン)
pub fn today(now: DateTime<Utc>, tz: FixedOffset) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// 発走時刻の表示 (`H:MM`)
pub fn format_time(at: DateTime<Utc>, tz: FixedOffset) -> String {
    let local = at.with_timezone(&tz);
    format!("{}:{:02}", local.hour(), local.minute())
}

/// 投票締切の表示
pub fn format_close_at(close_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if close_at < now {
        return "投票締切".to_string();
    }

    let minutes = (close_at - now).num_minutes();
    if minutes > OPEN_LABEL_THRESHOLD_MINUTES {
        return "投票受付中".to_string();
    }

    format!("締切{minutes}分前")
}

/// 一覧を上から順に表示するための各行の遅延 (ms)
///
/// 視差効果を減らす設定のときは全件を即時表示する。
pub fn reveal_delays(count: usize, interval_ms: u64, reduced_motion: bool) -> Vec<u64> {
    (0..count as u64)
        .map(|index| if reduced_motion { 0 } else { index * interval_ms })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn jst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    #[test]
    fn test_is_same_day_uses_timezone() {
        // 2026-10-17 20:00 UTC は JST では 10/18 05:00
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 20, 0, 0).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert!(is_same_day(at, date, jst()));
        assert!(!is_same_day(at, date, FixedOffset::east_opt(0).unwrap()));
    }

    #[test]
    fn test_format_time() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 0, 5, 0).unwrap();
        assert_eq!(format_time(at, jst()), "9:05");
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 3, 30, 0).unwrap();
        assert_eq!(format_time(at, jst()), "12:30");
    }

    #[test]
    fn test_format_close_at() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 3, 0, 0).unwrap();
        assert_eq!(format_close_at(now - Duration::minutes(1), now), "投票締切");
        assert_eq!(format_close_at(now + Duration::minutes(121), now), "投票受付中");
        assert_eq!(format_close_at(now + Duration::minutes(120), now), "締切120分前");
        assert_eq!(format_close_at(now + Duration::seconds(90), now), "締切1分前");
    }

    #[test]
    fn test_reveal_delays() {
        assert_eq!(reveal_delays(3, 100, false), vec![0, 100, 200]);
        assert_eq!(reveal_delays(3, 100, true), vec![0, 0, 0]);
        assert!(reveal_delays(0, 100, false).is_empty());
    }
}
