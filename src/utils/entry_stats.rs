use rand::Rng;
use rand::seq::SliceRandom;

/// 予想印。上位4件以外は空文字
pub const PREDICTION_MARKS: [&str; 4] = ["◎", "○", "△", "×"];

/// 過去成績の各回数の上限
const MAX_PLACE_COUNT: i32 = 10;

/// 出走選手の過去成績
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryStats {
    pub first: i32,
    pub second: i32,
    pub third: i32,
    pub others: i32,
    pub rock_win: i32,
    pub scissors_win: i32,
    pub paper_win: i32,
}

impl EntryStats {
    /// 回数をランダムに決め, 1着の内訳 (グー / チョキ / パー) を振り分ける
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let first = rng.gen_range(0..=MAX_PLACE_COUNT);
        let second = rng.gen_range(0..=MAX_PLACE_COUNT);
        let third = rng.gen_range(0..=MAX_PLACE_COUNT);
        let others = rng.gen_range(0..=MAX_PLACE_COUNT);

        let rock_win = rng.gen_range(0..=first);
        let scissors_win = rng.gen_range(0..=first - rock_win);
        let paper_win = first - rock_win - scissors_win;

        Self {
            first,
            second,
            third,
            others,
            rock_win,
            scissors_win,
            paper_win,
        }
    }

    pub fn total(&self) -> i32 {
        self.first + self.second + self.third + self.others
    }

    /// 1着率 (%)
    pub fn first_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.first) / f64::from(total) * 100.0,
        }
    }

    /// 3着内率 (%)
    pub fn third_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => (1.0 - f64::from(self.others) / f64::from(total)) * 100.0,
        }
    }
}

/// 出走数ぶんの予想印をシャッフルして返す
pub fn shuffled_prediction_marks<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<&'static str> {
    let mut marks: Vec<&'static str> = PREDICTION_MARKS
        .iter()
        .copied()
        .chain(std::iter::repeat(""))
        .take(count)
        .collect();
    marks.shuffle(rng);
    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_stats_are_consistent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let stats = EntryStats::random(&mut rng);
            assert_eq!(
                stats.rock_win + stats.scissors_win + stats.paper_win,
                stats.first
            );
            assert!(stats.rock_win >= 0 && stats.scissors_win >= 0 && stats.paper_win >= 0);
            assert!((0.0..=100.0).contains(&stats.first_rate()));
            assert!((0.0..=100.0).contains(&stats.third_rate()));
            assert!(stats.first_rate() <= stats.third_rate() + 1e-9);
        }
    }

    #[test]
    fn test_rates() {
        let stats = EntryStats {
            first: 2,
            second: 3,
            third: 1,
            others: 4,
            rock_win: 1,
            scissors_win: 1,
            paper_win: 0,
        };
        assert_eq!(stats.total(), 10);
        assert!((stats.first_rate() - 20.0).abs() < 1e-9);
        assert!((stats.third_rate() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_rates_with_no_races() {
        let stats = EntryStats {
            first: 0,
            second: 0,
            third: 0,
            others: 0,
            rock_win: 0,
            scissors_win: 0,
            paper_win: 0,
        };
        assert_eq!(stats.first_rate(), 0.0);
        assert_eq!(stats.third_rate(), 0.0);
    }

    #[test]
    fn test_prediction_marks_are_unique() {
        let mut rng = StdRng::seed_from_u64(42);
        let marks = shuffled_prediction_marks(&mut rng, 8);
        assert_eq!(marks.len(), 8);
        for mark in PREDICTION_MARKS {
            assert_eq!(marks.iter().filter(|m| **m == mark).count(), 1);
        }
        assert_eq!(marks.iter().filter(|m| m.is_empty()).count(), 4);

        let short = shuffled_prediction_marks(&mut rng, 2);
        assert_eq!(short.len(), 2);
        assert!(short.iter().all(|m| !m.is_empty()));
    }
}
