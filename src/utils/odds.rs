/// 払戻率
pub const PAYOUT_RATIO: f64 = 0.75;
pub const MIN_ODDS: f64 = 1.0;
pub const MAX_ODDS: f64 = 9999.9;

/// 三連単の1点
#[derive(Debug, Clone, PartialEq)]
pub struct TrifectaOdds {
    /// 1着, 2着, 3着の枠番
    pub key: [i32; 3],
    pub odds: f64,
}

/// 枠番と勝ちやすさ (正の重み) から三連単の全組み合わせのオッズを作る
///
/// 着順確率は Plackett-Luce モデルで見積もる。
/// 重みが正でない枠は 1 着率 0 とみなし, 最小の重みで扱う。
pub fn trifecta_odds(entries: &[(i32, f64)]) -> Vec<TrifectaOdds> {
    let weights: Vec<(i32, f64)> = entries
        .iter()
        .map(|&(number, weight)| (number, if weight > 0.0 { weight } else { 1.0 }))
        .collect();
    let total: f64 = weights.iter().map(|(_, w)| w).sum();

    let mut odds = Vec::new();
    for (i, &(a, wa)) in weights.iter().enumerate() {
        for (j, &(b, wb)) in weights.iter().enumerate() {
            if j == i {
                continue;
            }
            for (k, &(c, wc)) in weights.iter().enumerate() {
                if k == i || k == j {
                    continue;
                }
                let probability = (wa / total) * (wb / (total - wa)) * (wc / (total - wa - wb));
                odds.push(TrifectaOdds {
                    key: [a, b, c],
                    odds: round_odds(PAYOUT_RATIO / probability),
                });
            }
        }
    }
    odds
}

fn round_odds(raw: f64) -> f64 {
    let clamped = if raw.is_finite() {
        raw.clamp(MIN_ODDS, MAX_ODDS)
    } else {
        MAX_ODDS
    };
    (clamped * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ordered_triples() {
        let entries: Vec<(i32, f64)> = (1..=6).map(|n| (n, 10.0)).collect();
        let odds = trifecta_odds(&entries);
        assert_eq!(odds.len(), 6 * 5 * 4);
        assert!(odds.iter().all(|o| {
            o.key[0] != o.key[1] && o.key[1] != o.key[2] && o.key[0] != o.key[2]
        }));
    }

    #[test]
    fn test_equal_weights_give_equal_odds() {
        let entries: Vec<(i32, f64)> = (1..=4).map(|n| (n, 5.0)).collect();
        let odds = trifecta_odds(&entries);
        // 4*3*2 = 24 通り, 確率 1/24
        assert!(odds.iter().all(|o| (o.odds - 18.0).abs() < 1e-9));
    }

    #[test]
    fn test_favourite_pays_less() {
        let entries = vec![(1, 80.0), (2, 10.0), (3, 10.0), (4, 1.0)];
        let odds = trifecta_odds(&entries);
        let favourite = odds.iter().find(|o| o.key == [1, 2, 3]).unwrap();
        let longshot = odds.iter().find(|o| o.key == [4, 3, 2]).unwrap();
        assert!(favourite.odds < longshot.odds);
        assert!(odds.iter().all(|o| (MIN_ODDS..=MAX_ODDS).contains(&o.odds)));
    }

    #[test]
    fn test_too_few_entries() {
        assert!(trifecta_odds(&[(1, 1.0), (2, 1.0)]).is_empty());
    }

    #[test]
    fn test_round_odds() {
        assert_eq!(round_odds(0.2), 1.0);
        assert_eq!(round_odds(f64::INFINITY), MAX_ODDS);
        assert_eq!(round_odds(12.34), 12.3);
    }
}
