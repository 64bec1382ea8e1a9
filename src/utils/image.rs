/// 配信用に JPEG の画像パスを WebP に差し替える
///
/// 末尾が `.jpg` のものだけを書き換え, それ以外はそのまま返す。
pub fn to_webp(path: &str) -> String {
    match path.strip_suffix(".jpg") {
        Some(stem) => format!("{stem}.webp"),
        None => path.to_string(),
    }
}

/// `/assets` 配下の URL を組み立てる
pub fn asset_url(path: &str) -> String {
    format!("/assets{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_webp() {
        assert_eq!(
            to_webp("/assets/images/races/3.jpg"),
            "/assets/images/races/3.webp"
        );
        assert_eq!(to_webp("/images/hero.webp"), "/images/hero.webp");
        assert_eq!(to_webp("/images/a.jpg.png"), "/images/a.jpg.png");
        assert_eq!(to_webp(""), "");
    }

    #[test]
    fn test_to_webp_only_touches_suffix() {
        assert_eq!(to_webp("/jpg/x.jpg"), "/jpg/x.webp");
        assert_eq!(to_webp("/a.jpg/b.jpg"), "/a.jpg/b.webp");
    }

    #[test]
    fn test_asset_url() {
        assert_eq!(asset_url("/images/hero.webp"), "/assets/images/hero.webp");
    }
}
