use crate::models::HeroImageResponse;
use crate::utils::asset_url;
use actix_web::{HttpResponse, Result, web};
use rand::Rng;

#[utoipa::path(
    get,
    path = "/hero",
    tag = "hero",
    responses(
        (status = 200, description = "ヒーロー画像", body = HeroImageResponse)
    )
)]
pub async fn get_hero() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HeroImageResponse {
        hash: random_hash(),
        url: asset_url("/images/hero.webp"),
    }))
}

/// 10桁の数字
fn random_hash() -> String {
    let mut rng = rand::thread_rng();
    (0..10)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

pub fn hero_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/hero", web::get().to(get_hero));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_hash() {
        let hash = random_hash();
        assert_eq!(hash.len(), 10);
        assert!(hash.chars().all(|c| c.is_ascii_digit()));
    }
}
