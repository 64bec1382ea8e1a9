use actix_cors::Cors;

pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        // フロントが独自ヘッダー (x-app-userid) を送るため
        .allow_any_header()
        .max_age(3600)
}
