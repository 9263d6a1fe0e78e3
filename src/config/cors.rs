use actix_cors::Cors;
use actix_web::http::header;
use std::env;

/// Builds the CORS layer from the `ALLOWED_ORIGINS` env var (comma separated).
/// Without it the server stays permissive, which is what local development wants.
pub fn configure_cors() -> Cors {
    match env::var("ALLOWED_ORIGINS") {
        Ok(origins) => {
            let mut cors = Cors::default()
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
                .allowed_header(header::CONTENT_TYPE)
                .max_age(3600);
            for origin in origins.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                cors = cors.allowed_origin(origin);
            }
            cors
        }
        Err(_) => Cors::permissive(),
    }
}
