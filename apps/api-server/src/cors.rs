//! Cross-origin policy built from [`CorsConfig`].

use actix_cors::Cors;

use crate::config::CorsConfig;

/// Build the CORS middleware. Called once per worker.
pub fn build_cors(config: &CorsConfig) -> Cors {
    let cors = match &config.allowed_origins {
        None => Cors::default().allow_any_origin(),
        Some(origins) => origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
    };

    let cors = cors.allowed_methods(config.allowed_methods.clone());

    let cors = match &config.allowed_headers {
        None => cors.allow_any_header(),
        Some(headers) => cors.allowed_headers(headers.clone()),
    };

    cors.max_age(3600)
}
