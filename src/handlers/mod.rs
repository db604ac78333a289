pub mod config;
pub mod dictionary;
pub mod gloss;

pub use self::config::*;
pub use self::dictionary::*;
pub use self::gloss::*;

use crate::error::AppError;
use crate::health;
use actix_web::web;

/// Register every route the server exposes.
///
/// Shared by `main` and the handler tests so both see the same routing table.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Extractor failures use the same JSON error body as handler errors
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health::health_check))
            .route("/metrics", web::get().to(health::detailed_metrics))
            .route("/gloss", web::post().to(post_gloss))
            .route("/gloss", web::get().to(get_gloss))
            .route("/dictionary", web::get().to(dictionary_info))
            .route("/dictionary/{key}", web::get().to(lookup_entry))
            .route("/config", web::get().to(get_config)),
    )
    .route("/health", web::get().to(health::health_check))
    .route("/", web::get().to(health::index));
}
