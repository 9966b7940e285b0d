use actix_web::{error::InternalError, web, HttpResponse};
use serde_json::json;

pub mod collaboration_handlers;
pub mod stats_handlers;

/// API route table, shared between `main` and the integration tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let msg = err.to_string();
        InternalError::from_response(err, HttpResponse::BadRequest().json(json!({ "error": msg })))
            .into()
    }))
    .route(
        "/api/send-collaboration",
        web::post().to(collaboration_handlers::submit),
    )
    .route(
        "/api/confirm-collaboration",
        web::get().to(collaboration_handlers::confirm),
    )
    .route(
        "/api/reject-collaboration",
        web::get().to(collaboration_handlers::reject),
    )
    .route(
        "/collaboration-status",
        web::get().to(collaboration_handlers::status_page),
    )
    .route("/api/tiktok-stats", web::get().to(stats_handlers::tiktok_stats));
}
