use actix_web::{web, HttpResponse};

use crate::stats::StatsClient;

/// GET /api/tiktok-stats
/// Always answers 200 with a `{followers, likes}` pair; upstream
/// failures are masked by the client's fallback numbers.
pub async fn tiktok_stats(client: web::Data<StatsClient>) -> HttpResponse {
    let stats = client.fetch().await;
    HttpResponse::Ok().json(stats)
}
