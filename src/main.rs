use actix_web::{middleware, web, App, HttpServer};
use serde_json::json;

use creatorsite::config::Config;
use creatorsite::handlers;
use creatorsite::models::collaboration::Registry;
use creatorsite::notify::Mailer;
use creatorsite::stats::StatsClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let registry = web::Data::new(Registry::new());
    let mailer = web::Data::new(Mailer::from_config(&config));
    let stats_client = web::Data::new(StatsClient::with_base_url(
        config.tiktok_base_url.clone(),
        config.tiktok_username.clone(),
    ));

    log::info!("Starting server at http://{}", config.bind_addr);
    let bind_addr = config.bind_addr.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(registry.clone())
            .app_data(mailer.clone())
            .app_data(stats_client.clone())
            .configure(handlers::routes)
            // Landing page assets
            .service(
                actix_files::Files::new("/", "./static")
                    .index_file("index.html")
                    .prefer_utf8(true),
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                actix_web::HttpResponse::NotFound().json(json!({ "error": "Not found" }))
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
