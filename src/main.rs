mod config;
mod handlers;
mod middleware;
mod utils;

use crate::config::Config;
use crate::handlers::{health, hello, origins};
use crate::utils::origins::OriginAllowlist;
use actix_web::{web, App, HttpServer};
use log::{info, warn};
use middleware::cors::setup_cors;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::new();
    let address = config.address();
    let max_age = config.cors_max_age;

    let allowlist = Arc::new(OriginAllowlist::from_config(
        config.allowed_origins.as_deref(),
    ));
    if allowlist.is_empty() {
        warn!("⚠️ ALLOWED_ORIGINS is empty, every cross-origin request will be denied");
    }

    info!("GloTrade API origin gate");
    info!("🔧 {} allowed origins loaded", allowlist.len());
    info!("Starting server at `http://{}`", address);

    HttpServer::new(move || {
        App::new()
            .wrap(setup_cors(allowlist.clone(), max_age))
            .app_data(web::Data::from(allowlist.clone()))
            .route("/", web::get().to(hello::welcome))
            .route("/health", web::get().to(health::health))
            .route("/cors/check", web::get().to(origins::check_origin))
    })
    .bind(address)?
    .run()
    .await
}
