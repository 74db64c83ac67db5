// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, HBNB API client, and start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use config::Config;
use dotenv::dotenv;
use services::{CatalogCache, HbnbApiClient};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        // Use configured log level or default
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Configuration error")?;

    log::info!("Starting hbnb-web-dynamic...");
    log::info!("Environment: {}", config.environment);
    log::info!("HBNB API: {}", config.api_base_url);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize the API client shared by every page
    let api = web::Data::new(
        HbnbApiClient::new(&config.api_base_url, config.api_timeout())
            .context("Failed to build HBNB API client")?,
    );

    // 5. Initialize amenity catalog cache
    let catalog = web::Data::new(CatalogCache::new(config.catalog_cache_ttl_secs));
    log::info!(
        "Initialized amenity catalog cache (TTL: {}s)",
        config.catalog_cache_ttl_secs
    );

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            // Application state (API client and catalog cache)
            .app_data(api.clone())
            .app_data(catalog.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::hbnb_config)
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run()
    .await
    .context("HTTP server error")
}
