// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config and logging, run one finder session, print the panels

mod config;
mod errors;
mod models;
mod services;
mod ui;

use anyhow::Context;
use config::Config;
use dotenv::dotenv;
use services::{FinderSession, GeolocatorClient, PlacesClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        anyhow::bail!("Configuration error: {}", e);
    }

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting nursery-finder...");

    // 4. Build the external-service clients
    let geolocator = GeolocatorClient::new(
        config.geolocation_api_url.clone(),
        config.http_timeout_secs,
    )
    .context("failed to build geolocation client")?;
    let places = PlacesClient::new(
        config.google_places_api_key.clone(),
        config.http_timeout_secs,
    )
    .context("failed to build places client")?;

    // 5. Run the flow: position fix -> map init -> nearby search -> render
    let mut session = FinderSession::new();
    if let Err(e) = session.run(&geolocator, &places).await {
        if let Some(alert) = session.alert() {
            // The two terminal location-acquisition notices
            eprintln!("{}", alert);
            std::process::exit(1);
        }
        return Err(e).context("finder flow failed");
    }

    // 6. Write both display regions
    ui::print_session(&session);

    Ok(())
}
