//! Parking management service entry point
//!
//! REST service for a fixed-size parking lot: slot occupancy, time-based
//! billing and reservations. Reads configuration from a TOML file
//! (~/.config/parking-service/config.toml).

use std::sync::Arc;

use tracing::{error, info};

use campus_parking::application::{BillingCalculator, ParkingEngine};
use campus_parking::config::{default_config_path, AppConfig};
use campus_parking::domain::SystemClock;
use campus_parking::interfaces::http::create_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("PARKING_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg.logging.level);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            init_tracing("info");
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting parking service...");

    // ── Engine ─────────────────────────────────────────────────
    let billing = BillingCalculator::new(config.billing.rounding_decimals);
    let engine = Arc::new(ParkingEngine::new(
        config.lot.slots,
        config.pricing.seed_rates(),
        billing,
        Arc::new(SystemClock),
    )?);
    info!(
        slots = config.lot.slots,
        currency = %config.lot.currency,
        "🅿️ Lot initialized"
    );

    // ── REST API ───────────────────────────────────────────────
    let router = create_router(Arc::clone(&engine), config.lot.currency.clone());
    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    } else {
        info!("Shutdown signal received");
    }
}
