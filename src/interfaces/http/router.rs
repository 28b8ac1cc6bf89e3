//! API router

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::ParkingEngine;

use super::handlers::{analytics, health, pricing, reservations, slots, transactions};

/// Shared state for all routes.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ParkingEngine>,
    /// Currency code echoed alongside monetary values
    pub currency: String,
}

pub fn create_router(engine: Arc<ParkingEngine>, currency: impl Into<String>) -> Router {
    let state = AppState {
        engine,
        currency: currency.into(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/slots", get(slots::list_slots))
        .route("/api/v1/slots/{id}/quote", get(slots::quote_check_out))
        .route("/api/v1/slots/{id}/check-in", post(slots::check_in))
        .route("/api/v1/slots/{id}/check-out", post(slots::check_out))
        .route("/api/v1/pricing", get(pricing::list_rates))
        .route("/api/v1/pricing/{category}", put(pricing::set_rate))
        .route("/api/v1/transactions", get(transactions::list_transactions))
        .route(
            "/api/v1/reservations",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route(
            "/api/v1/reservations/{id}/status",
            put(reservations::update_status),
        )
        .route("/api/v1/analytics/summary", get(analytics::summary))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
