//! Analytics handlers
//!
//! Everything here is a pure reduction over current engine state,
//! recomputed per request.

use axum::extract::State;
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::router::AppState;

#[derive(Debug, Serialize)]
pub struct CategoryRevenueDto {
    pub category: String,
    pub revenue: Decimal,
    pub stays: usize,
}

/// Overall dashboard summary.
#[derive(Debug, Serialize)]
pub struct LotSummaryDto {
    pub total_slots: usize,
    pub occupied_slots: usize,
    /// Occupied share of the lot, in percent
    pub occupancy_rate: f64,
    pub completed_stays: usize,
    pub total_revenue: Decimal,
    pub average_duration_hours: Option<Decimal>,
    pub revenue_by_category: Vec<CategoryRevenueDto>,
    pub pending_reservations: usize,
    pub confirmed_reservations: usize,
    pub cancelled_reservations: usize,
    pub completed_reservations: usize,
    pub currency: String,
}

pub async fn summary(State(state): State<AppState>) -> Json<ApiResponse<LotSummaryDto>> {
    let summary = state.engine.summary();
    Json(ApiResponse::success(LotSummaryDto {
        total_slots: summary.total_slots,
        occupied_slots: summary.occupied_slots,
        occupancy_rate: summary.occupancy_rate,
        completed_stays: summary.completed_stays,
        total_revenue: summary.total_revenue,
        average_duration_hours: summary.average_duration_hours,
        revenue_by_category: summary
            .revenue_by_category
            .into_iter()
            .map(|c| CategoryRevenueDto {
                category: c.category.to_string(),
                revenue: c.revenue,
                stays: c.stays,
            })
            .collect(),
        pending_reservations: summary.pending_reservations,
        confirmed_reservations: summary.confirmed_reservations,
        cancelled_reservations: summary.cancelled_reservations,
        completed_reservations: summary.completed_reservations,
        currency: state.currency.clone(),
    }))
}
