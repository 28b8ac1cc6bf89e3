//! Pricing REST handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, PricingRate, VehicleCategory};
use crate::interfaces::http::common::{domain_error, ApiResponse};
use crate::interfaces::http::router::AppState;

#[derive(Debug, Serialize)]
pub struct PricingRateDto {
    pub category: String,
    pub hourly_rate: Decimal,
    pub currency: String,
}

impl PricingRateDto {
    fn from_rate(rate: PricingRate, currency: &str) -> Self {
        Self {
            category: rate.category.to_string(),
            hourly_rate: rate.hourly_rate,
            currency: currency.to_string(),
        }
    }
}

pub async fn list_rates(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<PricingRateDto>>> {
    let rates = state
        .engine
        .list_rates()
        .into_iter()
        .map(|rate| PricingRateDto::from_rate(rate, &state.currency))
        .collect();
    Json(ApiResponse::success(rates))
}

#[derive(Debug, Deserialize)]
pub struct SetRateRequest {
    pub hourly_rate: Decimal,
}

pub async fn set_rate(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(request): Json<SetRateRequest>,
) -> Result<Json<ApiResponse<PricingRateDto>>, (StatusCode, Json<ApiResponse<PricingRateDto>>)> {
    let category = match VehicleCategory::from_str(&category) {
        Some(c) => c,
        None => return Err(domain_error(DomainError::UnknownCategory(category))),
    };
    state
        .engine
        .set_rate(category, request.hourly_rate)
        .map(|rate| Json(ApiResponse::success(PricingRateDto::from_rate(rate, &state.currency))))
        .map_err(domain_error)
}
