//! Slot board and check-in/check-out handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Slot, VehicleCategory};
use crate::interfaces::http::common::{domain_error, ApiResponse};
use crate::interfaces::http::router::AppState;

use super::transactions::TransactionDto;

/// Vehicle as shown on the slot board.
#[derive(Debug, Serialize)]
pub struct VehicleDto {
    pub plate_number: String,
    pub category: String,
    pub check_in_time: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SlotDto {
    pub id: u32,
    pub is_occupied: bool,
    pub vehicle: Option<VehicleDto>,
}

impl From<Slot> for SlotDto {
    fn from(slot: Slot) -> Self {
        Self {
            id: slot.id(),
            is_occupied: slot.is_occupied(),
            vehicle: slot.occupant().map(|v| VehicleDto {
                plate_number: v.plate_number.clone(),
                category: v.category.to_string(),
                check_in_time: v.check_in_time,
            }),
        }
    }
}

pub async fn list_slots(State(state): State<AppState>) -> Json<ApiResponse<Vec<SlotDto>>> {
    let slots = state
        .engine
        .list_slots()
        .into_iter()
        .map(SlotDto::from)
        .collect();
    Json(ApiResponse::success(slots))
}

#[derive(Debug, Deserialize)]
pub struct CheckInRequest {
    pub plate_number: String,
    pub category: String,
}

pub async fn check_in(
    State(state): State<AppState>,
    Path(slot_id): Path<u32>,
    Json(request): Json<CheckInRequest>,
) -> Result<Json<ApiResponse<SlotDto>>, (StatusCode, Json<ApiResponse<SlotDto>>)> {
    let category = match VehicleCategory::from_str(&request.category) {
        Some(c) => c,
        None => return Err(domain_error(DomainError::UnknownCategory(request.category))),
    };
    state
        .engine
        .check_in_vehicle(slot_id, &request.plate_number, category)
        .map(|slot| Json(ApiResponse::success(SlotDto::from(slot))))
        .map_err(domain_error)
}

/// Check-out preview: duration and cost as if the stay ended now.
#[derive(Debug, Serialize)]
pub struct QuoteDto {
    pub slot_id: u32,
    pub duration_hours: Decimal,
    pub cost: Decimal,
    pub currency: String,
}

pub async fn quote_check_out(
    State(state): State<AppState>,
    Path(slot_id): Path<u32>,
) -> Result<Json<ApiResponse<QuoteDto>>, (StatusCode, Json<ApiResponse<QuoteDto>>)> {
    state
        .engine
        .quote_check_out(slot_id)
        .map(|quote| {
            Json(ApiResponse::success(QuoteDto {
                slot_id,
                duration_hours: quote.duration_hours,
                cost: quote.cost,
                currency: state.currency.clone(),
            }))
        })
        .map_err(domain_error)
}

#[derive(Debug, Serialize)]
pub struct CheckOutResponse {
    pub slot_id: u32,
    pub transaction: TransactionDto,
}

pub async fn check_out(
    State(state): State<AppState>,
    Path(slot_id): Path<u32>,
) -> Result<Json<ApiResponse<CheckOutResponse>>, (StatusCode, Json<ApiResponse<CheckOutResponse>>)>
{
    state
        .engine
        .check_out_vehicle(slot_id)
        .map(|stay| {
            Json(ApiResponse::success(CheckOutResponse {
                slot_id: stay.slot.id(),
                transaction: TransactionDto::from(stay.transaction),
            }))
        })
        .map_err(domain_error)
}
