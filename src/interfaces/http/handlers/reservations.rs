//! Reservation REST handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Reservation, ReservationStatus, VehicleCategory};
use crate::interfaces::http::common::{domain_error, ApiResponse};
use crate::interfaces::http::router::AppState;

#[derive(Debug, Serialize)]
pub struct ReservationDto {
    pub id: i64,
    pub requester_id: String,
    pub plate_number: String,
    pub category: String,
    pub slot_id: u32,
    pub scheduled_for: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            requester_id: r.requester_id,
            plate_number: r.plate_number,
            category: r.category.to_string(),
            slot_id: r.slot_id,
            scheduled_for: r.scheduled_for,
            status: r.status.to_string(),
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReservationQuery {
    /// Narrow to one requester's reservations
    pub requester: Option<String>,
    /// Narrow to one status
    pub status: Option<String>,
}

pub async fn list_reservations(
    State(state): State<AppState>,
    Query(query): Query<ReservationQuery>,
) -> Result<Json<ApiResponse<Vec<ReservationDto>>>, (StatusCode, Json<ApiResponse<Vec<ReservationDto>>>)>
{
    let status = match query.status {
        Some(raw) => match ReservationStatus::from_str(&raw) {
            Some(s) => Some(s),
            None => return Err(domain_error(DomainError::UnknownReservationStatus(raw))),
        },
        None => None,
    };
    let reservations = match query.requester {
        Some(requester) => state
            .engine
            .list_reservations_for(&requester)
            .into_iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .collect(),
        None => state.engine.list_reservations(status),
    };
    Ok(Json(ApiResponse::success(
        reservations.into_iter().map(ReservationDto::from).collect(),
    )))
}

#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub requester_id: String,
    pub plate_number: Option<String>,
    pub category: String,
    pub slot_id: u32,
    /// When the stay is scheduled to begin (ISO 8601)
    pub scheduled_for: Option<DateTime<Utc>>,
}

pub async fn create_reservation(
    State(state): State<AppState>,
    Json(request): Json<CreateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<ReservationDto>>)> {
    let category = match VehicleCategory::from_str(&request.category) {
        Some(c) => c,
        None => return Err(domain_error(DomainError::UnknownCategory(request.category))),
    };
    let scheduled_for = match request.scheduled_for {
        Some(t) => t,
        None => return Err(domain_error(DomainError::MissingField("scheduled_for"))),
    };
    // an absent plate surfaces as the same validation error as an empty one
    let plate_number = request.plate_number.unwrap_or_default();
    state
        .engine
        .create_reservation(
            &request.requester_id,
            &plate_number,
            category,
            request.slot_id,
            scheduled_for,
        )
        .map(|reservation| Json(ApiResponse::success(ReservationDto::from(reservation))))
        .map_err(domain_error)
}

#[derive(Debug, Deserialize)]
pub struct UpdateReservationStatusRequest {
    pub status: String,
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(reservation_id): Path<i64>,
    Json(request): Json<UpdateReservationStatusRequest>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<ReservationDto>>)> {
    let status = match ReservationStatus::from_str(&request.status) {
        Some(s) => s,
        None => {
            return Err(domain_error(DomainError::UnknownReservationStatus(
                request.status,
            )))
        }
    };
    state
        .engine
        .update_reservation_status(reservation_id, status)
        .map(|reservation| Json(ApiResponse::success(ReservationDto::from(reservation))))
        .map_err(domain_error)
}
