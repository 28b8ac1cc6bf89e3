//! Transaction history handlers

use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::TransactionFilter;
use crate::domain::Transaction;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::router::AppState;

#[derive(Debug, Serialize)]
pub struct TransactionDto {
    pub id: Uuid,
    pub plate_number: String,
    pub category: String,
    pub slot_id: u32,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: DateTime<Utc>,
    pub duration_hours: Decimal,
    pub cost: Decimal,
}

impl From<Transaction> for TransactionDto {
    fn from(t: Transaction) -> Self {
        Self {
            id: t.id,
            plate_number: t.plate_number,
            category: t.category.to_string(),
            slot_id: t.slot_id,
            check_in_time: t.check_in_time,
            check_out_time: t.check_out_time,
            duration_hours: t.duration_hours,
            cost: t.cost,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TransactionQuery {
    /// Exact plate match, case-insensitive
    pub plate: Option<String>,
    /// Inclusive lower bound on check-out time (ISO 8601)
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on check-out time (ISO 8601)
    pub to: Option<DateTime<Utc>>,
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionQuery>,
) -> Json<ApiResponse<Vec<TransactionDto>>> {
    let filter = TransactionFilter {
        plate_number: query.plate,
        from: query.from,
        to: query.to,
    };
    let mut transactions = state.engine.list_transactions(&filter);
    // the UI shows newest stays first
    transactions.reverse();
    Json(ApiResponse::success(
        transactions.into_iter().map(TransactionDto::from).collect(),
    ))
}
