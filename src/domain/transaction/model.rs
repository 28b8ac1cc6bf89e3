//! Completed-stay transaction record

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::super::slot::VehicleCategory;

/// Immutable record of one completed paid stay.
///
/// Appended to the ledger at check-out and never mutated or deleted
/// afterwards. The slot id is a historical reference only; the slot may
/// have been reused many times since.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Unique transaction id
    pub id: Uuid,
    /// Slot the stay occupied
    pub slot_id: u32,
    /// Plate of the departed vehicle
    pub plate_number: String,
    /// Vehicle category the stay was billed under
    pub category: VehicleCategory,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: DateTime<Utc>,
    /// Stay length in fractional hours
    pub duration_hours: Decimal,
    /// Billed amount
    pub cost: Decimal,
}

impl Transaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        slot_id: u32,
        plate_number: impl Into<String>,
        category: VehicleCategory,
        check_in_time: DateTime<Utc>,
        check_out_time: DateTime<Utc>,
        duration_hours: Decimal,
        cost: Decimal,
    ) -> Self {
        Self {
            id,
            slot_id,
            plate_number: plate_number.into(),
            category,
            check_in_time,
            check_out_time,
            duration_hours,
            cost,
        }
    }
}
