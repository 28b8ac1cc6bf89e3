//! Reservation entity and its status machine

use chrono::{DateTime, Utc};

use super::super::error::{DomainError, DomainResult};
use super::super::slot::VehicleCategory;

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Awaiting operator approval (initial)
    Pending,
    /// Approved by an operator
    Confirmed,
    /// Withdrawn by the requester or an operator (terminal)
    Cancelled,
    /// The scheduled stay concluded (terminal)
    Completed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "cancelled" => Some(Self::Cancelled),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    /// Whether the status machine allows moving to `next`.
    ///
    /// Pending may be confirmed or cancelled; confirmed may be cancelled
    /// or completed. Terminal states admit no further moves.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        matches!(
            (*self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending, Self::Cancelled)
                | (Self::Confirmed, Self::Cancelled)
                | (Self::Confirmed, Self::Completed)
        )
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A future booking of intent to use a slot.
///
/// References its slot by id for planning only; actual occupancy is
/// established exclusively through check-in. Cancellation is a status,
/// not removal; reservations are never physically deleted.
#[derive(Debug, Clone)]
pub struct Reservation {
    /// Unique reservation id (creation order)
    pub id: i64,
    /// Owning user
    pub requester_id: String,
    pub plate_number: String,
    pub category: VehicleCategory,
    /// Target slot id
    pub slot_id: u32,
    /// When the stay is scheduled to begin
    pub scheduled_for: DateTime<Utc>,
    /// Current status
    pub status: ReservationStatus,
    /// When the reservation was created
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        requester_id: impl Into<String>,
        plate_number: impl Into<String>,
        category: VehicleCategory,
        slot_id: u32,
        scheduled_for: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            requester_id: requester_id.into(),
            plate_number: plate_number.into(),
            category,
            slot_id,
            scheduled_for,
            status: ReservationStatus::Pending,
            created_at,
        }
    }

    /// Apply a status transition, rejecting moves the table forbids.
    pub fn transition_to(&mut self, next: ReservationStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::InvalidReservationTransition {
                id: self.id,
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
