//! Domain errors

use thiserror::Error;
use uuid::Uuid;

use super::reservation::ReservationStatus;

/// Failure classification used by callers to pick their own presentation
/// (HTTP status code, UI message). The engine never maps these itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Validation,
}

/// Domain-level error types
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Slot not found: {0}")]
    SlotNotFound(u32),

    #[error("Slot {0} is already occupied")]
    SlotAlreadyOccupied(u32),

    #[error("Slot {0} is not occupied")]
    SlotNotOccupied(u32),

    #[error("Plate number must not be empty")]
    InvalidPlate,

    #[error("No hourly rate registered for category: {0}")]
    UnknownCategory(String),

    #[error("Hourly rate must not be negative")]
    NegativeRate,

    #[error("Check-out time precedes check-in time")]
    InvalidInterval,

    #[error("Duplicate transaction id: {0}")]
    DuplicateTransactionId(Uuid),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(i64),

    #[error("Reservation {id}: illegal status transition {from} -> {to}")]
    InvalidReservationTransition {
        id: i64,
        from: ReservationStatus,
        to: ReservationStatus,
    },

    #[error("Unknown reservation status: {0}")]
    UnknownReservationStatus(String),

    #[error("Cannot reserve unknown slot: {0}")]
    SlotUnknown(u32),

    #[error("Missing field: {0}")]
    MissingField(&'static str),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SlotNotFound(_) | Self::ReservationNotFound(_) | Self::SlotUnknown(_) => {
                ErrorKind::NotFound
            }
            Self::SlotAlreadyOccupied(_)
            | Self::SlotNotOccupied(_)
            | Self::DuplicateTransactionId(_)
            | Self::InvalidReservationTransition { .. } => ErrorKind::Conflict,
            Self::InvalidPlate
            | Self::UnknownCategory(_)
            | Self::NegativeRate
            | Self::InvalidInterval
            | Self::UnknownReservationStatus(_)
            | Self::MissingField(_) => ErrorKind::Validation,
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_error_classes() {
        assert_eq!(DomainError::SlotNotFound(3).kind(), ErrorKind::NotFound);
        assert_eq!(DomainError::SlotUnknown(99).kind(), ErrorKind::NotFound);
        assert_eq!(
            DomainError::SlotAlreadyOccupied(3).kind(),
            ErrorKind::Conflict
        );
        assert_eq!(DomainError::SlotNotOccupied(3).kind(), ErrorKind::Conflict);
        assert_eq!(DomainError::InvalidPlate.kind(), ErrorKind::Validation);
        assert_eq!(DomainError::InvalidInterval.kind(), ErrorKind::Validation);
        assert_eq!(
            DomainError::InvalidReservationTransition {
                id: 1,
                from: ReservationStatus::Cancelled,
                to: ReservationStatus::Completed,
            }
            .kind(),
            ErrorKind::Conflict
        );
    }
}
