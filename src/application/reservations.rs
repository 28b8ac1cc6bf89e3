//! Reservation manager: creation and status lifecycle
//!
//! Status updates are compare-and-set under the reservation's entry guard:
//! the current status is read, validated against the transition table and
//! replaced without releasing the guard, so two concurrent operator
//! actions cannot both apply to a stale status.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::info;

use crate::domain::{
    DomainError, DomainResult, Reservation, ReservationStatus, VehicleCategory,
};

use super::slots::SlotRegistry;

/// Owns the reservation collection and its status machine.
///
/// Consults the slot registry for slot existence but never mutates
/// occupancy; a reservation is future intent, not a parked vehicle.
pub struct ReservationManager {
    reservations: DashMap<i64, Reservation>,
    next_id: AtomicI64,
    slots: Arc<SlotRegistry>,
}

impl ReservationManager {
    pub fn new(slots: Arc<SlotRegistry>) -> Self {
        Self {
            reservations: DashMap::new(),
            next_id: AtomicI64::new(1),
            slots,
        }
    }

    /// Create a reservation in `Pending` state.
    ///
    /// The target slot must exist but does not have to be free: a
    /// reservation books a future slot-hour, while the registry tracks
    /// current occupancy.
    pub fn create(
        &self,
        requester_id: &str,
        plate_number: &str,
        category: VehicleCategory,
        slot_id: u32,
        scheduled_for: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> DomainResult<Reservation> {
        if requester_id.trim().is_empty() {
            return Err(DomainError::MissingField("requester_id"));
        }
        if plate_number.trim().is_empty() {
            return Err(DomainError::MissingField("plate_number"));
        }
        if !self.slots.contains(slot_id) {
            return Err(DomainError::SlotUnknown(slot_id));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let reservation = Reservation::new(
            id,
            requester_id,
            plate_number,
            category,
            slot_id,
            scheduled_for,
            now,
        );
        self.reservations.insert(id, reservation.clone());
        info!(reservation_id = id, slot_id, requester = requester_id, "reservation created");
        Ok(reservation)
    }

    pub fn get(&self, id: i64) -> Option<Reservation> {
        self.reservations.get(&id).map(|r| r.clone())
    }

    /// Apply a status transition and return the updated reservation.
    pub fn update_status(
        &self,
        id: i64,
        next: ReservationStatus,
    ) -> DomainResult<Reservation> {
        let mut reservation = self
            .reservations
            .get_mut(&id)
            .ok_or(DomainError::ReservationNotFound(id))?;
        reservation.transition_to(next)?;
        info!(reservation_id = id, status = %next, "reservation status updated");
        Ok(reservation.clone())
    }

    /// One requester's reservations, in creation order.
    pub fn list_for(&self, requester_id: &str) -> Vec<Reservation> {
        let mut reservations: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|r| r.requester_id == requester_id)
            .map(|r| r.clone())
            .collect();
        reservations.sort_by_key(|r| r.id);
        reservations
    }

    /// Every reservation, optionally narrowed to one status, in creation
    /// order.
    pub fn list_all(&self, status: Option<ReservationStatus>) -> Vec<Reservation> {
        let mut reservations: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .map(|r| r.clone())
            .collect();
        reservations.sort_by_key(|r| r.id);
        reservations
    }

    pub fn count_with_status(&self, status: ReservationStatus) -> usize {
        self.reservations.iter().filter(|r| r.status == status).count()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn manager() -> ReservationManager {
        ReservationManager::new(Arc::new(SlotRegistry::new(20)))
    }

    fn create(m: &ReservationManager, requester: &str, slot_id: u32) -> Reservation {
        let now = Utc::now();
        m.create(
            requester,
            "XYZ9876",
            VehicleCategory::Car,
            slot_id,
            now + Duration::days(1),
            now,
        )
        .unwrap()
    }

    #[test]
    fn create_starts_pending_with_sequential_ids() {
        let m = manager();
        let first = create(&m, "user-1", 3);
        let second = create(&m, "user-1", 4);
        assert_eq!(first.status, ReservationStatus::Pending);
        assert!(second.id > first.id);
    }

    #[test]
    fn create_unknown_slot_fails() {
        let m = manager();
        let now = Utc::now();
        let err = m
            .create("user-1", "XYZ9876", VehicleCategory::Car, 99, now, now)
            .unwrap_err();
        assert!(matches!(err, DomainError::SlotUnknown(99)));
    }

    #[test]
    fn create_empty_plate_fails() {
        let m = manager();
        let now = Utc::now();
        let err = m
            .create("user-1", "", VehicleCategory::Car, 3, now, now)
            .unwrap_err();
        assert!(matches!(err, DomainError::MissingField("plate_number")));
    }

    #[test]
    fn create_allows_currently_occupied_slot() {
        let slots = Arc::new(SlotRegistry::new(5));
        slots
            .check_in(2, "ABC1234", VehicleCategory::Car, Utc::now())
            .unwrap();
        let m = ReservationManager::new(Arc::clone(&slots));
        let now = Utc::now();
        // booking a future slot-hour, current occupancy is irrelevant
        assert!(m
            .create("user-1", "XYZ9876", VehicleCategory::Car, 2, now, now)
            .is_ok());
        assert!(slots.get(2).unwrap().is_occupied());
    }

    #[test]
    fn update_status_walks_the_machine() {
        let m = manager();
        let r = create(&m, "user-1", 3);

        let r = m.update_status(r.id, ReservationStatus::Confirmed).unwrap();
        assert_eq!(r.status, ReservationStatus::Confirmed);

        let err = m
            .update_status(r.id, ReservationStatus::Confirmed)
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidReservationTransition { .. }
        ));

        let r = m.update_status(r.id, ReservationStatus::Cancelled).unwrap();
        assert_eq!(r.status, ReservationStatus::Cancelled);

        let err = m
            .update_status(r.id, ReservationStatus::Completed)
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidReservationTransition { .. }
        ));
    }

    #[test]
    fn update_unknown_reservation_fails() {
        let m = manager();
        let err = m
            .update_status(42, ReservationStatus::Confirmed)
            .unwrap_err();
        assert!(matches!(err, DomainError::ReservationNotFound(42)));
    }

    #[test]
    fn cancellation_is_a_status_not_removal() {
        let m = manager();
        let r = create(&m, "user-1", 3);
        m.update_status(r.id, ReservationStatus::Cancelled).unwrap();
        assert_eq!(
            m.get(r.id).unwrap().status,
            ReservationStatus::Cancelled
        );
        assert_eq!(m.list_all(None).len(), 1);
    }

    #[test]
    fn listings_are_in_creation_order() {
        let m = manager();
        create(&m, "user-1", 1);
        create(&m, "user-2", 2);
        create(&m, "user-1", 3);

        let mine = m.list_for("user-1");
        assert_eq!(mine.len(), 2);
        assert!(mine[0].id < mine[1].id);

        let all = m.list_all(None);
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn concurrent_confirmations_have_exactly_one_winner() {
        let m = Arc::new(manager());
        let id = create(&m, "user-1", 3).id;
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let m = Arc::clone(&m);
                std::thread::spawn(move || {
                    m.update_status(id, ReservationStatus::Confirmed).is_ok()
                })
            })
            .collect();
        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(wins, 1);
        assert_eq!(m.get(id).unwrap().status, ReservationStatus::Confirmed);
    }

    #[test]
    fn list_all_filters_by_status() {
        let m = manager();
        let a = create(&m, "user-1", 1);
        create(&m, "user-1", 2);
        m.update_status(a.id, ReservationStatus::Confirmed).unwrap();

        let confirmed = m.list_all(Some(ReservationStatus::Confirmed));
        assert_eq!(confirmed.len(), 1);
        assert_eq!(confirmed[0].id, a.id);
        assert_eq!(m.count_with_status(ReservationStatus::Pending), 1);
    }
}
