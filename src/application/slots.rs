//! Slot registry: owns slot-level occupancy mutation
//!
//! Slots live in a `DashMap`; the per-key entry guard serializes concurrent
//! writers on the same slot while operations on other slots proceed
//! independently.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::info;

use crate::domain::{DomainError, DomainResult, Slot, Vehicle, VehicleCategory};

/// Fixed-size collection of parking slots.
pub struct SlotRegistry {
    slots: DashMap<u32, Slot>,
}

impl SlotRegistry {
    /// Create slots `1..=count`. The set is fixed for the lifetime of the
    /// registry; slots are never added or removed afterwards.
    pub fn new(count: u32) -> Self {
        let slots = DashMap::new();
        for id in 1..=count {
            slots.insert(id, Slot::new(id));
        }
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, slot_id: u32) -> bool {
        self.slots.contains_key(&slot_id)
    }

    /// Snapshot of one slot.
    pub fn get(&self, slot_id: u32) -> Option<Slot> {
        self.slots.get(&slot_id).map(|s| s.clone())
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }

    /// Snapshot of every slot, ordered by id ascending.
    pub fn list(&self) -> Vec<Slot> {
        let mut slots: Vec<Slot> = self.slots.iter().map(|s| s.clone()).collect();
        slots.sort_by_key(Slot::id);
        slots
    }

    /// Record a vehicle's occupancy of a free slot.
    ///
    /// The occupancy check and the mutation run under the slot's entry
    /// guard: of two concurrent check-ins on the same free slot, exactly
    /// one wins and the other observes the slot as occupied.
    pub fn check_in(
        &self,
        slot_id: u32,
        plate_number: &str,
        category: VehicleCategory,
        now: DateTime<Utc>,
    ) -> DomainResult<Slot> {
        if plate_number.trim().is_empty() {
            return Err(DomainError::InvalidPlate);
        }
        let mut slot = self
            .slots
            .get_mut(&slot_id)
            .ok_or(DomainError::SlotNotFound(slot_id))?;
        if slot.is_occupied() {
            return Err(DomainError::SlotAlreadyOccupied(slot_id));
        }
        slot.park(Vehicle::new(plate_number, category, now));
        info!(slot_id, plate = plate_number, category = %category, "vehicle checked in");
        Ok(slot.clone())
    }

    /// End occupancy with a caller-supplied commit step.
    ///
    /// `commit` runs with the slot's entry guard held and the occupant
    /// still in place; the slot is cleared only after it returns `Ok`. A
    /// failed commit leaves the occupancy untouched, and no observer can
    /// see the slot free before the commit has succeeded.
    pub fn check_out_with<T, F>(&self, slot_id: u32, commit: F) -> DomainResult<(Slot, T)>
    where
        F: FnOnce(&Vehicle) -> DomainResult<T>,
    {
        let mut slot = self
            .slots
            .get_mut(&slot_id)
            .ok_or(DomainError::SlotNotFound(slot_id))?;
        let vehicle = match slot.occupant() {
            Some(v) => v.clone(),
            None => return Err(DomainError::SlotNotOccupied(slot_id)),
        };
        let committed = commit(&vehicle)?;
        let _ = slot.clear();
        info!(slot_id, plate = %vehicle.plate_number, "vehicle checked out");
        Ok((slot.clone(), committed))
    }

    /// End occupancy, returning the freed slot and the departing vehicle.
    pub fn check_out(&self, slot_id: u32) -> DomainResult<(Slot, Vehicle)> {
        self.check_out_with(slot_id, |vehicle| Ok(vehicle.clone()))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn registry() -> SlotRegistry {
        SlotRegistry::new(5)
    }

    #[test]
    fn new_registry_has_free_slots_in_order() {
        let r = registry();
        let slots = r.list();
        assert_eq!(slots.len(), 5);
        assert_eq!(
            slots.iter().map(Slot::id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert!(slots.iter().all(|s| !s.is_occupied()));
        assert_eq!(r.occupied_count(), 0);
    }

    #[test]
    fn check_in_occupies_slot() {
        let r = registry();
        let slot = r
            .check_in(3, "ABC1234", VehicleCategory::Car, Utc::now())
            .unwrap();
        assert!(slot.is_occupied());
        assert_eq!(slot.occupant().unwrap().plate_number, "ABC1234");
        assert_eq!(r.occupied_count(), 1);
    }

    #[test]
    fn check_in_unknown_slot_fails() {
        let r = registry();
        let err = r
            .check_in(99, "ABC1234", VehicleCategory::Car, Utc::now())
            .unwrap_err();
        assert!(matches!(err, DomainError::SlotNotFound(99)));
    }

    #[test]
    fn check_in_empty_plate_fails() {
        let r = registry();
        let err = r
            .check_in(1, "   ", VehicleCategory::Car, Utc::now())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidPlate));
        assert!(!r.get(1).unwrap().is_occupied());
    }

    #[test]
    fn double_check_in_keeps_first_occupant() {
        let r = registry();
        r.check_in(2, "FIRST01", VehicleCategory::Car, Utc::now())
            .unwrap();
        let err = r
            .check_in(2, "SECOND2", VehicleCategory::Suv, Utc::now())
            .unwrap_err();
        assert!(matches!(err, DomainError::SlotAlreadyOccupied(2)));
        assert_eq!(r.get(2).unwrap().occupant().unwrap().plate_number, "FIRST01");
    }

    #[test]
    fn check_out_frees_slot_and_returns_vehicle() {
        let r = registry();
        r.check_in(4, "ABC1234", VehicleCategory::Truck, Utc::now())
            .unwrap();
        let (slot, vehicle) = r.check_out(4).unwrap();
        assert!(!slot.is_occupied());
        assert_eq!(vehicle.plate_number, "ABC1234");
        assert_eq!(vehicle.category, VehicleCategory::Truck);
        assert!(!r.get(4).unwrap().is_occupied());
    }

    #[test]
    fn check_out_free_slot_fails() {
        let r = registry();
        let err = r.check_out(1).unwrap_err();
        assert!(matches!(err, DomainError::SlotNotOccupied(1)));
    }

    #[test]
    fn failed_commit_leaves_occupant_in_place() {
        let r = registry();
        r.check_in(1, "ABC1234", VehicleCategory::Car, Utc::now())
            .unwrap();
        let result: DomainResult<(Slot, ())> =
            r.check_out_with(1, |_| Err(DomainError::InvalidInterval));
        assert!(result.is_err());
        assert!(r.get(1).unwrap().is_occupied());
    }

    #[test]
    fn concurrent_check_ins_have_exactly_one_winner() {
        let r = Arc::new(SlotRegistry::new(1));
        let now = Utc::now();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let r = Arc::clone(&r);
                std::thread::spawn(move || {
                    r.check_in(1, &format!("PLATE{i}"), VehicleCategory::Car, now)
                        .is_ok()
                })
            })
            .collect();
        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(wins, 1);
        assert!(r.get(1).unwrap().is_occupied());
    }

    #[test]
    fn occupancy_invariant_holds_across_mutations() {
        let r = registry();
        for slot in r.list() {
            assert_eq!(slot.is_occupied(), slot.occupant().is_some());
        }
        r.check_in(1, "ABC1234", VehicleCategory::Car, Utc::now())
            .unwrap();
        r.check_in(2, "DEF5678", VehicleCategory::Suv, Utc::now())
            .unwrap();
        r.check_out(1).unwrap();
        for slot in r.list() {
            assert_eq!(slot.is_occupied(), slot.occupant().is_some());
        }
    }
}
