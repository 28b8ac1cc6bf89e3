//! Parking slot and vehicle entities

use chrono::{DateTime, Utc};

/// Vehicle class determining the applicable hourly rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VehicleCategory {
    Motorcycle,
    Car,
    Suv,
    Truck,
}

impl VehicleCategory {
    /// Every category, in display order.
    pub const ALL: [VehicleCategory; 4] = [Self::Motorcycle, Self::Car, Self::Suv, Self::Truck];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Motorcycle => "motorcycle",
            Self::Car => "car",
            Self::Suv => "suv",
            Self::Truck => "truck",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "motorcycle" => Some(Self::Motorcycle),
            "car" => Some(Self::Car),
            "suv" => Some(Self::Suv),
            "truck" => Some(Self::Truck),
            _ => None,
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A parked vehicle, owned by the slot it occupies.
///
/// Destroyed on check-out; its data is copied into the transaction first.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub plate_number: String,
    pub category: VehicleCategory,
    pub check_in_time: DateTime<Utc>,
}

impl Vehicle {
    pub fn new(
        plate_number: impl Into<String>,
        category: VehicleCategory,
        check_in_time: DateTime<Utc>,
    ) -> Self {
        Self {
            plate_number: plate_number.into(),
            category,
            check_in_time,
        }
    }
}

/// A single fixed parking space.
///
/// Occupancy is represented by the optional occupant, so a slot can never
/// be "occupied" without a vehicle or hold a vehicle while "free". Slots
/// are created once at lot initialization and never destroyed; only the
/// registry mutates them, through check-in and check-out.
#[derive(Debug, Clone)]
pub struct Slot {
    id: u32,
    occupant: Option<Vehicle>,
}

impl Slot {
    pub fn new(id: u32) -> Self {
        Self { id, occupant: None }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    pub(crate) fn park(&mut self, vehicle: Vehicle) {
        self.occupant = Some(vehicle);
    }

    pub(crate) fn clear(&mut self) -> Option<Vehicle> {
        self.occupant.take()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vehicle() -> Vehicle {
        Vehicle::new("ABC1234", VehicleCategory::Car, Utc::now())
    }

    #[test]
    fn new_slot_is_free() {
        let slot = Slot::new(7);
        assert_eq!(slot.id(), 7);
        assert!(!slot.is_occupied());
        assert!(slot.occupant().is_none());
    }

    #[test]
    fn occupancy_tracks_occupant() {
        let mut slot = Slot::new(1);
        slot.park(sample_vehicle());
        assert!(slot.is_occupied());
        assert_eq!(slot.occupant().unwrap().plate_number, "ABC1234");

        let departed = slot.clear();
        assert!(!slot.is_occupied());
        assert!(slot.occupant().is_none());
        assert_eq!(departed.unwrap().plate_number, "ABC1234");
    }

    #[test]
    fn clear_on_free_slot_returns_none() {
        let mut slot = Slot::new(1);
        assert!(slot.clear().is_none());
    }

    #[test]
    fn category_string_roundtrip() {
        for category in VehicleCategory::ALL {
            let parsed = VehicleCategory::from_str(category.as_str());
            assert_eq!(parsed, Some(category));
        }
        assert_eq!(VehicleCategory::from_str("CAR"), Some(VehicleCategory::Car));
        assert_eq!(VehicleCategory::from_str("bicycle"), None);
    }
}
