//! Parking slot domain entity

pub mod model;

pub use model::{Slot, Vehicle, VehicleCategory};
