//! Reservation domain entity

pub mod model;

pub use model::{Reservation, ReservationStatus};
