//! Core business entities, types and traits

pub mod clock;
pub mod error;
pub mod pricing;
pub mod reservation;
pub mod slot;
pub mod transaction;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{DomainError, DomainResult, ErrorKind};
pub use pricing::PricingRate;
pub use reservation::{Reservation, ReservationStatus};
pub use slot::{Slot, Vehicle, VehicleCategory};
pub use transaction::Transaction;
