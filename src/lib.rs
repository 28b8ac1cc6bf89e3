//! # Campus Parking Service
//!
//! Occupancy, billing and reservation engine for a fixed-size parking lot,
//! exposed over a small REST API.
//!
//! ## Architecture
//!
//! - **domain**: core entities, status machines and the clock abstraction
//! - **application**: the engine and the stateful components it composes
//! - **interfaces**: REST API exposing the engine to the UI layer
//!
//! External callers go through [`application::ParkingEngine`] only; it
//! composes the slot registry, pricing table, billing calculator,
//! transaction ledger and reservation manager into atomic check-in,
//! check-out and reservation operations.

pub mod application;
pub mod config;
pub mod domain;
pub mod interfaces;

pub use application::{
    BillingCalculator, ParkingEngine, PricingTable, ReservationManager, SlotRegistry,
    TransactionLedger,
};
pub use config::{default_config_path, AppConfig};
pub use domain::{Clock, DomainError, DomainResult, SystemClock};

// Re-export the API router constructor
pub use interfaces::http::create_router;
