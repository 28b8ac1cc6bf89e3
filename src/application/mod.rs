//! Business logic: the parking engine and the stateful components it composes

pub mod billing;
pub mod engine;
pub mod ledger;
pub mod pricing;
pub mod reservations;
pub mod slots;

pub use billing::{BillingCalculator, CostQuote};
pub use engine::{CompletedStay, LotSummary, ParkingEngine};
pub use ledger::{CategoryRevenue, TransactionFilter, TransactionLedger};
pub use pricing::PricingTable;
pub use reservations::ReservationManager;
pub use slots::SlotRegistry;
