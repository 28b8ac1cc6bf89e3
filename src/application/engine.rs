//! Parking engine: the single façade external callers invoke
//!
//! Composes the slot registry, pricing table, billing calculator,
//! transaction ledger and reservation manager. Check-out is the one
//! multi-component sequence: the stay is priced and its transaction
//! appended to the ledger under the slot's guard, before occupancy is
//! cleared, so a failure at any step leaves every component unchanged.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    Clock, DomainError, DomainResult, PricingRate, Reservation, ReservationStatus, Slot,
    Transaction, VehicleCategory,
};

use super::billing::{BillingCalculator, CostQuote};
use super::ledger::{CategoryRevenue, TransactionFilter, TransactionLedger};
use super::pricing::PricingTable;
use super::reservations::ReservationManager;
use super::slots::SlotRegistry;

/// Result of a committed check-out.
#[derive(Debug, Clone)]
pub struct CompletedStay {
    /// The slot, now free
    pub slot: Slot,
    /// The ledger record for the stay
    pub transaction: Transaction,
}

/// Point-in-time lot overview for dashboards.
#[derive(Debug, Clone)]
pub struct LotSummary {
    pub total_slots: usize,
    pub occupied_slots: usize,
    /// Occupied share of the lot, in percent
    pub occupancy_rate: f64,
    pub completed_stays: usize,
    pub total_revenue: Decimal,
    pub average_duration_hours: Option<Decimal>,
    pub revenue_by_category: Vec<CategoryRevenue>,
    pub pending_reservations: usize,
    pub confirmed_reservations: usize,
    pub cancelled_reservations: usize,
    pub completed_reservations: usize,
}

pub struct ParkingEngine {
    slots: Arc<SlotRegistry>,
    pricing: Arc<PricingTable>,
    billing: BillingCalculator,
    ledger: Arc<TransactionLedger>,
    reservations: Arc<ReservationManager>,
    clock: Arc<dyn Clock>,
}

impl ParkingEngine {
    /// Build an engine over a fresh lot of `slot_count` slots, seeding the
    /// pricing table so every category has a rate from the start.
    pub fn new(
        slot_count: u32,
        seed_rates: impl IntoIterator<Item = (VehicleCategory, Decimal)>,
        billing: BillingCalculator,
        clock: Arc<dyn Clock>,
    ) -> DomainResult<Self> {
        let slots = Arc::new(SlotRegistry::new(slot_count));
        let pricing = Arc::new(PricingTable::seeded(seed_rates)?);
        let reservations = Arc::new(ReservationManager::new(Arc::clone(&slots)));
        Ok(Self {
            slots,
            pricing,
            billing,
            ledger: Arc::new(TransactionLedger::new()),
            reservations,
            clock,
        })
    }

    // ── Stays ──────────────────────────────────────────────────

    /// Record a vehicle's occupancy of a free slot.
    pub fn check_in_vehicle(
        &self,
        slot_id: u32,
        plate_number: &str,
        category: VehicleCategory,
    ) -> DomainResult<Slot> {
        self.slots
            .check_in(slot_id, plate_number, category, self.clock.now())
    }

    /// Cost preview for the occupant of `slot_id`, priced as if the stay
    /// ended now. Nothing is mutated; callers confirm with
    /// [`check_out_vehicle`](Self::check_out_vehicle).
    pub fn quote_check_out(&self, slot_id: u32) -> DomainResult<CostQuote> {
        let slot = self
            .slots
            .get(slot_id)
            .ok_or(DomainError::SlotNotFound(slot_id))?;
        let vehicle = slot
            .occupant()
            .ok_or(DomainError::SlotNotOccupied(slot_id))?;
        let rate = self.pricing.rate_for(vehicle.category)?;
        self.billing
            .compute_cost(vehicle.check_in_time, self.clock.now(), rate)
    }

    /// End the stay on `slot_id`: price it, append the transaction to the
    /// ledger, then free the slot. All-or-nothing; the ledger is written
    /// before occupancy is cleared.
    pub fn check_out_vehicle(&self, slot_id: u32) -> DomainResult<CompletedStay> {
        let now = self.clock.now();
        let (slot, transaction) = self.slots.check_out_with(slot_id, |vehicle| {
            let rate = self.pricing.rate_for(vehicle.category)?;
            let quote = self
                .billing
                .compute_cost(vehicle.check_in_time, now, rate)?;
            let transaction = Transaction::new(
                Uuid::new_v4(),
                slot_id,
                vehicle.plate_number.clone(),
                vehicle.category,
                vehicle.check_in_time,
                now,
                quote.duration_hours,
                quote.cost,
            );
            self.ledger.record(transaction.clone())?;
            Ok(transaction)
        })?;
        info!(
            slot_id,
            transaction_id = %transaction.id,
            cost = %transaction.cost,
            "stay completed"
        );
        Ok(CompletedStay { slot, transaction })
    }

    // ── Pricing ────────────────────────────────────────────────

    pub fn set_rate(
        &self,
        category: VehicleCategory,
        hourly_rate: Decimal,
    ) -> DomainResult<PricingRate> {
        self.pricing.set_rate(category, hourly_rate)
    }

    pub fn list_rates(&self) -> Vec<PricingRate> {
        self.pricing.list()
    }

    // ── Reservations ───────────────────────────────────────────

    pub fn create_reservation(
        &self,
        requester_id: &str,
        plate_number: &str,
        category: VehicleCategory,
        slot_id: u32,
        scheduled_for: DateTime<Utc>,
    ) -> DomainResult<Reservation> {
        self.reservations.create(
            requester_id,
            plate_number,
            category,
            slot_id,
            scheduled_for,
            self.clock.now(),
        )
    }

    pub fn update_reservation_status(
        &self,
        reservation_id: i64,
        next: ReservationStatus,
    ) -> DomainResult<Reservation> {
        self.reservations.update_status(reservation_id, next)
    }

    pub fn list_reservations_for(&self, requester_id: &str) -> Vec<Reservation> {
        self.reservations.list_for(requester_id)
    }

    pub fn list_reservations(&self, status: Option<ReservationStatus>) -> Vec<Reservation> {
        self.reservations.list_all(status)
    }

    // ── Queries & reporting ────────────────────────────────────

    pub fn list_slots(&self) -> Vec<Slot> {
        self.slots.list()
    }

    pub fn list_transactions(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        self.ledger.query(filter)
    }

    /// Recomputed on every call; nothing here is cached.
    pub fn summary(&self) -> LotSummary {
        let total_slots = self.slots.len();
        let occupied_slots = self.slots.occupied_count();
        let occupancy_rate = if total_slots == 0 {
            0.0
        } else {
            occupied_slots as f64 / total_slots as f64 * 100.0
        };
        let filter = TransactionFilter::default();
        LotSummary {
            total_slots,
            occupied_slots,
            occupancy_rate,
            completed_stays: self.ledger.len(),
            total_revenue: self.ledger.total_revenue(&filter),
            average_duration_hours: self.ledger.average_duration(&filter),
            revenue_by_category: self.ledger.revenue_by_category(&filter),
            pending_reservations: self
                .reservations
                .count_with_status(ReservationStatus::Pending),
            confirmed_reservations: self
                .reservations
                .count_with_status(ReservationStatus::Confirmed),
            cancelled_reservations: self
                .reservations
                .count_with_status(ReservationStatus::Cancelled),
            completed_reservations: self
                .reservations
                .count_with_status(ReservationStatus::Completed),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
