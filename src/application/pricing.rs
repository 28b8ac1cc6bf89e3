//! Pricing table: one mutable hourly rate per vehicle category

use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{DomainError, DomainResult, PricingRate, VehicleCategory};

/// Operator-mutable map of category to hourly rate.
pub struct PricingTable {
    rates: DashMap<VehicleCategory, Decimal>,
}

impl PricingTable {
    /// Empty table. Seed every category before serving traffic;
    /// `rate_for` on a missing category is an error.
    pub fn new() -> Self {
        Self {
            rates: DashMap::new(),
        }
    }

    /// Table with a rate for each supplied category.
    pub fn seeded<I>(rates: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (VehicleCategory, Decimal)>,
    {
        let table = Self::new();
        for (category, rate) in rates {
            table.set_rate(category, rate)?;
        }
        Ok(table)
    }

    /// Set the hourly rate for a category, rejecting negative values.
    pub fn set_rate(
        &self,
        category: VehicleCategory,
        hourly_rate: Decimal,
    ) -> DomainResult<PricingRate> {
        if hourly_rate < Decimal::ZERO {
            return Err(DomainError::NegativeRate);
        }
        self.rates.insert(category, hourly_rate);
        info!(category = %category, rate = %hourly_rate, "hourly rate updated");
        Ok(PricingRate::new(category, hourly_rate))
    }

    pub fn rate_for(&self, category: VehicleCategory) -> DomainResult<Decimal> {
        self.rates
            .get(&category)
            .map(|rate| *rate)
            .ok_or_else(|| DomainError::UnknownCategory(category.to_string()))
    }

    /// All registered rates, in category display order.
    pub fn list(&self) -> Vec<PricingRate> {
        VehicleCategory::ALL
            .iter()
            .filter_map(|&category| {
                self.rates
                    .get(&category)
                    .map(|rate| PricingRate::new(category, *rate))
            })
            .collect()
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ──────────────────────────────────────────────────────
