//! Hourly pricing rate entity

use rust_decimal::Decimal;

use super::super::slot::VehicleCategory;

/// Hourly rate for one vehicle category.
///
/// Exactly one rate exists per category at all times; operators mutate the
/// rate in place through the pricing table, never delete it.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRate {
    pub category: VehicleCategory,
    pub hourly_rate: Decimal,
}

impl PricingRate {
    pub fn new(category: VehicleCategory, hourly_rate: Decimal) -> Self {
        Self {
            category,
            hourly_rate,
        }
    }
}
