//! Stay cost computation
//!
//! Duration is billed in fractional hours with no minimum charge and no
//! rounding to currency increments; the product is exact. An optional
//! rounding policy from configuration rounds the final cost to a fixed
//! number of decimal places.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::{DomainError, DomainResult};

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Priced preview of a stay interval.
#[derive(Debug, Clone, PartialEq)]
pub struct CostQuote {
    /// Stay length in fractional hours
    pub duration_hours: Decimal,
    /// `duration_hours * hourly_rate`, rounded only if a policy is set
    pub cost: Decimal,
}

/// Stateless fare calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct BillingCalculator {
    rounding_decimals: Option<u32>,
}

impl BillingCalculator {
    /// `rounding_decimals: None` keeps the exact product.
    pub fn new(rounding_decimals: Option<u32>) -> Self {
        Self { rounding_decimals }
    }

    /// Price the interval `[check_in, check_out]` at `hourly_rate`.
    ///
    /// Partial hours are billed proportionally; a zero-length interval
    /// costs zero. Fails when the interval ends before it starts.
    pub fn compute_cost(
        &self,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
        hourly_rate: Decimal,
    ) -> DomainResult<CostQuote> {
        if check_out < check_in {
            return Err(DomainError::InvalidInterval);
        }
        let millis = (check_out - check_in).num_milliseconds();
        let duration_hours = Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR);
        let mut cost = duration_hours * hourly_rate;
        if let Some(dp) = self.rounding_decimals {
            cost = cost.round_dp(dp);
        }
        Ok(CostQuote {
            duration_hours,
            cost,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn two_and_a_half_hours_at_fifty() {
        let calc = BillingCalculator::default();
        let quote = calc
            .compute_cost(t0(), t0() + Duration::minutes(150), Decimal::from(50))
            .unwrap();
        assert_eq!(quote.duration_hours, Decimal::new(25, 1));
        assert_eq!(quote.cost, Decimal::from(125));
    }

    #[test]
    fn ninety_minutes_at_fifty() {
        let calc = BillingCalculator::default();
        let quote = calc
            .compute_cost(t0(), t0() + Duration::minutes(90), Decimal::from(50))
            .unwrap();
        assert_eq!(quote.duration_hours, Decimal::new(15, 1));
        assert_eq!(quote.cost, Decimal::from(75));
    }

    #[test]
    fn zero_duration_costs_zero() {
        let calc = BillingCalculator::default();
        let quote = calc.compute_cost(t0(), t0(), Decimal::from(50)).unwrap();
        assert_eq!(quote.duration_hours, Decimal::ZERO);
        assert_eq!(quote.cost, Decimal::ZERO);
    }

    #[test]
    fn end_before_start_fails() {
        let calc = BillingCalculator::default();
        let err = calc
            .compute_cost(t0(), t0() - Duration::hours(1), Decimal::from(50))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInterval));
    }

    #[test]
    fn partial_hours_bill_proportionally() {
        let calc = BillingCalculator::default();
        let quote = calc
            .compute_cost(t0(), t0() + Duration::minutes(15), Decimal::from(100))
            .unwrap();
        assert_eq!(quote.cost, Decimal::from(25));
    }

    #[test]
    fn rounding_policy_rounds_cost_only() {
        let calc = BillingCalculator::new(Some(2));
        let quote = calc
            .compute_cost(t0(), t0() + Duration::minutes(20), Decimal::from(50))
            .unwrap();
        // exact product is 16.666..., policy rounds to 2 places
        assert_eq!(quote.cost, "16.67".parse::<Decimal>().unwrap());
    }
}
