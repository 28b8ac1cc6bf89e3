//! Append-only transaction ledger and its derived reports
//!
//! Records are never updated or deleted once written. Reports are pure
//! reductions over a fresh scan on every call; nothing is cached.

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Transaction, VehicleCategory};

/// Filter for ledger queries. An empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Exact plate match, case-insensitive
    pub plate_number: Option<String>,
    /// Inclusive lower bound on check-out time
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on check-out time
    pub to: Option<DateTime<Utc>>,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(plate) = &self.plate_number {
            if !transaction.plate_number.eq_ignore_ascii_case(plate) {
                return false;
            }
        }
        if let Some(from) = self.from {
            if transaction.check_out_time < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if transaction.check_out_time > to {
                return false;
            }
        }
        true
    }
}

/// Revenue aggregated for one vehicle category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRevenue {
    pub category: VehicleCategory,
    pub revenue: Decimal,
    pub stays: usize,
}

/// Append-only record of completed stays.
#[derive(Default)]
pub struct TransactionLedger {
    transactions: DashMap<Uuid, Transaction>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Append a transaction. There is no update or delete counterpart.
    pub fn record(&self, transaction: Transaction) -> DomainResult<()> {
        match self.transactions.entry(transaction.id) {
            Entry::Occupied(_) => Err(DomainError::DuplicateTransactionId(transaction.id)),
            Entry::Vacant(vacant) => {
                debug!(transaction_id = %transaction.id, slot_id = transaction.slot_id, "transaction recorded");
                vacant.insert(transaction);
                Ok(())
            }
        }
    }

    /// Matching transactions, ordered by check-out time ascending.
    ///
    /// Every call re-scans the full ledger; no cursor state is kept
    /// between calls.
    pub fn query(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        let mut transactions: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|t| filter.matches(t))
            .map(|t| t.clone())
            .collect();
        transactions.sort_by_key(|t| (t.check_out_time, t.id));
        transactions
    }

    pub fn total_revenue(&self, filter: &TransactionFilter) -> Decimal {
        self.query(filter).iter().map(|t| t.cost).sum()
    }

    /// Revenue and stay count per category, omitting categories with no
    /// matching stays, in category display order.
    pub fn revenue_by_category(&self, filter: &TransactionFilter) -> Vec<CategoryRevenue> {
        let transactions = self.query(filter);
        VehicleCategory::ALL
            .iter()
            .filter_map(|&category| {
                let stays: Vec<&Transaction> = transactions
                    .iter()
                    .filter(|t| t.category == category)
                    .collect();
                if stays.is_empty() {
                    return None;
                }
                Some(CategoryRevenue {
                    category,
                    revenue: stays.iter().map(|t| t.cost).sum(),
                    stays: stays.len(),
                })
            })
            .collect()
    }

    /// Mean stay duration in hours; `None` for an empty selection.
    pub fn average_duration(&self, filter: &TransactionFilter) -> Option<Decimal> {
        let transactions = self.query(filter);
        if transactions.is_empty() {
            return None;
        }
        let total: Decimal = transactions.iter().map(|t| t.duration_hours).sum();
        Some(total / Decimal::from(transactions.len() as u64))
    }
}

// ── Tests ──────────────────────────────────────────────────────
