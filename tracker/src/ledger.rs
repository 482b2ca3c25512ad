//! In-memory savings ledger.
//!
//! The store owns one [`Ledger`] and keeps its invariants: every entry's day
//! is a real day of its month, amounts never go negative, and zero-amount
//! entries are retained once created. Mutation is additive only -- replaying
//! the same delta accumulates again. A caller that wants to overwrite a
//! day's value must first subtract the existing one.
//!
//! The store is synchronous and single-writer by design; wrap it in a mutex
//! or hand it to one task if it ever needs to be shared across threads.

use crate::calendar;
use shared::{Ledger, MonthKey, MonthLedger};
use thiserror::Error;
use tracing::debug;

/// Boundary errors for ledger mutation. Nothing here is fatal: the caller
/// shows the message inline and the ledger stays as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("day {day} is not a valid day of month {key}")]
    InvalidDay { key: MonthKey, day: u32 },
    #[error("saving for day {day} cannot go below zero (would be {amount:.2} PKR)")]
    NegativeAmount { key: MonthKey, day: u32, amount: f64 },
}

/// Mapping from month key to that month's day-to-amount entries, for one user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerStore {
    ledger: Ledger,
}

impl LedgerStore {
    /// Empty store, created on first load for a user.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a ledger that came back from the remote store.
    pub fn from_ledger(ledger: Ledger) -> Self {
        Self { ledger }
    }

    /// The full ledger, as persisted wholesale on every save.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Entries for one month; an empty mapping if nothing was ever recorded.
    /// Never fails.
    pub fn month(&self, key: MonthKey) -> MonthLedger {
        self.ledger.month(&key).cloned().unwrap_or_default()
    }

    /// Add `delta` to the existing value at `day` (prior value defaults to 0)
    /// and return the new value.
    ///
    /// Accumulation is unconditional: calling this twice with the same delta
    /// doubles the contribution. Deltas may be negative (corrections), but
    /// the resulting value must stay >= 0; a delta that would push it below
    /// zero is rejected and nothing changes.
    pub fn add(&mut self, key: MonthKey, day: u32, delta: f64) -> Result<f64, LedgerError> {
        if day == 0 || day > calendar::days_in_month(key.month0, key.year) {
            return Err(LedgerError::InvalidDay { key, day });
        }

        let month = self.ledger.months.entry(key).or_default();
        let current = month.get(&day).copied().unwrap_or(0.0);
        let updated = current + delta;
        if updated < 0.0 {
            return Err(LedgerError::NegativeAmount { key, day, amount: updated });
        }

        // Zero results are stored, not pruned
        month.insert(day, updated);
        debug!("ledger update: {} day {} now {:.2} PKR", key, day, updated);
        Ok(updated)
    }

    /// Replace the whole ledger, e.g. after a fresh remote load.
    pub fn replace(&mut self, ledger: Ledger) {
        self.ledger = ledger;
    }
}
