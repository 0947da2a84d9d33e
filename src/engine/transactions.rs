//! Append-only record of the day's attempted transactions.

use crate::domain::TransactionRecord;

/// The transaction ledger.
///
/// Records are appended in operation order and never reordered or removed
/// except by a full reset. The profit figure is always a fold over the
/// current records, never cached.
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    records: Vec<TransactionRecord>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// Clear every record. All-or-nothing.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of profit deltas over all current records.
    pub fn total_profit(&self) -> f64 {
        self.records.iter().map(|r| r.profit_delta).sum()
    }
}
