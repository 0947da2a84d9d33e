//! Immutable transaction records.

use serde::{Deserialize, Serialize};

/// What kind of attempt a transaction record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Order,
    Donation,
    Restock,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Order => write!(f, "order"),
            TransactionKind::Donation => write!(f, "donation"),
            TransactionKind::Restock => write!(f, "restock"),
        }
    }
}

/// One attempted order, donation, or restock and its outcome.
///
/// `profit_delta` is nonzero only on succeeded orders (positive) and
/// succeeded restocks (negative); every other record carries zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    /// Dish name for orders, ingredient name otherwise.
    pub subject: String,
    pub quantity: i64,
    pub profit_delta: f64,
    pub succeeded: bool,
}

impl TransactionRecord {
    pub fn success(
        kind: TransactionKind,
        subject: impl Into<String>,
        quantity: i64,
        profit_delta: f64,
    ) -> Self {
        Self {
            kind,
            subject: subject.into(),
            quantity,
            profit_delta,
            succeeded: true,
        }
    }

    pub fn failed(kind: TransactionKind, subject: impl Into<String>, quantity: i64) -> Self {
        Self {
            kind,
            subject: subject.into(),
            quantity,
            profit_delta: 0.0,
            succeeded: false,
        }
    }
}
