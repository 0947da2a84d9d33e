//! Domain types for the restaurant simulation.
//!
//! This module provides:
//! - Ingredient records with mutable stock levels
//! - Dish and Category records with derived pricing
//! - Immutable transaction records for the day's ledger

pub mod dish;
pub mod ingredient;
pub mod transaction;

pub use dish::{Category, Dish};
pub use ingredient::Ingredient;
pub use transaction::{TransactionKind, TransactionRecord};
