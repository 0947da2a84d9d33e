//! Simulation engine for one trading day of restaurant service.

use thiserror::Error;

pub mod menu;
pub mod pantry;
pub mod restaurant;
pub mod transactions;

pub use menu::Menu;
pub use pantry::{Pantry, StockKey};
pub use restaurant::Restaurant;
pub use transactions::TransactionLog;

/// Recorded profit must exceed this before a donation is approved.
pub const DONATION_PROFIT_FLOOR: f64 = 50.0;

/// Markup applied to a dish's ingredient cost to get its menu price.
pub const PRICE_MARKUP: f64 = 1.2;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("dish not found: {0}")]
    DishNotFound(String),
    #[error("ingredient not found: {0}")]
    IngredientNotFound(String),
}

/// Outcome of a place-order call whose dish name resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderOutcome {
    /// Dish actually served, after substitution if any. None when every
    /// dish in the category failed the availability check.
    pub served: Option<String>,
    /// Whether the requested dish itself was available at request time.
    pub requested_available: bool,
}

impl OrderOutcome {
    pub fn is_served(&self) -> bool {
        self.served.is_some()
    }
}
