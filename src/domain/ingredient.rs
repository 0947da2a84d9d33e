//! Ingredient records owned by the pantry.

use serde::{Deserialize, Serialize};

/// A single pantry ingredient.
///
/// Ids are unique within a pantry; names are not guaranteed unique. Stock
/// has no enforced lower bound here — callers debit only after an
/// availability check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u32,
    pub name: String,
    pub stock_level: i64,
    pub unit_cost: f64,
}

impl Ingredient {
    pub fn new(id: u32, name: impl Into<String>, stock_level: i64, unit_cost: f64) -> Self {
        Self {
            id,
            name: name.into(),
            stock_level,
            unit_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_all_fields() {
        let ing = Ingredient::new(101, "Flour", 10, 2.0);
        assert_eq!(ing.id, 101);
        assert_eq!(ing.name, "Flour");
        assert_eq!(ing.stock_level, 10);
        assert_eq!(ing.unit_cost, 2.0);
    }
}
