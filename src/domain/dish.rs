//! Dish and category records.

use serde::{Deserialize, Serialize};

/// A dish on the menu.
///
/// `ingredient_ids` may reference ids absent from the pantry; those
/// references contribute zero cost during pricing. `price` and
/// `profit_per_unit` are derived by the pricing pass and start at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    /// Denormalized copy of the owning category's name.
    pub category: String,
    pub ingredient_ids: Vec<u32>,
    pub price: f64,
    pub profit_per_unit: f64,
}

impl Dish {
    pub fn new(name: impl Into<String>, category: impl Into<String>, ingredient_ids: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ingredient_ids,
            price: 0.0,
            profit_per_unit: 0.0,
        }
    }
}

/// A named category holding dishes in substitution-traversal order.
///
/// Dishes are prepended during load, so traversal order is the reverse of
/// feed order. The substitution tie-break depends on this order.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub dishes: Vec<Dish>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dishes: Vec::new(),
        }
    }
}
