//! The dish catalog and its derived pricing.

use crate::domain::{Category, Dish};
use crate::engine::{Pantry, PRICE_MARKUP};

/// The menu: categories in load order, dishes within a category in
/// load-reversed order.
///
/// Dishes are prepended as they are inserted, so a category's traversal
/// order is the reverse of the feed order. That order decides which dish is
/// tried first when an order falls back to substitution, so it is part of
/// the menu's contract rather than an implementation detail.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    categories: Vec<Category>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn dish_count(&self) -> usize {
        self.categories.iter().map(|c| c.dishes.len()).sum()
    }

    /// Every dish, categories in load order, dishes in traversal order.
    pub fn iter_dishes(&self) -> impl Iterator<Item = &Dish> {
        self.categories.iter().flat_map(|c| c.dishes.iter())
    }

    /// Append a category and return its index.
    pub fn add_category(&mut self, name: impl Into<String>) -> usize {
        self.categories.push(Category::new(name));
        self.categories.len() - 1
    }

    /// Prepend a dish to the category's traversal order. Out-of-range
    /// indices are ignored.
    pub fn insert_dish(&mut self, category_index: usize, dish: Dish) {
        if let Some(category) = self.categories.get_mut(category_index) {
            category.dishes.insert(0, dish);
        }
    }

    /// Case-insensitive category lookup in load order.
    pub fn find_category_index(&self, name: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive dish lookup; first match in traversal order.
    pub fn find_dish(&self, name: &str) -> Option<&Dish> {
        self.locate_dish(name)
            .map(|(cat, pos)| &self.categories[cat].dishes[pos])
    }

    /// Like [`find_dish`](Self::find_dish), but returns the dish's
    /// (category index, position) so callers can continue the traversal.
    pub fn locate_dish(&self, name: &str) -> Option<(usize, usize)> {
        for (cat, category) in self.categories.iter().enumerate() {
            if let Some(pos) = category
                .dishes
                .iter()
                .position(|d| d.name.eq_ignore_ascii_case(name))
            {
                return Some((cat, pos));
            }
        }
        None
    }

    /// Dishes in the named category, or an empty slice for an unknown name.
    pub fn dishes_in(&self, category_name: &str) -> &[Dish] {
        self.find_category_index(category_name)
            .map(|idx| self.categories[idx].dishes.as_slice())
            .unwrap_or(&[])
    }

    /// Recompute every dish's price and profit from current pantry costs.
    ///
    /// cost = sum of unit costs over the dish's ingredient ids that resolve
    /// in the pantry (a dangling id contributes zero); price = cost with the
    /// standard markup; profit = price - cost. Idempotent for a fixed
    /// pantry.
    pub fn reprice(&mut self, pantry: &Pantry) {
        for category in &mut self.categories {
            for dish in &mut category.dishes {
                let cost: f64 = dish
                    .ingredient_ids
                    .iter()
                    .filter_map(|id| pantry.find_by_id(*id))
                    .map(|ing| ing.unit_cost)
                    .sum();
                dish.price = cost * PRICE_MARKUP;
                dish.profit_per_unit = dish.price - cost;
            }
        }
    }
}
