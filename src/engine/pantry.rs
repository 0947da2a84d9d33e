//! Bucket-chained ingredient store with id and name lookup.

use crate::domain::Ingredient;

/// Selects an ingredient for a stock adjustment, by id or by name.
#[derive(Debug, Clone, Copy)]
pub enum StockKey<'a> {
    Id(u32),
    Name(&'a str),
}

/// The ingredient ledger.
///
/// Ingredients live in a fixed number of buckets chosen at load time,
/// partitioned by `id % bucket_count`. New ingredients are prepended to
/// their bucket's chain, so each chain reads most-recent-first. Name lookup
/// deliberately scans every bucket in ascending index order; with duplicate
/// names the first match under (bucket index, chain position) wins.
#[derive(Debug, Clone)]
pub struct Pantry {
    buckets: Vec<Vec<Ingredient>>,
}

impl Pantry {
    /// Create a pantry with `bucket_count` chains (clamped to at least 1).
    pub fn new(bucket_count: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); bucket_count.max(1)],
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Insert an ingredient at the front of its bucket's chain.
    pub fn add(&mut self, ingredient: Ingredient) {
        let index = ingredient.id as usize % self.buckets.len();
        self.buckets[index].insert(0, ingredient);
    }

    /// Look up an ingredient by id within its hash bucket.
    pub fn find_by_id(&self, id: u32) -> Option<&Ingredient> {
        let index = id as usize % self.buckets.len();
        self.buckets[index].iter().find(|ing| ing.id == id)
    }

    /// Case-insensitive name lookup across all buckets.
    pub fn find_by_name(&self, name: &str) -> Option<&Ingredient> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter())
            .find(|ing| ing.name.eq_ignore_ascii_case(name))
    }

    /// Add `delta` (may be negative) to the matching ingredient's stock.
    ///
    /// A key that matches nothing is a silent no-op, never an error.
    /// Callers that need an existence guarantee must look the ingredient up
    /// first.
    pub fn adjust(&mut self, key: StockKey<'_>, delta: i64) {
        let target = match key {
            StockKey::Id(id) => {
                let index = id as usize % self.buckets.len();
                self.buckets[index].iter_mut().find(|ing| ing.id == id)
            }
            StockKey::Name(name) => self
                .buckets
                .iter_mut()
                .flat_map(|bucket| bucket.iter_mut())
                .find(|ing| ing.name.eq_ignore_ascii_case(name)),
        };
        if let Some(ingredient) = target {
            ingredient.stock_level += delta;
        }
    }

    /// All ingredient names in (bucket index, chain position) order.
    pub fn ingredient_names(&self) -> Vec<String> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter())
            .map(|ing| ing.name.clone())
            .collect()
    }
}
