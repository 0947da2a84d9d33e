//! The aggregate engine: pantry + menu + transaction log + tables.

use crate::domain::{TransactionKind, TransactionRecord};
use crate::engine::{
    EngineError, Menu, OrderOutcome, Pantry, StockKey, TransactionLog, DONATION_PROFIT_FLOOR,
};

/// One restaurant, open for one trading day.
///
/// Owns all mutable state and serializes every read-decide-mutate-append
/// sequence behind its `&mut self` methods; callers serving concurrent
/// requests hold the instance behind a single lock and take it exclusively
/// for the duration of each mutating call.
#[derive(Debug, Clone)]
pub struct Restaurant {
    pantry: Pantry,
    menu: Menu,
    transactions: TransactionLog,
    table_capacities: Vec<u32>,
}

impl Restaurant {
    /// Assemble a restaurant from loader outputs and run the pricing pass.
    pub fn open(mut menu: Menu, pantry: Pantry, table_capacities: Vec<u32>) -> Self {
        menu.reprice(&pantry);
        Self {
            pantry,
            menu,
            transactions: TransactionLog::new(),
            table_capacities,
        }
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn transactions(&self) -> &TransactionLog {
        &self.transactions
    }

    pub fn table_capacities(&self) -> &[u32] {
        &self.table_capacities
    }

    pub fn total_profit(&self) -> f64 {
        self.transactions.total_profit()
    }

    /// Add a signed delta to an ingredient's stock; silent no-op when the
    /// key matches nothing.
    pub fn adjust_stock(&mut self, key: StockKey<'_>, delta: i64) {
        self.pantry.adjust(key, delta);
    }

    /// Clear the transaction ledger.
    pub fn reset_transactions(&mut self) {
        self.transactions.reset();
    }

    /// Whether `qty` servings of the named dish can be prepared right now.
    ///
    /// True iff every ingredient the dish references resolves in the pantry
    /// with stock at or above `qty`. A dangling ingredient id makes the dish
    /// unavailable.
    pub fn check_availability(&self, dish_name: &str, qty: i64) -> Result<bool, EngineError> {
        let dish = self
            .menu
            .find_dish(dish_name)
            .ok_or_else(|| EngineError::DishNotFound(dish_name.to_string()))?;
        Ok(self.on_hand(&dish.ingredient_ids, qty))
    }

    /// Attempt to serve `qty` of the named dish, substituting within its
    /// category when the dish itself cannot be prepared.
    ///
    /// When the requested dish is unavailable, its category is walked in
    /// traversal order starting at the requested dish and wrapping around to
    /// the category head, so every dish is visited exactly once and the
    /// requested dish contributes the first failed record. The first dish
    /// that passes the availability check is served: one succeeded record,
    /// stock debited by `qty` for each of its ingredients. Every dish that
    /// fails the check gets one failed record and no stock change. An
    /// exhausted category is a normal unsuccessful outcome, not an error.
    pub fn place_order(&mut self, dish_name: &str, qty: i64) -> Result<OrderOutcome, EngineError> {
        let (cat, pos) = self
            .menu
            .locate_dish(dish_name)
            .ok_or_else(|| EngineError::DishNotFound(dish_name.to_string()))?;

        if self.available_at(cat, pos, qty) {
            let served = self.serve(cat, pos, qty);
            return Ok(OrderOutcome {
                served: Some(served),
                requested_available: true,
            });
        }

        let dish_count = self.menu.categories()[cat].dishes.len();
        for candidate in (pos..dish_count).chain(0..pos) {
            if self.available_at(cat, candidate, qty) {
                let served = self.serve(cat, candidate, qty);
                return Ok(OrderOutcome {
                    served: Some(served),
                    requested_available: false,
                });
            }
            let name = self.menu.categories()[cat].dishes[candidate].name.clone();
            self.transactions
                .append(TransactionRecord::failed(TransactionKind::Order, name, qty));
        }

        Ok(OrderOutcome {
            served: None,
            requested_available: false,
        })
    }

    /// Give away `qty` of an ingredient, gated on accumulated profit.
    ///
    /// Approved only when recorded profit (evaluated before this record is
    /// appended) exceeds the donation floor and stock covers the quantity.
    /// Returns whether the donation went through; the attempt is recorded
    /// either way.
    pub fn donate(&mut self, ingredient_name: &str, qty: i64) -> Result<bool, EngineError> {
        let stock = self
            .pantry
            .find_by_name(ingredient_name)
            .map(|ing| ing.stock_level)
            .ok_or_else(|| EngineError::IngredientNotFound(ingredient_name.to_string()))?;

        let approved = self.transactions.total_profit() > DONATION_PROFIT_FLOOR && stock >= qty;
        if approved {
            self.pantry.adjust(StockKey::Name(ingredient_name), -qty);
            self.transactions.append(TransactionRecord::success(
                TransactionKind::Donation,
                ingredient_name,
                qty,
                0.0,
            ));
        } else {
            self.transactions.append(TransactionRecord::failed(
                TransactionKind::Donation,
                ingredient_name,
                qty,
            ));
        }
        Ok(approved)
    }

    /// Buy `qty` more of an ingredient, gated on accumulated profit.
    ///
    /// The purchase costs `unit_cost * qty` and is approved only when
    /// recorded profit exceeds that cost; a successful restock credits stock
    /// and appends a record with a negative profit delta. Returns whether
    /// the restock went through; the attempt is recorded either way.
    pub fn restock(&mut self, ingredient_name: &str, qty: i64) -> Result<bool, EngineError> {
        let unit_cost = self
            .pantry
            .find_by_name(ingredient_name)
            .map(|ing| ing.unit_cost)
            .ok_or_else(|| EngineError::IngredientNotFound(ingredient_name.to_string()))?;

        let cost = unit_cost * qty as f64;
        let approved = self.transactions.total_profit() > cost;
        if approved {
            self.pantry.adjust(StockKey::Name(ingredient_name), qty);
            self.transactions.append(TransactionRecord::success(
                TransactionKind::Restock,
                ingredient_name,
                qty,
                -cost,
            ));
        } else {
            self.transactions.append(TransactionRecord::failed(
                TransactionKind::Restock,
                ingredient_name,
                qty,
            ));
        }
        Ok(approved)
    }

    fn on_hand(&self, ingredient_ids: &[u32], qty: i64) -> bool {
        ingredient_ids
            .iter()
            .all(|id| matches!(self.pantry.find_by_id(*id), Some(ing) if ing.stock_level >= qty))
    }

    fn available_at(&self, cat: usize, pos: usize, qty: i64) -> bool {
        let dish = &self.menu.categories()[cat].dishes[pos];
        self.on_hand(&dish.ingredient_ids, qty)
    }

    /// Record the successful order and debit every referenced ingredient.
    fn serve(&mut self, cat: usize, pos: usize, qty: i64) -> String {
        let (name, ids, profit_per_unit) = {
            let dish = &self.menu.categories()[cat].dishes[pos];
            (
                dish.name.clone(),
                dish.ingredient_ids.clone(),
                dish.profit_per_unit,
            )
        };
        self.transactions.append(TransactionRecord::success(
            TransactionKind::Order,
            name.clone(),
            qty,
            profit_per_unit * qty as f64,
        ));
        for id in &ids {
            self.pantry.adjust(StockKey::Id(*id), -qty);
        }
        name
    }
}
