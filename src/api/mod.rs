pub mod health;
pub mod inventory;
pub mod menu;
pub mod orders;
pub mod transactions;

use crate::engine::Restaurant;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

/// Shared handler state: the one restaurant instance behind a single lock.
///
/// Every mutating operation takes the write lock for its full
/// read-decide-mutate-append span; pure reads share the read lock.
#[derive(Clone)]
pub struct AppState {
    pub restaurant: Arc<RwLock<Restaurant>>,
}

impl AppState {
    pub fn new(restaurant: Restaurant) -> Self {
        Self {
            restaurant: Arc::new(RwLock::new(restaurant)),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/menu/dishes", get(menu::list_dishes))
        .route("/v1/menu/categories", get(menu::list_categories))
        .route(
            "/v1/menu/categories/:category/dishes",
            get(menu::dishes_by_category),
        )
        .route("/v1/orders", post(orders::place_order))
        .route("/v1/orders/profit", get(orders::current_profit))
        .route("/v1/inventory", get(inventory::list_ingredients))
        .route(
            "/v1/inventory/:name",
            get(inventory::get_stock).put(inventory::adjust_stock),
        )
        .route("/v1/inventory/restock", post(inventory::restock))
        .route("/v1/inventory/donate", post(inventory::donate))
        .route("/v1/transactions", get(transactions::list_transactions))
        .route("/v1/transactions/reset", post(transactions::reset))
        .layer(cors)
        .with_state(state)
}
