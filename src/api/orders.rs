use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub dish_name: String,
    pub quantity: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Dish as requested by the customer.
    pub dish_name: String,
    /// Dish actually served, absent when the whole category was exhausted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub served_dish: Option<String>,
    pub quantity: i64,
    /// Whether the requested dish was available at request time.
    pub was_available: bool,
    /// Recorded profit after this order was processed.
    pub total_profit: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitResponse {
    pub profit: f64,
}

pub async fn place_order(
    State(state): State<AppState>,
    Json(req): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    if req.quantity < 1 {
        return Err(AppError::BadRequest(
            "quantity must be at least 1".to_string(),
        ));
    }

    let mut restaurant = state.restaurant.write().await;
    let outcome = restaurant.place_order(&req.dish_name, req.quantity)?;

    Ok(Json(OrderResponse {
        dish_name: req.dish_name,
        served_dish: outcome.served,
        quantity: req.quantity,
        was_available: outcome.requested_available,
        total_profit: restaurant.total_profit(),
    }))
}

pub async fn current_profit(State(state): State<AppState>) -> Json<ProfitResponse> {
    let restaurant = state.restaurant.read().await;
    Json(ProfitResponse {
        profit: restaurant.total_profit(),
    })
}
