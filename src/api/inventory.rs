use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::engine::StockKey;
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDto {
    pub id: u32,
    pub name: String,
    pub stock_level: i64,
    pub unit_cost: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyRequest {
    pub ingredient_name: String,
    pub quantity: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyResponse {
    pub succeeded: bool,
    pub total_profit: f64,
}

#[derive(Debug, Deserialize)]
pub struct AdjustQuery {
    pub amount: i64,
}

pub async fn list_ingredients(State(state): State<AppState>) -> Json<Vec<String>> {
    let restaurant = state.restaurant.read().await;
    Json(restaurant.pantry().ingredient_names())
}

pub async fn get_stock(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StockDto>, AppError> {
    let restaurant = state.restaurant.read().await;
    let ingredient = restaurant
        .pantry()
        .find_by_name(&name)
        .ok_or_else(|| AppError::NotFound(format!("ingredient {name}")))?;
    Ok(Json(StockDto {
        id: ingredient.id,
        name: ingredient.name.clone(),
        stock_level: ingredient.stock_level,
        unit_cost: ingredient.unit_cost,
    }))
}

/// Apply a signed stock delta. Matches the ledger's adjustment contract: an
/// unknown name is a silent no-op, not an error.
pub async fn adjust_stock(
    Path(name): Path<String>,
    Query(query): Query<AdjustQuery>,
    State(state): State<AppState>,
) -> StatusCode {
    let mut restaurant = state.restaurant.write().await;
    restaurant.adjust_stock(StockKey::Name(&name), query.amount);
    StatusCode::OK
}

pub async fn restock(
    State(state): State<AppState>,
    Json(req): Json<SupplyRequest>,
) -> Result<Json<SupplyResponse>, AppError> {
    if req.quantity < 1 {
        return Err(AppError::BadRequest(
            "quantity must be at least 1".to_string(),
        ));
    }
    let mut restaurant = state.restaurant.write().await;
    let succeeded = restaurant.restock(&req.ingredient_name, req.quantity)?;
    Ok(Json(SupplyResponse {
        succeeded,
        total_profit: restaurant.total_profit(),
    }))
}

pub async fn donate(
    State(state): State<AppState>,
    Json(req): Json<SupplyRequest>,
) -> Result<Json<SupplyResponse>, AppError> {
    if req.quantity < 1 {
        return Err(AppError::BadRequest(
            "quantity must be at least 1".to_string(),
        ));
    }
    let mut restaurant = state.restaurant.write().await;
    let succeeded = restaurant.donate(&req.ingredient_name, req.quantity)?;
    Ok(Json(SupplyResponse {
        succeeded,
        total_profit: restaurant.total_profit(),
    }))
}
