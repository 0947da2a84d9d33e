use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use super::AppState;
use crate::domain::Dish;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DishDto {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub profit: f64,
}

impl From<&Dish> for DishDto {
    fn from(dish: &Dish) -> Self {
        Self {
            name: dish.name.clone(),
            category: dish.category.clone(),
            price: dish.price,
            profit: dish.profit_per_unit,
        }
    }
}

/// All dishes, categories in load order, dishes in traversal order.
pub async fn list_dishes(State(state): State<AppState>) -> Json<Vec<DishDto>> {
    let restaurant = state.restaurant.read().await;
    Json(restaurant.menu().iter_dishes().map(DishDto::from).collect())
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    let restaurant = state.restaurant.read().await;
    Json(restaurant.menu().category_names())
}

/// Dishes in one category; an unknown category yields an empty list.
pub async fn dishes_by_category(
    Path(category): Path<String>,
    State(state): State<AppState>,
) -> Json<Vec<DishDto>> {
    let restaurant = state.restaurant.read().await;
    Json(
        restaurant
            .menu()
            .dishes_in(&category)
            .iter()
            .map(DishDto::from)
            .collect(),
    )
}
