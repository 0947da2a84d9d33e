use axum::extract::State;
use axum::Json;

use super::AppState;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Ready once the feeds are loaded; reports what came in with them.
pub async fn ready(State(state): State<AppState>) -> Json<serde_json::Value> {
    let restaurant = state.restaurant.read().await;
    Json(serde_json::json!({
        "status": "ready",
        "dishes": restaurant.menu().dish_count(),
        "ingredients": restaurant.pantry().len(),
        "tables": restaurant.table_capacities().len(),
    }))
}
