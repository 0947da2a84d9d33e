use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use super::AppState;
use crate::domain::{TransactionKind, TransactionRecord};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub kind: TransactionKind,
    pub subject: String,
    pub quantity: i64,
    pub profit_delta: f64,
    pub succeeded: bool,
}

impl From<&TransactionRecord> for TransactionDto {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            kind: record.kind,
            subject: record.subject.clone(),
            quantity: record.quantity,
            profit_delta: record.profit_delta,
            succeeded: record.succeeded,
        }
    }
}

/// The day's ledger in append order.
pub async fn list_transactions(State(state): State<AppState>) -> Json<Vec<TransactionDto>> {
    let restaurant = state.restaurant.read().await;
    Json(
        restaurant
            .transactions()
            .records()
            .iter()
            .map(TransactionDto::from)
            .collect(),
    )
}

pub async fn reset(State(state): State<AppState>) -> StatusCode {
    let mut restaurant = state.restaurant.write().await;
    restaurant.reset_transactions();
    StatusCode::OK
}
