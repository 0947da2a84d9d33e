pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod loader;

pub use config::Config;
pub use domain::{Category, Dish, Ingredient, TransactionKind, TransactionRecord};
pub use engine::{
    EngineError, Menu, OrderOutcome, Pantry, Restaurant, StockKey, TransactionLog,
};
pub use error::AppError;
pub use loader::LoaderError;
