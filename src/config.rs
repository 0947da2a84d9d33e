use std::collections::HashMap;
use thiserror::Error;

/// Service configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub menu_path: String,
    pub stock_path: String,
    pub tables_path: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let menu_path = env_map
            .get("MENU_PATH")
            .cloned()
            .unwrap_or_else(|| "data/menu.in".to_string());

        let stock_path = env_map
            .get("STOCK_PATH")
            .cloned()
            .unwrap_or_else(|| "data/stock.in".to_string());

        let tables_path = env_map
            .get("TABLES_PATH")
            .cloned()
            .unwrap_or_else(|| "data/tables.in".to_string());

        Ok(Config {
            port,
            menu_path,
            stock_path,
            tables_path,
        })
    }
}
