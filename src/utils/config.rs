use std::collections::HashMap;
use std::env;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use validator::{Validate, ValidationError};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Shop-wide settings handed to the services explicitly.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ShopConfig {
    #[validate(length(min = 1, max = 60, message = "STORE_NAME must be 1-60 characters"))]
    pub store_name: String,
    #[validate(length(min = 1, max = 4, message = "CURRENCY_SYMBOL must be 1-4 characters"))]
    pub currency_symbol: String,
    #[validate(length(min = 1, max = 50, message = "DEFAULT_CUSTOMER must be 1-50 characters"))]
    pub default_customer: String,
    pub low_stock_threshold: u32,
    #[validate(custom = "validate_log_level")]
    pub log_level: String,
    pub environment: String,
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if !LOG_LEVELS.contains(&level) {
        return Err(ValidationError::new("unknown_log_level"));
    }
    Ok(())
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            store_name: "Rusty Beans Coffee".to_string(),
            currency_symbol: "$".to_string(),
            default_customer: "Guest".to_string(),
            low_stock_threshold: 10,
            log_level: "info".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl ShopConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings from a `.env`-style file without touching the process
    /// environment.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut values = HashMap::new();
        for entry in dotenv::from_path_iter(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?
        {
            let (key, value) =
                entry.with_context(|| format!("Malformed line in {}", path.display()))?;
            values.insert(key, value);
        }

        Self::from_lookup(|key| values.get(key).cloned())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let low_stock_threshold = match lookup("LOW_STOCK_THRESHOLD") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                anyhow::anyhow!("LOW_STOCK_THRESHOLD must be a non-negative integer, got '{}'", raw)
            })?,
            None => defaults.low_stock_threshold,
        };

        let config = ShopConfig {
            store_name: lookup("STORE_NAME").unwrap_or(defaults.store_name),
            currency_symbol: lookup("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            default_customer: lookup("DEFAULT_CUSTOMER").unwrap_or(defaults.default_customer),
            low_stock_threshold,
            log_level: lookup("LOG_LEVEL")
                .map(|level| level.to_lowercase())
                .unwrap_or(defaults.log_level),
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
        };

        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;
        tracing::debug!("Config: loaded for {} environment", config.environment);
        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Customer shown on receipts: the given name, or the configured
    /// default when it is blank.
    pub fn customer_or_default<'a>(&'a self, customer: &'a str) -> &'a str {
        if customer.trim().is_empty() {
            &self.default_customer
        } else {
            customer
        }
    }
}
