use std::str::FromStr;
use thiserror::Error;

pub const CHANNEL_BUFFER_VAR: &str = "WAREHOUSE_CHANNEL_BUFFER";
pub const MAX_UPDATE_ATTEMPTS_VAR: &str = "WAREHOUSE_MAX_UPDATE_ATTEMPTS";
pub const LOG_FILTER_VAR: &str = "WAREHOUSE_LOG";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Runtime settings for the warehouse system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseConfig {
    /// Capacity of the product actor's mailbox.
    pub channel_buffer: usize,
    /// How many times an order, ship or restock is attempted when another
    /// caller changed the product in between.
    pub max_update_attempts: u32,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            max_update_attempts: 3,
            log_filter: "info".to_string(),
        }
    }
}

impl WarehouseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            channel_buffer: positive(&lookup, CHANNEL_BUFFER_VAR)?.unwrap_or(defaults.channel_buffer),
            max_update_attempts: positive(&lookup, MAX_UPDATE_ATTEMPTS_VAR)?.unwrap_or(defaults.max_update_attempts),
            log_filter: lookup(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
        })
    }
}

fn positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr + PartialOrd + Default,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    let parsed = value.trim().parse::<T>();
    match parsed {
        Ok(parsed) if parsed > T::default() => Ok(Some(parsed)),
        _ => Err(ConfigError::InvalidNumber { key, value }),
    }
}
