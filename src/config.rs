use std::env;

// ============================================================================
// Application Configuration
// ============================================================================
//
// Read from the environment with defaults suitable for a local demo:
//   DATABASE_URL              sqlite::memory:
//   DATABASE_MAX_CONNECTIONS  5
//   LOG_FILTER                info,shop_events=debug (RUST_LOG wins if set)
//   NOTIFICATION_SENDER       no-reply@shop.local
//
// ============================================================================

pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOG_FILTER: &str = "info,shop_events=debug";
pub const DEFAULT_NOTIFICATION_SENDER: &str = "no-reply@shop.local";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub log_filter: String,
    pub notification_sender: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            notification_sender: DEFAULT_NOTIFICATION_SENDER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Empty("DATABASE_URL"));
        }

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        key: "DATABASE_MAX_CONNECTIONS",
                        value,
                    })
                }
            },
            None => defaults.max_connections,
        };

        let log_filter = lookup("LOG_FILTER").unwrap_or(defaults.log_filter);

        let notification_sender =
            lookup("NOTIFICATION_SENDER").unwrap_or(defaults.notification_sender);
        if notification_sender.trim().is_empty() {
            return Err(ConfigError::Empty("NOTIFICATION_SENDER"));
        }

        Ok(Self {
            database_url,
            max_connections,
            log_filter,
            notification_sender,
        })
    }
}
