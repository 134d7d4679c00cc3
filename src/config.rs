//! Process configuration read from the environment (after an optional `.env`).

use crate::error::ConfigError;
use crate::migration::SyncMode;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/rest_api";
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Runtime environment. `Production` hides error detail from clients.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    /// Anything other than `production` (case-insensitive) is development.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("production") {
            Ok(Environment::Production)
        } else {
            Ok(Environment::Development)
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub sync_mode: SyncMode,
    pub body_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            environment: Environment::Development,
            database_url: DEFAULT_DATABASE_URL.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
            sync_mode: SyncMode::Create,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = AppConfig::default();

        let environment = get("APP_ENV")
            .or_else(|| get("NODE_ENV"))
            .map(|v| v.parse().unwrap_or_default())
            .unwrap_or(defaults.environment);
        let sync_mode = match get("DB_SYNC") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue {
                key: "DB_SYNC",
                value: v,
            })?,
            None => defaults.sync_mode,
        };

        Ok(AppConfig {
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", get("PORT"), defaults.port)?,
            environment,
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), defaults.max_connections)?,
            acquire_timeout: Duration::from_secs(parse_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                get("DB_ACQUIRE_TIMEOUT_SECS"),
                defaults.acquire_timeout.as_secs(),
            )?),
            sync_mode,
            body_limit: parse_or("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), defaults.body_limit)?,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: v }),
        None => Ok(default),
    }
}
