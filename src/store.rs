//! Connection pool construction and the startup connectivity probe.

use crate::config::AppConfig;
use crate::error::ConfigError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Build the pool without connecting. Connections are opened on first use, so an
/// unreachable database does not prevent the server from starting.
pub fn connect_lazy(config: &AppConfig) -> Result<PgPool, ConfigError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy(&config.database_url)
        .map_err(|e| ConfigError::DatabaseUrl(e.to_string()))
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn authenticate(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
