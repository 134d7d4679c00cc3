//! Shared application state handed to every handler.

use crate::config::Environment;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Controls whether generic failures expose their detail.
    pub environment: Environment,
}

impl AppState {
    pub fn new(pool: PgPool, environment: Environment) -> Self {
        AppState { pool, environment }
    }
}
