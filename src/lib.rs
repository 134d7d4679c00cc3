//! REST API over PostgreSQL with model-level validation and JSON error mapping.

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use app::{build_router, with_error_layers};
pub use config::{AppConfig, Environment};
pub use error::{AppError, ConfigError};
pub use migration::{sync_schema, SyncMode};
pub use state::AppState;
pub use store::{authenticate, connect_lazy};
