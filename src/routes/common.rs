//! Root greeting and the not-found fallback.

use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the REST API & Sequelize model validation project!";
pub const NOT_FOUND_MESSAGE: &str = "Route Not Found";

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

async fn welcome() -> Json<MessageBody> {
    Json(MessageBody {
        message: WELCOME_MESSAGE,
    })
}

/// Fallback for unmatched paths, and for unmatched methods on known paths.
pub async fn route_not_found() -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageBody {
            message: NOT_FOUND_MESSAGE,
        }),
    )
}

/// GET / liveness greeting.
pub fn common_routes() -> Router {
    Router::new().route("/", get(welcome).fallback(route_not_found))
}
