//! User handlers: list, read, create.

use crate::error::AppError;
use crate::extractors::{ApiJson, RecordId};
use crate::model::{user, NewUser};
use crate::response::{created, ok};
use crate::service::UserService;
use crate::state::AppState;
use axum::{extract::State, response::Response};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(ok(users))
}

pub async fn read(State(state): State<AppState>, RecordId(id): RecordId) -> Result<Response, AppError> {
    let user = UserService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(ok(user))
}

pub async fn create(State(state): State<AppState>, ApiJson(body): ApiJson<Value>) -> Result<Response, AppError> {
    let new_user: NewUser = user::TABLE.build(body)?;
    let user = UserService::create(&state.pool, &new_user).await?;
    tracing::info!(id = user.id, "user created");
    Ok(created(format!("/api/users/{}", user.id), user))
}
