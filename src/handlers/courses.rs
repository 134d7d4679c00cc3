//! Course handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::{ApiJson, RecordId};
use crate::model::{course, CourseInput};
use crate::response::{created, no_content, ok};
use crate::service::CourseService;
use crate::state::AppState;
use axum::{extract::State, response::Response};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let courses = CourseService::list(&state.pool).await?;
    Ok(ok(courses))
}

pub async fn read(State(state): State<AppState>, RecordId(id): RecordId) -> Result<Response, AppError> {
    let course = CourseService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Course not found"))?;
    Ok(ok(course))
}

pub async fn create(State(state): State<AppState>, ApiJson(body): ApiJson<Value>) -> Result<Response, AppError> {
    let input: CourseInput = course::TABLE.build(body)?;
    let course = CourseService::create(&state.pool, &input).await?;
    tracing::info!(id = course.id, user_id = course.user_id, "course created");
    Ok(created(format!("/api/courses/{}", course.id), course))
}

/// Full replacement; the body is validated before the row is looked up.
pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ApiJson(body): ApiJson<Value>,
) -> Result<Response, AppError> {
    let input: CourseInput = course::TABLE.build(body)?;
    CourseService::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Course not found"))?;
    Ok(no_content())
}

pub async fn delete(State(state): State<AppState>, RecordId(id): RecordId) -> Result<Response, AppError> {
    if !CourseService::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Course not found"));
    }
    Ok(no_content())
}
