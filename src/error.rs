//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::model;

/// Postgres SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";
/// Postgres SQLSTATE for foreign_key_violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("database url: {0}")]
    DatabaseUrl(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Field-level constraint violations, in field declaration order.
    #[error("validation failed: {}", errors.join("; "))]
    Validation { errors: Vec<String> },
    #[error("{message}")]
    Generic {
        status: StatusCode,
        kind: &'static str,
        message: String,
        detail: Value,
    },
}

/// Marker left on generic failure responses so the error-detail middleware can
/// rebuild the body without parsing it.
#[derive(Clone, Debug)]
pub struct GenericFailure {
    pub message: String,
}

impl AppError {
    pub fn generic(status: StatusCode, kind: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        let detail = json!({
            "name": kind,
            "message": message,
            "status": status.as_u16(),
        });
        AppError::Generic {
            status,
            kind,
            message,
            detail,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::generic(StatusCode::NOT_FOUND, "NotFoundError", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::generic(StatusCode::BAD_REQUEST, "BadRequestError", message)
    }

    pub fn internal(kind: &'static str, message: impl Into<String>) -> Self {
        Self::generic(StatusCode::INTERNAL_SERVER_ERROR, kind, message)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Generic { status, .. } => *status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Validation { errors } => {
                tracing::debug!(?errors, "validation failed");
                (status, Json(json!({ "errors": errors }))).into_response()
            }
            AppError::Generic {
                kind,
                message,
                detail,
                ..
            } => {
                tracing::error!(status = status.as_u16(), %message, "Global error handler: {}", kind);
                let body = json!({ "message": message, "error": detail });
                let mut response = (status, Json(body)).into_response();
                response.extensions_mut().insert(GenericFailure { message });
                response
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
            sqlx::Error::Database(db) => {
                classify_database_error(db.code().as_deref(), db.constraint(), db.message())
            }
            _ => AppError::internal("DatabaseError", err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "JsonDataError",
            JsonRejection::JsonSyntaxError(_) => "JsonSyntaxError",
            JsonRejection::MissingJsonContentType(_) => "MissingJsonContentType",
            JsonRejection::BytesRejection(_) => "BytesRejection",
            _ => "JsonRejection",
        };
        AppError::generic(rejection.status(), kind, rejection.body_text())
    }
}

/// Map a database error onto the taxonomy. Unique and foreign key violations are
/// validation failures reported with the owning model's message.
pub fn classify_database_error(
    code: Option<&str>,
    constraint: Option<&str>,
    message: &str,
) -> AppError {
    match code {
        Some(UNIQUE_VIOLATION) => {
            let error = match constraint {
                Some(name) => model::constraint_message(name)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} must be unique", name)),
                None => "value must be unique".to_string(),
            };
            AppError::Validation { errors: vec![error] }
        }
        Some(FOREIGN_KEY_VIOLATION) => {
            let error = match constraint {
                Some(name) => model::constraint_message(name)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} references a missing record", name)),
                None => "referenced record does not exist".to_string(),
            };
            AppError::Validation { errors: vec![error] }
        }
        _ => AppError::internal("DatabaseError", message),
    }
}
