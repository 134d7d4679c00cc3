//! Error-mapping layers: production detail suppression and panic recovery.

use crate::config::Environment;
use crate::error::{AppError, GenericFailure};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::any::Any;

/// In production, rewrite every generic failure to `{ message, error: {} }`.
/// Validation failures and success responses pass through untouched.
pub async fn suppress_error_detail(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if !environment.is_production() {
        return response;
    }
    let Some(failure) = response.extensions().get::<GenericFailure>().cloned() else {
        return response;
    };
    let status = response.status();
    let mut rewritten = (status, Json(json!({ "message": failure.message, "error": {} }))).into_response();
    rewritten.extensions_mut().insert(failure);
    rewritten
}

/// Turn a handler panic into a 500 generic failure.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "handler panicked");
    let mut err = AppError::internal("Panic", "Internal Server Error");
    if let AppError::Generic { detail: ref mut body, .. } = err {
        body["panic"] = json!(detail);
    }
    err.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn panic_becomes_generic_failure() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let marker = response.extensions().get::<GenericFailure>().unwrap();
        assert_eq!(marker.message, "Internal Server Error");
    }

    #[test]
    fn owned_panic_message_is_accepted() {
        let response = panic_response(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
