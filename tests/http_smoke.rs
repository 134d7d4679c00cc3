//! Router behavior that does not need a live database: greeting, fallback,
//! validation, body parsing, and error detail suppression.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use common::{empty_request, json_request, offline_app, read_json, read_text};
use rest_api::{with_error_layers, Environment};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn root_returns_exact_welcome_payload() {
    let app = offline_app(Environment::Development);
    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_text(response).await,
        r#"{"message":"Welcome to the REST API & Sequelize model validation project!"}"#
    );
}

#[tokio::test]
async fn unknown_paths_are_route_not_found() {
    let app = offline_app(Environment::Development);
    for (method, uri) in [
        ("GET", "/nope"),
        ("POST", "/nope"),
        ("GET", "/api"),
        ("GET", "/api/widgets"),
        ("DELETE", "/api/users/1/extra"),
    ] {
        let response = app.clone().oneshot(empty_request(method, uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(read_json(response).await, json!({ "message": "Route Not Found" }));
    }
}

#[tokio::test]
async fn unmatched_method_on_known_path_is_route_not_found() {
    let app = offline_app(Environment::Development);
    for (method, uri) in [
        ("DELETE", "/api/users"),
        ("PUT", "/api/users/1"),
        ("PATCH", "/api/courses/1"),
        ("POST", "/"),
    ] {
        let response = app.clone().oneshot(empty_request(method, uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(read_json(response).await, json!({ "message": "Route Not Found" }));
    }
}

#[tokio::test]
async fn create_user_with_missing_fields_lists_each_one() {
    let app = offline_app(Environment::Development);
    let response = app
        .oneshot(json_request("POST", "/api/users", json!({ "lastName": "Lovelace" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({ "errors": ["A first name is required", "An email address is required"] })
    );
}

#[tokio::test]
async fn create_user_with_invalid_email_is_rejected_before_persistence() {
    let app = offline_app(Environment::Development);
    let body = json!({ "firstName": "Ada", "lastName": "Lovelace", "emailAddress": "ada" });
    let response = app.oneshot(json_request("POST", "/api/users", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({ "errors": ["Please provide a valid email address"] })
    );
}

#[tokio::test]
async fn whitespace_only_names_are_rejected() {
    let app = offline_app(Environment::Development);
    let body = json!({ "firstName": "  ", "lastName": "\t", "emailAddress": "c@d.co" });
    let response = app.oneshot(json_request("POST", "/api/users", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({ "errors": ["Please provide a first name", "Please provide a last name"] })
    );
}

#[tokio::test]
async fn over_length_name_is_a_validation_failure() {
    let app = offline_app(Environment::Development);
    let body = json!({ "firstName": "a".repeat(300), "lastName": "L", "emailAddress": "c@d.co" });
    let response = app.oneshot(json_request("POST", "/api/users", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({ "errors": ["firstName must be at most 255 characters"] })
    );
}

#[tokio::test]
async fn create_course_with_empty_body_reports_required_fields() {
    let app = offline_app(Environment::Production);
    let response = app
        .oneshot(json_request("POST", "/api/courses", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({
            "errors": [
                "A title is required",
                "A description is required",
                "A user id is required"
            ]
        })
    );
}

#[tokio::test]
async fn update_course_validates_body() {
    let app = offline_app(Environment::Development);
    let body = json!({ "title": "", "description": "Learn", "userId": 1 });
    let response = app.oneshot(json_request("PUT", "/api/courses/1", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await, json!({ "errors": ["Please provide a title"] }));
}

#[tokio::test]
async fn malformed_json_is_a_generic_failure() {
    let app = offline_app(Environment::Development);
    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from("{\"firstName\":"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert!(body["message"].is_string());
    assert_eq!(body["error"]["name"], "JsonSyntaxError");
}

#[tokio::test]
async fn missing_content_type_is_unsupported_media_type() {
    let app = offline_app(Environment::Development);
    let request = Request::builder()
        .method("POST")
        .uri("/api/courses")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body = read_json(response).await;
    assert_eq!(body["error"]["name"], "MissingJsonContentType");
}

#[tokio::test]
async fn non_object_body_is_bad_request() {
    let app = offline_app(Environment::Development);
    let response = app
        .oneshot(json_request("POST", "/api/users", json!(["Ada"])))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["message"], "body must be a JSON object");
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = offline_app(Environment::Development);
    let response = app.oneshot(empty_request("GET", "/api/courses/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["message"], "invalid id 'abc'");
    assert_eq!(body["error"]["status"], 400);
}

#[tokio::test]
async fn database_failure_exposes_detail_in_development() {
    let app = offline_app(Environment::Development);
    let response = app.oneshot(empty_request("GET", "/api/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    assert!(body["message"].is_string());
    assert_eq!(body["error"]["name"], "DatabaseError");
    assert_eq!(body["error"]["status"], 500);
}

#[tokio::test]
async fn database_failure_hides_detail_in_production() {
    let app = offline_app(Environment::Production);
    let response = app.oneshot(empty_request("GET", "/api/courses")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    assert!(body["message"].is_string());
    assert_eq!(body["error"], json!({}));
}

#[tokio::test]
async fn production_still_reports_client_errors_with_message() {
    let app = offline_app(Environment::Production);
    let response = app.oneshot(empty_request("GET", "/api/users/x")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({ "message": "invalid id 'x'", "error": {} })
    );
}

async fn explode() -> &'static str {
    panic!("handler blew up")
}

#[tokio::test]
async fn panics_become_json_failures() {
    let router = Router::new().route("/boom", get(explode));
    let app = with_error_layers(router, Environment::Development, 1024);
    let response = app.oneshot(empty_request("GET", "/boom")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Internal Server Error");
    assert_eq!(body["error"]["panic"], "handler blew up");
}

#[tokio::test]
async fn panic_detail_is_hidden_in_production() {
    let router = Router::new().route("/boom", get(explode));
    let app = with_error_layers(router, Environment::Production, 1024);
    let response = app.oneshot(empty_request("GET", "/boom")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        read_json(response).await,
        json!({ "message": "Internal Server Error", "error": {} })
    );
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let router = Router::new().route(
        "/echo",
        axum::routing::post(|rest_api::extractors::ApiJson(v): rest_api::extractors::ApiJson<serde_json::Value>| async move {
            axum::Json(v)
        }),
    );
    let app = with_error_layers(router, Environment::Development, 16);
    let body = json!({ "payload": "x".repeat(64) });
    let response = app.oneshot(json_request("POST", "/echo", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(read_json(response).await["error"]["name"], "BytesRejection");
}
