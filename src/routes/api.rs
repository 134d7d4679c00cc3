//! Resource routes mounted under `/api`.

use crate::handlers::{courses, users};
use crate::routes::route_not_found;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/users",
            get(users::list).post(users::create).fallback(route_not_found),
        )
        .route("/users/:id", get(users::read).fallback(route_not_found))
        .route(
            "/courses",
            get(courses::list).post(courses::create).fallback(route_not_found),
        )
        .route(
            "/courses/:id",
            get(courses::read)
                .put(courses::update)
                .delete(courses::delete)
                .fallback(route_not_found),
        )
        .with_state(state)
}
