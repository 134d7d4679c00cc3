//! Router assembly: routes, fallback, and the middleware stack.

use crate::config::Environment;
use crate::middleware::{panic_response, suppress_error_detail};
use crate::routes::{api_routes, common_routes, route_not_found};
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

/// Full application: `GET /`, `/api/*`, and the 404 fallback behind the error layers.
pub fn build_router(state: AppState, body_limit: usize) -> Router {
    let environment = state.environment;
    let routes = Router::new()
        .merge(common_routes())
        .nest("/api", api_routes(state))
        .fallback(route_not_found);
    with_error_layers(routes, environment, body_limit)
}

/// Wrap a router in the shared stack. Outermost first: access log, detail
/// suppression, panic recovery, body limit.
pub fn with_error_layers(router: Router, environment: Environment, body_limit: usize) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .latency_unit(LatencyUnit::Millis),
                    ),
            )
            .layer(middleware::from_fn_with_state(environment, suppress_error_detail))
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(DefaultBodyLimit::max(body_limit)),
    )
}
