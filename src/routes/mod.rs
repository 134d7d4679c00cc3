//! Route tables.

pub mod api;
pub mod common;
pub use api::api_routes;
pub use common::{common_routes, route_not_found, NOT_FOUND_MESSAGE, WELCOME_MESSAGE};
