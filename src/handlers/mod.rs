//! HTTP handlers for the API resources.

pub mod courses;
pub mod users;
