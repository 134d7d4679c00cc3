//! Request extractors whose rejections render through `AppError`.

pub mod json;
pub mod path;
pub use json::ApiJson;
pub use path::RecordId;
