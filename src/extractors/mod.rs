//! Request extractors whose rejections are reported as `AppError`.

pub mod json;
pub mod query;
pub use json::JsonBody;
pub use query::QueryParams;
