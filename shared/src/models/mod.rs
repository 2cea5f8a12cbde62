//! Data models
//!
//! Mirrors the JSON the backend serves (camelCase on the wire).
//! All IDs are `i64`.

pub mod booking;
pub mod category;
pub mod station;
pub mod user;

// Re-exports
pub use booking::*;
pub use category::*;
pub use station::*;
pub use user::*;
