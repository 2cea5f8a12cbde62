//! Shared types for the Arsenal client
//!
//! Wire models and response envelopes used by both the REST client
//! and the seat map engine.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use models::{
    BookedStation, Booking, Category, CategoryRef, HoursMinutes, ParsedSpecs, Remaining, Role,
    Station, StationStatus, User, parse_specs,
};
pub use response::{ApiErrorResponse, PageResponse};
