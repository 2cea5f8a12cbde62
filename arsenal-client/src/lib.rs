//! Arsenal Client - REST client for the gaming-center backend
//!
//! Wraps the stations, categories, bookings and auth endpoints and
//! exposes them through the [`StationSource`] / [`BookingSource`] seams
//! the seat map consumes.

pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod source;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use session::{Session, SessionData};
pub use source::{BookingSource, StationSource};

// Re-export shared types for convenience
pub use shared::{Booking, Category, Station, StationStatus, User};
