//! Arsenal Map - interactive seat map for the gaming-center floor plan
//!
//! Lays out PC stations by category into fixed zones, handles pan/zoom
//! and selection, and keeps the drawing in step with the backend by
//! polling.

pub mod config;
pub mod diff;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logger;
pub mod map;
pub mod navigation;
pub mod palette;
pub mod refresh;
pub mod store;
pub mod view;
pub mod viewport;
pub mod zone;

pub use config::MapConfig;
pub use error::{MapError, MapResult};
pub use geometry::{Point, Rect};
pub use layout::{Scene, Seat, ZoneRegion};
pub use map::{Frame, Phase, PointerOutcome, SeatMap};
pub use navigation::Navigator;
pub use palette::{SeatFill, SeatRing};
pub use refresh::RefreshTask;
pub use store::{Store, Subscription};
pub use view::SeatMapView;
pub use viewport::{MAX_SCALE, MIN_SCALE, Viewport};
