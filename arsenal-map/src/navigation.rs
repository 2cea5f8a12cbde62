//! Outbound navigation

/// Router hook for the station admin page
pub trait Navigator: Send + Sync {
    fn open_station_admin(&self, station_id: i64);
}
