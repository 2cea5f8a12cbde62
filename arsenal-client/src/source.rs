//! Data sources consumed by the seat map
//!
//! The map only needs a handful of reads; these traits are the seam
//! between it and the network so it can run against any backend.

use async_trait::async_trait;
use shared::{Booking, Category, PageResponse, Station};

use crate::{ClientResult, HttpClient, NetworkHttpClient};

const CATEGORIES_ALL: &str = "/api/categories-pc/all";
const STATIONS: &str = "/api/pcs";
const STATIONS_ALL: &str = "/api/pcs/all";
const MY_ACTIVE_BOOKINGS: &str = "/api/bookings/my-active";

/// Supplies categories and stations
#[async_trait]
pub trait StationSource: Send + Sync {
    async fn fetch_categories(&self) -> ClientResult<Vec<Category>>;
    async fn fetch_stations(&self) -> ClientResult<Vec<Station>>;
}

/// Supplies the current user's active bookings
#[async_trait]
pub trait BookingSource: Send + Sync {
    async fn fetch_my_active_bookings(&self) -> ClientResult<Vec<Booking>>;
}

#[async_trait]
impl StationSource for NetworkHttpClient {
    async fn fetch_categories(&self) -> ClientResult<Vec<Category>> {
        self.get(CATEGORIES_ALL).await
    }

    async fn fetch_stations(&self) -> ClientResult<Vec<Station>> {
        self.get(STATIONS_ALL).await
    }
}

#[async_trait]
impl BookingSource for NetworkHttpClient {
    /// Anonymous sessions have no bookings; no request is made.
    async fn fetch_my_active_bookings(&self) -> ClientResult<Vec<Booking>> {
        if !self.session().is_logged_in() {
            return Ok(Vec::new());
        }
        self.get(MY_ACTIVE_BOOKINGS).await
    }
}

impl NetworkHttpClient {
    /// Single station by slug (QR booking links carry the slug)
    pub async fn find_station(&self, slug: &str) -> ClientResult<Station> {
        self.get(&format!("{STATIONS}/{slug}")).await
    }

    /// One page of stations
    pub async fn stations_page(&self, page: u32, size: u32) -> ClientResult<PageResponse<Station>> {
        self.get_query(STATIONS, &[("page", page), ("size", size)]).await
    }
}
