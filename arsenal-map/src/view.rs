//! SeatMapView - the live seat map
//!
//! Fetches categories, stations and the user's bookings, hands them to a
//! [`SeatMap`], and keeps it current with a refresh loop bound to the
//! view's activation. Every change is published through [`Store`]s.
//!
//! Each activation gets an epoch. Fetch results are applied only while
//! their epoch is still the live one, so anything that resolves after
//! `deactivate` is dropped.

use arsenal_client::{BookingSource, StationSource};
use parking_lot::Mutex;
use shared::{Booking, Category, Station};
use std::sync::{Arc, Weak};

use crate::config::MapConfig;
use crate::error::{MapError, MapResult};
use crate::geometry::Point;
use crate::map::{Frame, Phase, PointerOutcome, SeatMap};
use crate::navigation::Navigator;
use crate::refresh::RefreshTask;
use crate::store::{Store, Subscription};

struct Inner {
    map: SeatMap,
    epoch: u64,
    active: bool,
    refresh: Option<RefreshTask>,
}

impl Inner {
    fn is_current(&self, epoch: u64) -> bool {
        self.active && self.epoch == epoch
    }
}

struct Shared {
    stations: Arc<dyn StationSource>,
    bookings: Arc<dyn BookingSource>,
    state: Mutex<Inner>,
    frames: Store<Frame>,
    phase: Store<Phase>,
}

impl Shared {
    /// Push the map's current frame and phase to subscribers
    fn publish(&self, map: &SeatMap) {
        let frame = map.frame();
        if frame.revision != self.frames.get().revision {
            self.frames.set(frame);
        }
        self.phase.set_if_changed(map.phase());
    }

    async fn fetch_initial(&self) -> MapResult<(Vec<Category>, Vec<Station>)> {
        let (categories, stations) = tokio::try_join!(
            self.stations.fetch_categories(),
            self.stations.fetch_stations()
        )?;
        Ok((categories, stations))
    }

    /// Bookings are optional: anonymous users or a failing endpoint
    /// simply own nothing.
    async fn fetch_bookings(&self) -> Option<Vec<Booking>> {
        match self.bookings.fetch_my_active_bookings().await {
            Ok(bookings) => Some(bookings),
            Err(e) => {
                tracing::debug!(error = %e, "Active bookings unavailable");
                None
            }
        }
    }
}

/// Live seat map bound to a station source and a booking source
pub struct SeatMapView {
    shared: Arc<Shared>,
    config: MapConfig,
    navigator: Option<Arc<dyn Navigator>>,
}

impl SeatMapView {
    pub fn new(
        stations: Arc<dyn StationSource>,
        bookings: Arc<dyn BookingSource>,
        config: MapConfig,
    ) -> Self {
        let map = SeatMap::new(config.clone());
        let frames = Store::new(map.frame());
        let shared = Arc::new(Shared {
            stations,
            bookings,
            state: Mutex::new(Inner {
                map,
                epoch: 0,
                active: false,
                refresh: None,
            }),
            frames,
            phase: Store::new(Phase::Idle),
        });
        Self {
            shared,
            config,
            navigator: None,
        }
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    // ========== Lifecycle ==========

    /// Load everything, draw, fit to view and start the refresh loop.
    ///
    /// A failed load is logged and leaves the view empty in
    /// [`Phase::Error`]; it is not retried, but the view is no longer
    /// active, so a later `activate` starts over. Only a second activation
    /// of an active view is reported as an error.
    pub async fn activate(&self) -> MapResult<Phase> {
        let epoch = {
            let mut state = self.shared.state.lock();
            if state.active {
                return Err(MapError::AlreadyActive);
            }
            state.epoch += 1;
            state.active = true;
            state.map.begin_loading();
            self.shared.publish(&state.map);
            state.epoch
        };
        tracing::info!(epoch, "Activating seat map");

        let (fetched, bookings) =
            tokio::join!(self.shared.fetch_initial(), self.shared.fetch_bookings());

        let mut state = self.shared.state.lock();
        if !state.is_current(epoch) {
            tracing::debug!(epoch, "View deactivated during load, discarding result");
            return Ok(state.map.phase());
        }

        match fetched {
            Ok((categories, stations)) => {
                state
                    .map
                    .load(categories, stations, bookings.as_deref().unwrap_or_default());
                state.refresh = Some(self.spawn_refresh(epoch));
                tracing::info!(
                    seats = state.map.seat_count(),
                    zones = state.map.scene().zones.len(),
                    "Seat map ready"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading arsenal data");
                state.active = false;
                state.map.fail_loading();
            }
        }
        self.shared.publish(&state.map);
        Ok(state.map.phase())
    }

    fn spawn_refresh(&self, epoch: u64) -> RefreshTask {
        let weak = Arc::downgrade(&self.shared);
        RefreshTask::spawn(self.config.refresh_period, move || {
            refresh_tick(weak.clone(), epoch)
        })
    }

    /// Stop refreshing and release the scene. Idempotent; safe before or
    /// during `activate`.
    pub fn deactivate(&self) {
        let mut state = self.shared.state.lock();
        let was_active = state.active;
        state.active = false;
        state.epoch += 1;
        if let Some(task) = state.refresh.take() {
            task.cancel();
        }
        if state.map.phase() != Phase::Idle {
            state.map.release();
        }
        self.shared.publish(&state.map);
        if was_active {
            tracing::info!("Seat map deactivated");
        }
    }

    pub fn is_active(&self) -> bool {
        self.shared.state.lock().active
    }

    // ========== Interaction ==========

    pub fn zoom_in(&self) -> bool {
        self.mutate(SeatMap::zoom_in)
    }

    pub fn zoom_out(&self) -> bool {
        self.mutate(SeatMap::zoom_out)
    }

    pub fn reset_zoom(&self) {
        self.mutate(SeatMap::reset_zoom);
    }

    /// Zoom anchored at the pointer; negative `delta` zooms in
    pub fn pointer_wheel(&self, delta: f64, pointer: Point) -> bool {
        self.mutate(|map| map.wheel(delta, pointer))
    }

    pub fn pointer_down(&self, at: Point) {
        self.mutate(|map| map.pointer_down(at));
    }

    pub fn pointer_move(&self, at: Point) -> bool {
        self.mutate(|map| map.pointer_move(at))
    }

    pub fn pointer_up(&self, at: Point) -> Option<PointerOutcome> {
        self.mutate(|map| map.pointer_up(at))
    }

    pub fn set_viewport(&self, width: f64, height: f64) {
        self.mutate(|map| map.set_viewport(width, height));
    }

    pub fn select_seat(&self, station_id: i64) -> bool {
        self.mutate(|map| map.select_seat(station_id))
    }

    pub fn clear_selection(&self) {
        self.mutate(SeatMap::clear_selection);
    }

    /// Hand a displayed station to the router's admin page
    pub fn open_station_admin(&self, station_id: i64) -> bool {
        let known = self
            .shared
            .state
            .lock()
            .map
            .station(station_id)
            .is_some();
        match (&self.navigator, known) {
            (Some(navigator), true) => {
                tracing::debug!(station_id, "Opening station admin");
                navigator.open_station_admin(station_id);
                true
            }
            _ => false,
        }
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut SeatMap) -> R) -> R {
        let mut state = self.shared.state.lock();
        let result = f(&mut state.map);
        self.shared.publish(&state.map);
        result
    }

    // ========== Queries ==========

    /// Borrow the map state for reading
    pub fn with_map<R>(&self, f: impl FnOnce(&SeatMap) -> R) -> R {
        f(&self.shared.state.lock().map)
    }

    pub fn frame(&self) -> Frame {
        self.shared.frames.get()
    }

    pub fn frames(&self) -> Subscription<Frame> {
        self.shared.frames.subscribe()
    }

    pub fn phase(&self) -> Phase {
        self.shared.phase.get()
    }

    pub fn phases(&self) -> Subscription<Phase> {
        self.shared.phase.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.with_map(SeatMap::is_loading)
    }

    pub fn seat_count(&self) -> usize {
        self.with_map(SeatMap::seat_count)
    }

    pub fn scale(&self) -> f64 {
        self.with_map(SeatMap::scale)
    }

    pub fn redraws(&self) -> u64 {
        self.with_map(SeatMap::redraws)
    }

    pub fn available_count(&self) -> usize {
        self.with_map(SeatMap::available_count)
    }

    pub fn occupied_count(&self) -> usize {
        self.with_map(SeatMap::occupied_count)
    }

    pub fn selected_station(&self) -> Option<Station> {
        self.with_map(|map| map.selected_station().cloned())
    }
}

impl Drop for SeatMapView {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// One poll: refetch stations (and bookings), redraw only on change.
/// Failures keep the last frame.
async fn refresh_tick(shared: Weak<Shared>, epoch: u64) {
    let Some(shared) = shared.upgrade() else {
        return;
    };
    {
        let mut state = shared.state.lock();
        if !state.is_current(epoch) {
            return;
        }
        state.map.begin_refresh();
        shared.publish(&state.map);
    }

    let (stations, bookings) = tokio::join!(shared.stations.fetch_stations(), shared.fetch_bookings());

    let mut state = shared.state.lock();
    if !state.is_current(epoch) {
        tracing::debug!(epoch, "Refresh resolved after teardown, ignored");
        return;
    }
    match stations {
        Ok(stations) => {
            if state.map.apply_refresh(stations, bookings.as_deref()) {
                tracing::debug!(seats = state.map.seat_count(), "Station changes redrawn");
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Station refresh failed, keeping last frame");
        }
    }
    state.map.end_refresh();
    shared.publish(&state.map);
}
