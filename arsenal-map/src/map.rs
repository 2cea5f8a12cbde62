//! Seat map state
//!
//! Synchronous core of the view: data, scene, transform, selection and
//! lifecycle phase. No I/O happens here; [`crate::SeatMapView`] feeds it
//! fetched data and publishes the frames it produces.

use shared::{Booking, Category, Station, StationStatus};
use std::collections::HashSet;
use std::sync::Arc;

use crate::config::MapConfig;
use crate::diff::StatusSnapshot;
use crate::geometry::Point;
use crate::layout::Scene;
use crate::viewport::Viewport;
use crate::zone::{self, CANVAS_HEIGHT, CANVAS_WIDTH};

/// View lifecycle
///
/// `Idle -> Loading -> Ready <-> Refreshing`, `Loading -> Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Refreshing,
    /// Initial load failed; terminal until the next activation
    Error,
}

impl Phase {
    /// Whether data is on screen and the refresh loop may run
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Ready | Self::Refreshing)
    }
}

/// Immutable snapshot handed to renderers
#[derive(Debug, Clone)]
pub struct Frame {
    /// Bumped on every published change
    pub revision: u64,
    pub viewport: Viewport,
    pub scene: Arc<Scene>,
    pub selected: Option<i64>,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            revision: 0,
            viewport: Viewport::new(0.0, 0.0),
            scene: Arc::new(Scene::default()),
            selected: None,
        }
    }
}

/// What a pointer release turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// The pointer moved past the drag threshold and panned the map
    Panned,
    /// Click on a seat
    Selected(i64),
    /// Click on empty floor
    Cleared,
}

#[derive(Debug, Clone, Copy)]
struct PointerDrag {
    origin: Point,
    last: Point,
    dragging: bool,
}

/// Seat map state for one view instance
#[derive(Debug)]
pub struct SeatMap {
    config: MapConfig,
    phase: Phase,
    categories: Vec<Category>,
    stations: Vec<Station>,
    mine: HashSet<i64>,
    snapshot: StatusSnapshot,
    scene: Arc<Scene>,
    viewport: Viewport,
    selected: Option<i64>,
    pointer: Option<PointerDrag>,
    revision: u64,
    redraws: u64,
}

impl SeatMap {
    pub fn new(config: MapConfig) -> Self {
        let viewport = Viewport::new(config.viewport_width, config.viewport_height);
        Self {
            config,
            phase: Phase::Idle,
            categories: Vec::new(),
            stations: Vec::new(),
            mine: HashSet::new(),
            snapshot: StatusSnapshot::default(),
            scene: Arc::new(Scene::default()),
            viewport,
            selected: None,
            pointer: None,
            revision: 0,
            redraws: 0,
        }
    }

    // ========== Lifecycle ==========

    pub fn begin_loading(&mut self) {
        self.phase = Phase::Loading;
    }

    /// Install the initial data set, draw it and fit it to the viewport
    pub fn load(&mut self, categories: Vec<Category>, stations: Vec<Station>, bookings: &[Booking]) {
        self.categories = categories
            .into_iter()
            .filter(|c| zone::is_allowed(&c.slug))
            .collect();
        self.stations = self.allowed_stations(stations);
        self.mine = owned_station_ids(bookings);
        self.selected = None;
        self.redraw();
        self.fit_to_view();
        self.phase = Phase::Ready;
    }

    /// Initial load failed: stop loading, show nothing
    pub fn fail_loading(&mut self) {
        self.release();
        self.phase = Phase::Error;
    }

    pub fn begin_refresh(&mut self) {
        if self.phase == Phase::Ready {
            self.phase = Phase::Refreshing;
        }
    }

    pub fn end_refresh(&mut self) {
        if self.phase == Phase::Refreshing {
            self.phase = Phase::Ready;
        }
    }

    /// Apply a polled station list. Redraws only when the count or some
    /// per-id status changed; returns whether it did.
    ///
    /// `bookings` is `None` when the booking fetch failed, which keeps the
    /// previous ownership set.
    pub fn apply_refresh(&mut self, stations: Vec<Station>, bookings: Option<&[Booking]>) -> bool {
        if !self.phase.is_live() {
            return false;
        }
        if let Some(bookings) = bookings {
            self.mine = owned_station_ids(bookings);
        }

        let stations = self.allowed_stations(stations);
        if !self.snapshot.differs_from(&stations) {
            tracing::debug!(stations = stations.len(), "No station changes, skipping redraw");
            return false;
        }

        self.stations = stations;
        if self
            .selected
            .is_some_and(|id| !self.stations.iter().any(|s| s.id == id))
        {
            self.selected = None;
        }
        self.redraw();
        true
    }

    /// Drop data and scene, back to `Idle`
    pub fn release(&mut self) {
        self.categories.clear();
        self.stations.clear();
        self.mine.clear();
        self.snapshot = StatusSnapshot::default();
        self.scene = Arc::new(Scene::default());
        self.selected = None;
        self.pointer = None;
        self.phase = Phase::Idle;
        self.touch();
    }

    // ========== Zoom / pan ==========

    pub fn zoom_in(&mut self) -> bool {
        let step = self.config.zoom_step;
        self.zoom_centered(step)
    }

    pub fn zoom_out(&mut self) -> bool {
        let step = 1.0 / self.config.zoom_step;
        self.zoom_centered(step)
    }

    fn zoom_centered(&mut self, factor: f64) -> bool {
        let center = self.viewport.center();
        let changed = self.viewport.zoom_at(center, factor);
        if changed {
            self.touch();
        }
        changed
    }

    /// Fit the whole floor plan and recenter
    pub fn reset_zoom(&mut self) {
        self.fit_to_view();
    }

    /// Zoom toward the pointer: negative delta zooms in, positive out
    pub fn wheel(&mut self, delta: f64, pointer: Point) -> bool {
        let factor = if delta < 0.0 {
            self.config.wheel_step
        } else if delta > 0.0 {
            1.0 / self.config.wheel_step
        } else {
            return false;
        };
        let changed = self.viewport.zoom_at(pointer, factor);
        if changed {
            self.touch();
        }
        changed
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by(dx, dy);
        self.touch();
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport.resize(width, height);
        self.touch();
    }

    fn fit_to_view(&mut self) {
        self.viewport
            .fit(CANVAS_WIDTH, CANVAS_HEIGHT, self.config.fit_padding);
        self.touch();
    }

    // ========== Pointer ==========

    pub fn pointer_down(&mut self, at: Point) {
        self.pointer = Some(PointerDrag {
            origin: at,
            last: at,
            dragging: false,
        });
    }

    /// Pans once the pointer has travelled past the drag threshold
    pub fn pointer_move(&mut self, at: Point) -> bool {
        let threshold = self.config.drag_threshold;
        let Some(drag) = self.pointer.as_mut() else {
            return false;
        };
        if !drag.dragging && drag.origin.distance(at) > threshold {
            drag.dragging = true;
        }
        if !drag.dragging {
            return false;
        }
        let (dx, dy) = (at.x - drag.last.x, at.y - drag.last.y);
        drag.last = at;
        self.pan_by(dx, dy);
        true
    }

    /// Finish a gesture; a release without drag is a click
    pub fn pointer_up(&mut self, at: Point) -> Option<PointerOutcome> {
        let drag = self.pointer.take()?;
        if drag.dragging {
            return Some(PointerOutcome::Panned);
        }
        let logical = self.viewport.to_logical(at);
        match self.scene.seat_at(logical).map(|s| s.station_id) {
            Some(id) => {
                self.select_seat(id);
                Some(PointerOutcome::Selected(id))
            }
            None => {
                self.clear_selection();
                Some(PointerOutcome::Cleared)
            }
        }
    }

    // ========== Selection ==========

    /// Highlight a drawn seat; unknown ids are ignored
    pub fn select_seat(&mut self, station_id: i64) -> bool {
        if self.scene.seat(station_id).is_none() {
            return false;
        }
        if self.selected != Some(station_id) {
            self.selected = Some(station_id);
            self.restyle();
        }
        true
    }

    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.restyle();
        }
    }

    // ========== Drawing ==========

    /// Full layout pass
    fn redraw(&mut self) {
        self.scene = Arc::new(Scene::build(
            &self.categories,
            &self.stations,
            &self.mine,
            self.selected,
        ));
        self.snapshot = StatusSnapshot::capture(&self.stations);
        self.redraws += 1;
        self.touch();
    }

    /// Selection-only pass
    fn restyle(&mut self) {
        Arc::make_mut(&mut self.scene).restyle(self.selected);
        self.touch();
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn allowed_stations(&self, stations: Vec<Station>) -> Vec<Station> {
        let allowed: HashSet<i64> = self.categories.iter().map(|c| c.id).collect();
        stations
            .into_iter()
            .filter(|s| s.category_id().is_some_and(|id| allowed.contains(&id)))
            .collect()
    }

    // ========== Queries ==========

    pub fn frame(&self) -> Frame {
        Frame {
            revision: self.revision,
            viewport: self.viewport,
            scene: self.scene.clone(),
            selected: self.selected,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn scale(&self) -> f64 {
        self.viewport.scale
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of full layout passes so far
    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    pub fn seat_count(&self) -> usize {
        self.scene.seat_count()
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn selected_station(&self) -> Option<&Station> {
        self.selected.and_then(|id| self.station(id))
    }

    pub fn station(&self, station_id: i64) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == station_id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn is_mine(&self, station_id: i64) -> bool {
        self.mine.contains(&station_id)
    }

    pub fn available_count(&self) -> usize {
        self.stations.iter().filter(|s| s.is_available()).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.count_status(StationStatus::Occupied)
    }

    fn count_status(&self, status: StationStatus) -> usize {
        self.stations.iter().filter(|s| s.status == status).count()
    }
}

fn owned_station_ids(bookings: &[Booking]) -> HashSet<i64> {
    bookings.iter().map(Booking::station_id).collect()
}
