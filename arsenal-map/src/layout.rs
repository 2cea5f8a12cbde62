//! Scene building
//!
//! Groups stations by category and places each group on its zone grid.
//! Positions depend only on the data; selection and ownership only touch
//! styling, so they can be reapplied without a new layout pass.

use shared::{Category, Station, StationStatus};
use std::collections::HashSet;

use crate::geometry::{Point, Rect};
use crate::palette::{SeatFill, SeatRing};
use crate::zone::{self, CANVAS_HEIGHT, CANVAS_WIDTH, ZoneLayout};

/// One drawn station
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    pub station_id: i64,
    pub label: String,
    pub category_id: i64,
    pub status: StationStatus,
    pub rect: Rect,
    pub mine: bool,
    pub fill: SeatFill,
    pub ring: SeatRing,
}

impl Seat {
    fn style(&mut self, mine: &HashSet<i64>, selected: Option<i64>) {
        self.mine = mine.contains(&self.station_id);
        self.fill = SeatFill::resolve(self.status, self.mine);
        self.mark_selected(selected);
    }

    /// Ring only; ownership stays as drawn
    fn mark_selected(&mut self, selected: Option<i64>) {
        self.ring = SeatRing::resolve(selected == Some(self.station_id), self.mine);
    }
}

/// One drawn category region
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRegion {
    pub layout: &'static ZoneLayout,
    pub category: Category,
    pub rect: Rect,
    pub seat_count: usize,
}

/// Everything drawn on the floor plan
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub zones: Vec<ZoneRegion>,
    pub seats: Vec<Seat>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            zones: Vec::new(),
            seats: Vec::new(),
        }
    }
}

impl Scene {
    /// Lay out `stations` into the zones of `categories`.
    ///
    /// Categories are taken in id order; one without a registered zone is
    /// skipped together with its stations. Within a category stations keep
    /// their input order.
    pub fn build(
        categories: &[Category],
        stations: &[Station],
        mine: &HashSet<i64>,
        selected: Option<i64>,
    ) -> Self {
        let mut ordered: Vec<&Category> = categories.iter().collect();
        ordered.sort_by_key(|c| c.id);

        let mut scene = Self::default();
        let mut used_zones: HashSet<&'static str> = HashSet::new();

        for category in ordered {
            let Some(layout) = zone::zone_for(&category.slug) else {
                tracing::debug!(slug = %category.slug, "No zone registered, category not drawn");
                continue;
            };
            if !used_zones.insert(layout.slug) {
                tracing::warn!(slug = %category.slug, category_id = category.id, "Zone already taken");
                continue;
            }

            let members = stations
                .iter()
                .filter(|s| s.category_id() == Some(category.id));

            let mut count = 0;
            for (index, station) in members.enumerate() {
                let mut seat = Seat {
                    station_id: station.id,
                    label: station.label.clone(),
                    category_id: category.id,
                    status: station.status,
                    rect: layout.seat_rect(index),
                    mine: false,
                    fill: SeatFill::Available,
                    ring: SeatRing::None,
                };
                seat.style(mine, selected);
                scene.seats.push(seat);
                count += 1;
            }

            scene.zones.push(ZoneRegion {
                layout,
                category: category.clone(),
                rect: layout.bounds(count),
                seat_count: count,
            });
        }

        scene
    }

    /// Move the selection ring. Positions, fills and ownership are left
    /// as the last layout pass drew them.
    pub fn restyle(&mut self, selected: Option<i64>) {
        for seat in &mut self.seats {
            seat.mark_selected(selected);
        }
    }

    pub fn seat(&self, station_id: i64) -> Option<&Seat> {
        self.seats.iter().find(|s| s.station_id == station_id)
    }

    /// Seat under a logical point
    pub fn seat_at(&self, point: Point) -> Option<&Seat> {
        self.seats.iter().find(|s| s.rect.contains(point))
    }

    pub fn zone(&self, slug: &str) -> Option<&ZoneRegion> {
        self.zones.iter().find(|z| z.layout.slug == slug)
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty() && self.zones.is_empty()
    }
}
