//! Floor plan zone table
//!
//! Every category the map can draw has a hand-placed region here, keyed
//! by slug. Categories whose slug is missing are not drawn.

use crate::geometry::{Point, Rect};

/// Logical floor plan width
pub const CANVAS_WIDTH: f64 = 1600.0;
/// Logical floor plan height
pub const CANVAS_HEIGHT: f64 = 1000.0;

/// Side of one seat icon
pub const SEAT_SIZE: f64 = 44.0;
/// Grid pitch between seat origins
pub const SEAT_SPACING: f64 = 64.0;
/// Inner margin of a zone region
pub const ZONE_PADDING: f64 = 24.0;
/// Room for the zone caption above the first seat row
pub const ZONE_HEADER: f64 = 36.0;

/// Static placement of one category region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneLayout {
    pub slug: &'static str,
    pub name: &'static str,
    pub origin: Point,
    pub columns: usize,
}

pub static ZONE_LAYOUTS: [ZoneLayout; 5] = [
    ZoneLayout {
        slug: "gama-baja",
        name: "Lower Deck",
        origin: Point::new(60.0, 660.0),
        columns: 14,
    },
    ZoneLayout {
        slug: "gama-media",
        name: "Arena West",
        origin: Point::new(60.0, 80.0),
        columns: 5,
    },
    ZoneLayout {
        slug: "gama-alta",
        name: "Arena East",
        origin: Point::new(460.0, 80.0),
        columns: 5,
    },
    ZoneLayout {
        slug: "streaming",
        name: "Stream Row",
        origin: Point::new(860.0, 80.0),
        columns: 4,
    },
    ZoneLayout {
        slug: "vip",
        name: "VIP Lounge",
        origin: Point::new(1220.0, 80.0),
        columns: 4,
    },
];

/// Region registered for `slug`
pub fn zone_for(slug: &str) -> Option<&'static ZoneLayout> {
    ZONE_LAYOUTS.iter().find(|z| z.slug == slug)
}

/// Whether `slug` is on the category allow-list
pub fn is_allowed(slug: &str) -> bool {
    zone_for(slug).is_some()
}

impl ZoneLayout {
    /// Rows needed for `seats` seats, at least one so empty zones stay visible
    pub fn rows_for(&self, seats: usize) -> usize {
        seats.div_ceil(self.columns.max(1)).max(1)
    }

    /// Region bounds; height grows with the row count
    pub fn bounds(&self, seats: usize) -> Rect {
        let rows = self.rows_for(seats) as f64;
        Rect::new(
            self.origin.x,
            self.origin.y,
            ZONE_PADDING * 2.0 + self.columns as f64 * SEAT_SPACING - (SEAT_SPACING - SEAT_SIZE),
            ZONE_HEADER + rows * SEAT_SPACING - (SEAT_SPACING - SEAT_SIZE) + ZONE_PADDING,
        )
    }

    /// Seat `index` placed left-to-right, top-to-bottom
    pub fn seat_rect(&self, index: usize) -> Rect {
        let columns = self.columns.max(1);
        let col = (index % columns) as f64;
        let row = (index / columns) as f64;
        Rect::new(
            self.origin.x + ZONE_PADDING + col * SEAT_SPACING,
            self.origin.y + ZONE_HEADER + row * SEAT_SPACING,
            SEAT_SIZE,
            SEAT_SIZE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(zone_for("vip").map(|z| z.name), Some("VIP Lounge"));
        assert!(is_allowed("gama-baja"));
        assert!(!is_allowed("retro"));
    }

    #[test]
    fn test_grid_placement() {
        let zone = zone_for("streaming").unwrap();
        let first = zone.seat_rect(0);
        let wrap = zone.seat_rect(4);
        assert_eq!(first.x, 860.0 + ZONE_PADDING);
        assert_eq!(first.y, 80.0 + ZONE_HEADER);
        // Column count is 4, so index 4 starts the second row
        assert_eq!(wrap.x, first.x);
        assert_eq!(wrap.y, first.y + SEAT_SPACING);
    }

    #[test]
    fn test_region_grows_with_rows() {
        let zone = zone_for("vip").unwrap();
        assert_eq!(zone.rows_for(0), 1);
        assert_eq!(zone.rows_for(4), 1);
        assert_eq!(zone.rows_for(5), 2);
        assert!(zone.bounds(5).height > zone.bounds(4).height);
        assert_eq!(zone.bounds(0), zone.bounds(1));
    }

    #[test]
    fn test_seats_stay_inside_region() {
        for zone in &ZONE_LAYOUTS {
            let n = zone.columns * 3 + 1;
            let bounds = zone.bounds(n);
            for i in 0..n {
                let seat = zone.seat_rect(i);
                assert!(seat.x >= bounds.x && seat.right() <= bounds.right(), "{}", zone.slug);
                assert!(seat.y >= bounds.y && seat.bottom() <= bounds.bottom(), "{}", zone.slug);
            }
        }
    }

    #[test]
    fn test_regions_fit_canvas() {
        for zone in &ZONE_LAYOUTS {
            let bounds = zone.bounds(zone.columns * 3);
            assert!(bounds.right() <= CANVAS_WIDTH, "{}", zone.slug);
            assert!(bounds.bottom() <= CANVAS_HEIGHT, "{}", zone.slug);
        }
    }
}
