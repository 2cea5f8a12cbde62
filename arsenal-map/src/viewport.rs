//! Pan / zoom transform between screen and floor plan
//!
//! `screen = logical * scale + offset`

use crate::geometry::Point;

pub const MIN_SCALE: f64 = 0.35;
pub const MAX_SCALE: f64 = 2.5;

pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Visible area and its transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub offset: Point,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scale: 1.0,
            offset: Point::ORIGIN,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn to_logical(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset.x) / self.scale,
            (screen.y - self.offset.y) / self.scale,
        )
    }

    pub fn to_screen(&self, logical: Point) -> Point {
        Point::new(
            logical.x * self.scale + self.offset.x,
            logical.y * self.scale + self.offset.y,
        )
    }

    /// Scale that shows the whole `content` with `padding` on every side,
    /// never above 1.0, then centers it.
    pub fn fit(&mut self, content_width: f64, content_height: f64, padding: f64) {
        let avail_w = self.width - padding * 2.0;
        let avail_h = self.height - padding * 2.0;
        let scale = if avail_w <= 0.0 || avail_h <= 0.0 {
            MIN_SCALE
        } else {
            (avail_w / content_width).min(avail_h / content_height).min(1.0)
        };
        self.scale = clamp_scale(scale);
        self.offset = Point::new(
            (self.width - content_width * self.scale) / 2.0,
            (self.height - content_height * self.scale) / 2.0,
        );
    }

    /// Multiply the scale by `factor` keeping the logical point under
    /// `anchor` in place. Returns false when clamping leaves the scale as is.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) -> bool {
        let old = self.scale;
        let new = clamp_scale(old * factor);
        if new == old {
            return false;
        }
        self.offset = Point::new(
            anchor.x - (anchor.x - self.offset.x) / old * new,
            anchor.y - (anchor.y - self.offset.y) / old * new,
        );
        self.scale = new;
        true
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset.x += dx;
        self.offset.y += dy;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}
