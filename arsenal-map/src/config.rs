//! Seat map configuration

use std::time::Duration;

/// Env var overriding the refresh period, in seconds
pub const ENV_REFRESH_SECS: &str = "ARSENAL_REFRESH_SECS";
/// Env var overriding the viewport, as `WIDTHxHEIGHT`
pub const ENV_VIEWPORT: &str = "ARSENAL_VIEWPORT";

/// Seat map tuning
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Available drawing area width (screen px)
    pub viewport_width: f64,
    /// Available drawing area height (screen px)
    pub viewport_height: f64,
    /// Station polling period
    pub refresh_period: Duration,
    /// Margin kept around the floor plan by fit-to-view
    pub fit_padding: f64,
    /// Factor applied by zoom in / zoom out
    pub zoom_step: f64,
    /// Factor applied per wheel notch
    pub wheel_step: f64,
    /// Pointer travel below this is a click, not a drag
    pub drag_threshold: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 800.0,
            refresh_period: Duration::from_secs(3),
            fit_padding: 40.0,
            zoom_step: 1.2,
            wheel_step: 1.1,
            drag_threshold: 3.0,
        }
    }
}

impl MapConfig {
    /// Defaults overridden by `ARSENAL_REFRESH_SECS` / `ARSENAL_VIEWPORT`.
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(secs) = std::env::var(ENV_REFRESH_SECS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|s| *s > 0)
        {
            config.refresh_period = Duration::from_secs(secs);
        }
        if let Some((w, h)) = std::env::var(ENV_VIEWPORT)
            .ok()
            .and_then(|v| parse_viewport(&v))
        {
            config.viewport_width = w;
            config.viewport_height = h;
        }
        config
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    pub fn with_refresh_period(mut self, period: Duration) -> Self {
        self.refresh_period = period;
        self
    }
}

fn parse_viewport(raw: &str) -> Option<(f64, f64)> {
    let (w, h) = raw.trim().split_once(['x', 'X'])?;
    let w: f64 = w.trim().parse().ok()?;
    let h: f64 = h.trim().parse().ok()?;
    (w > 0.0 && h > 0.0).then_some((w, h))
}
