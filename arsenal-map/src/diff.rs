//! Refresh change detection
//!
//! A fresh station list needs a redraw iff its length differs from the
//! drawn one, or some id's status differs from (or is missing in) the
//! drawn statuses. Other fields are not compared.

use shared::{Station, StationStatus};
use std::collections::HashMap;

/// Per-id statuses of the last drawn station list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusSnapshot {
    count: usize,
    statuses: HashMap<i64, StationStatus>,
}

impl StatusSnapshot {
    pub fn capture(stations: &[Station]) -> Self {
        Self {
            count: stations.len(),
            statuses: stations.iter().map(|s| (s.id, s.status)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn status_of(&self, station_id: i64) -> Option<StationStatus> {
        self.statuses.get(&station_id).copied()
    }

    pub fn differs_from(&self, next: &[Station]) -> bool {
        next.len() != self.count
            || next
                .iter()
                .any(|s| self.statuses.get(&s.id) != Some(&s.status))
    }
}
