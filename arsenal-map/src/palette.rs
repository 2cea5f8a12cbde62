//! Seat styling
//!
//! Fill priority: maintenance, then "mine", then available, then occupied.
//! A maintenance seat never reads as available even when the user holds it.

use shared::StationStatus;

/// Seat fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatFill {
    Available,
    Occupied,
    Maintenance,
    /// Held by one of the current user's active bookings
    Mine,
}

impl SeatFill {
    pub fn resolve(status: StationStatus, mine: bool) -> Self {
        match (status, mine) {
            (StationStatus::Maintenance, _) => Self::Maintenance,
            (_, true) => Self::Mine,
            (StationStatus::Available, false) => Self::Available,
            (StationStatus::Occupied, false) => Self::Occupied,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Available => "#22C55E",
            Self::Occupied => "#EF4444",
            Self::Maintenance => "#F59E0B",
            Self::Mine => "#7600A8",
        }
    }
}

/// Seat outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeatRing {
    #[default]
    None,
    /// Solid ring around the selected seat
    Selected,
    /// Dashed ring around an owned, unselected seat
    Owned,
}

impl SeatRing {
    pub fn resolve(selected: bool, mine: bool) -> Self {
        if selected {
            Self::Selected
        } else if mine {
            Self::Owned
        } else {
            Self::None
        }
    }

    pub fn is_dashed(&self) -> bool {
        matches!(self, Self::Owned)
    }

    pub fn color(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Selected => Some("#FFFFFF"),
            Self::Owned => Some("#C084FC"),
        }
    }
}
