//! Booking Model

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{CategoryRef, User};

/// Station as embedded in a booking; only the id is guaranteed
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedStation {
    pub id: i64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub slug: String,
    #[serde(
        default,
        rename = "categoryPCResponse",
        alias = "category",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<CategoryRef>,
}

/// Booking entity (a user holding a station for a number of hours)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub hours: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub pc: BookedStation,
    #[serde(
        default,
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// Whole hours and minutes, rendered as `"{h}h {m}m"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoursMinutes {
    pub hours: i64,
    pub minutes: i64,
}

impl HoursMinutes {
    fn from_duration(duration: Duration) -> Self {
        let minutes = duration.num_minutes().max(0);
        Self {
            hours: minutes / 60,
            minutes: minutes % 60,
        }
    }
}

impl std::fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Time left on a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    Left(HoursMinutes),
    Expired,
}

impl Booking {
    pub fn station_id(&self) -> i64 {
        self.pc.id
    }

    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.map(|start| start + Duration::hours(self.hours))
    }

    /// Time elapsed since the booking started
    pub fn uptime(&self, now: DateTime<Utc>) -> HoursMinutes {
        self.created_at
            .map(|start| HoursMinutes::from_duration(now - start))
            .unwrap_or_default()
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> Remaining {
        let Some(end) = self.ends_at() else {
            return Remaining::Left(HoursMinutes::default());
        };
        let left = end - now;
        if left <= Duration::zero() {
            return Remaining::Expired;
        }
        Remaining::Left(HoursMinutes::from_duration(left))
    }

    /// Share of the booked time still left, in `[0, 100]`
    pub fn remaining_percentage(&self, now: DateTime<Utc>) -> f64 {
        let (Some(start), Some(end)) = (self.created_at, self.ends_at()) else {
            return 0.0;
        };
        let total = (end - start).num_milliseconds();
        if total <= 0 {
            return 0.0;
        }
        let left = (end - now).num_milliseconds();
        (left as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
    }
}

/// Accepts RFC 3339 as well as the zone-less `2024-05-01T18:30:00` form,
/// which is read as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| parse_timestamp(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {s}"))))
        .transpose()
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| s.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc()))
}
