//! Station Model

use serde::{Deserialize, Serialize};

use super::CategoryRef;

/// Bookable PC status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StationStatus {
    Available,
    Occupied,
    Maintenance,
}

impl StationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Occupied => "OCCUPIED",
            Self::Maintenance => "MAINTENANCE",
        }
    }
}

impl std::fmt::Display for StationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Station entity (a bookable PC)
///
/// Read-only on the client: the backend owns every field and the
/// client replaces its copy wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: i64,
    pub label: String,
    #[serde(default)]
    pub slug: String,
    /// Comma separated "CPU, GPU, RAM"
    #[serde(default)]
    pub specs: String,
    pub status: StationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<f64>,
    #[serde(default, rename = "categoryPCResponse", alias = "category")]
    pub category: Option<CategoryRef>,
}

impl Station {
    pub fn category_id(&self) -> Option<i64> {
        self.category.as_ref().map(|c| c.id)
    }

    pub fn is_available(&self) -> bool {
        self.status == StationStatus::Available
    }
}

const SPEC_MISSING: &str = "N/A";

/// Hardware summary split out of [`Station::specs`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSpecs {
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
}

/// Split a "CPU, GPU, RAM" spec string.
///
/// Parts are trimmed; missing or blank parts read as `N/A`.
pub fn parse_specs(specs: &str) -> ParsedSpecs {
    let mut parts = specs.split(',').map(str::trim);
    let mut next = || {
        parts
            .next()
            .filter(|p| !p.is_empty())
            .unwrap_or(SPEC_MISSING)
            .to_string()
    };
    ParsedSpecs {
        cpu: next(),
        gpu: next(),
        ram: next(),
    }
}
