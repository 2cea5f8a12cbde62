//! Category Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// PC category (gama baja, gama alta, streaming, ...)
///
/// Static reference data. The `slug` keys the floor-plan zone the
/// category's stations are drawn in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub slug: String,
    pub label: String,
    /// Hourly price
    #[serde(default, alias = "pricePerHour")]
    pub price: Decimal,
}

/// Category as embedded in a station payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub label: String,
}
