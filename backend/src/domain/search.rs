//! Search history domain types.
//!
//! Rows live in an external store; these types are the boundary shapes. The
//! insert path is deliberately forgiving: clients post whatever their last
//! score response contained, so numbers may arrive as JSON numbers or as
//! numeric strings, and anything unusable becomes null rather than an
//! error. The only hard requirement is a non-empty query text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A history row as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Row identifier assigned by the store.
    pub id: i64,
    /// The free-text query as submitted (trimmed).
    pub query: String,
    /// Departure code, when the client supplied one.
    pub from_iata: Option<String>,
    /// Arrival code, when the client supplied one.
    pub to_iata: Option<String>,
    /// Distance in kilometres, when the client supplied a usable number.
    pub distance_km: Option<f64>,
    /// CO2 estimate in kg, when the client supplied a usable number.
    pub co2_per_pax_kg: Option<f64>,
    /// Creation timestamp assigned by the store.
    pub created_at: DateTime<Utc>,
}

/// Validation errors for [`NewSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchValidationError {
    /// The query text is empty after trimming.
    #[error("search query must not be empty")]
    EmptyQuery,
}

/// Validated insert payload for the history store.
///
/// Field names match the store's column names so the struct serialises
/// directly into the insert row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSearch {
    /// Trimmed, non-empty query text.
    pub query: String,
    /// Optional departure code; empty strings become null.
    pub from_iata: Option<String>,
    /// Optional arrival code; empty strings become null.
    pub to_iata: Option<String>,
    /// Optional distance, coerced to a finite number or null.
    pub distance_km: Option<f64>,
    /// Optional CO2 estimate, coerced to a finite number or null.
    pub co2_per_pax_kg: Option<f64>,
}

impl NewSearch {
    /// Build a validated payload from raw client input.
    ///
    /// # Errors
    /// Returns [`SearchValidationError::EmptyQuery`] when `query` trims to
    /// nothing; every other field degrades to null instead of failing.
    pub fn from_parts(
        query: &str,
        from: Option<String>,
        to: Option<String>,
        distance_km: Option<&Value>,
        co2_per_pax_kg: Option<&Value>,
    ) -> Result<Self, SearchValidationError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchValidationError::EmptyQuery);
        }
        Ok(Self {
            query: query.to_owned(),
            from_iata: from.filter(|code| !code.is_empty()),
            to_iata: to.filter(|code| !code.is_empty()),
            distance_km: coerce_number(distance_km),
            co2_per_pax_kg: coerce_number(co2_per_pax_kg),
        })
    }
}

/// Coerce a loosely typed JSON value to a finite number.
///
/// Accepts JSON numbers and numeric strings (trimmed). Everything else,
/// including null, booleans, objects and non-finite text, becomes `None`.
#[must_use]
pub fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64().filter(|v| v.is_finite()),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}
