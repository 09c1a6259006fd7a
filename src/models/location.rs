//! Location models: validated queries and resolved coordinates

use serde::{Deserialize, Serialize};

use crate::EcoScanError;

/// Minimum number of characters a query must have after trimming
pub const MIN_QUERY_CHARS: usize = 2;

/// A free-text location query accepted at the service boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Trim and validate raw user input
    pub fn parse(raw: &str) -> crate::Result<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return Err(EcoScanError::validation(format!(
                "location must be at least {MIN_QUERY_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The trimmed query as entered
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip surrounding whitespace and lower-case
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Geographic coordinates in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Format as "lat, lon" with 4 decimals
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lon)
    }

    /// Google Maps search link for these coordinates
    #[must_use]
    pub fn google_maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.lat, self.lon
        )
    }

    /// OpenStreetMap link centred on these coordinates
    #[must_use]
    pub fn openstreetmap_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/#map=10/{}/{}",
            self.lat, self.lon
        )
    }
}

/// Where a resolved location came from
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    /// Matched an entry of the known places table
    Predefined,
    /// Derived from the query's seed
    Estimated,
}

/// Display coordinates and naming for a query
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub coordinates: Coordinates,
    pub name: String,
    pub description: String,
    pub source: LocationSource,
}
