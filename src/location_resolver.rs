//! Location Resolution Module
//!
//! Resolves free-text location queries into display coordinates. Known
//! places come from a fixed table; anything else gets pseudo-coordinates
//! derived from the query's seed, memoized in an injected [`LocationCache`].

use rand::RngExt;
use tracing::{debug, info};

use crate::cache::LocationCache;
use crate::models::location::normalize_query;
use crate::models::{Coordinates, LocationSource, ResolvedLocation};
use crate::places::find_known_place;
use crate::scoring::seed::{derive_seed, seeded_rng};
use crate::scoring::normalize::round_to;

/// Latitude band estimated coordinates are drawn from
pub const ESTIMATED_LAT_RANGE: (f64, f64) = (-55.0, 70.0);
/// Longitude band estimated coordinates are drawn from
pub const ESTIMATED_LON_RANGE: (f64, f64) = (-180.0, 180.0);

const ESTIMATED_DESCRIPTION: &str = "Location approximated based on name";

/// Service for resolving location queries
#[derive(Debug, Clone, Default)]
pub struct LocationResolver {
    cache: LocationCache,
}

impl LocationResolver {
    #[must_use]
    pub fn new(cache: LocationCache) -> Self {
        Self { cache }
    }

    /// The memoization cache backing estimated lookups
    #[must_use]
    pub fn cache(&self) -> &LocationCache {
        &self.cache
    }

    /// Resolve a query into display coordinates and a name
    #[tracing::instrument(skip(self))]
    pub fn resolve(&self, query: &str) -> ResolvedLocation {
        let normalized = normalize_query(query);

        if let Some(place) = find_known_place(&normalized) {
            info!("Found known city: {}", place.key);
            return ResolvedLocation {
                coordinates: place.coordinates,
                name: place.display_name.to_string(),
                description: place.description.to_string(),
                source: LocationSource::Predefined,
            };
        }

        if let Some(cached) = self.cache.get(query) {
            debug!("Using cached estimate for {}", query);
            return cached;
        }

        let estimated = Self::estimate(query);
        debug!(
            "Estimated {} at {}",
            estimated.name,
            estimated.coordinates.format_coordinates()
        );
        self.cache.put(query, estimated.clone());
        estimated
    }

    /// Seed-derived coordinates for a query with no known place
    #[must_use]
    pub fn estimate(query: &str) -> ResolvedLocation {
        let mut rng = seeded_rng(derive_seed(query));
        let (lat_min, lat_max) = ESTIMATED_LAT_RANGE;
        let (lon_min, lon_max) = ESTIMATED_LON_RANGE;
        let lat = round_to(rng.random_range(lat_min..=lat_max), 4);
        let lon = round_to(rng.random_range(lon_min..=lon_max), 4);

        ResolvedLocation {
            coordinates: Coordinates::new(lat, lon),
            name: title_case(query.trim()),
            description: ESTIMATED_DESCRIPTION.to_string(),
            source: LocationSource::Estimated,
        }
    }
}

/// Upper-case the first letter of every run of letters, lower-case the rest
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                titled.extend(ch.to_lowercase());
            } else {
                titled.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            titled.push(ch);
            previous_is_letter = false;
        }
    }
    titled
}
