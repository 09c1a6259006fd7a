//! Weighted category scores for land, water, air and biodiversity.
//!
//! Weights sum to 1.0 per category. Results are not clamped; only the
//! climate score and the overall aggregate are.

use super::normalize::normalize;
use crate::models::RawEnvironmentalBundle;

#[must_use]
pub fn land_score(bundle: &RawEnvironmentalBundle) -> f64 {
    0.5 * normalize(bundle.vegetation_index, 0.0, 1.0)
        + 0.3 * (100.0 - normalize(1.0 - bundle.habitat_quality, 0.0, 1.0))
        + 0.2 * normalize(bundle.protected_areas, 0.0, 0.5)
}

#[must_use]
pub fn water_score(bundle: &RawEnvironmentalBundle) -> f64 {
    0.4 * normalize(bundle.annual_rainfall, 200.0, 3000.0)
        + 0.4 * (100.0 - normalize(bundle.groundwater_risk, 0.0, 1.0))
        + 0.2 * normalize(bundle.water_quality, 0.0, 1.0)
}

#[must_use]
pub fn air_score(bundle: &RawEnvironmentalBundle) -> f64 {
    100.0 - normalize(bundle.pm25_level, 0.0, 200.0)
}

#[must_use]
pub fn biodiversity_score(bundle: &RawEnvironmentalBundle) -> f64 {
    0.6 * normalize(f64::from(bundle.species_richness), 0.0, 500.0)
        + 0.4 * normalize(bundle.ecosystem_health, 0.0, 1.0)
}
