//! Climate comfort scoring from current and normal temperature

use crate::models::SiteType;

const COMFORT_WEIGHT: f64 = 0.7;
const ANOMALY_WEIGHT: f64 = 0.3;

/// Piecewise comfort score for an absolute temperature in °C
#[must_use]
pub fn base_comfort_score(temp: f64) -> f64 {
    if (20.0..=28.0).contains(&temp) {
        100.0
    } else if !(10.0..=38.0).contains(&temp) {
        20.0
    } else if temp < 20.0 {
        50.0 + (temp - 10.0) * 5.0
    } else {
        100.0 - (temp - 28.0) * 8.0
    }
}

/// Score for the absolute distance between current and normal temperature
#[must_use]
pub fn anomaly_score(current: f64, normal: f64) -> f64 {
    let anomaly = (current - normal).abs();
    if anomaly <= 1.0 {
        100.0
    } else if anomaly <= 3.0 {
        100.0 - (anomaly - 1.0) * 25.0
    } else if anomaly <= 5.0 {
        50.0 - (anomaly - 3.0) * 15.0
    } else {
        10.0
    }
}

/// Multiplier applied to the comfort score for a site type
#[must_use]
pub fn site_adjustment(current: f64, normal: f64, site_type: SiteType) -> f64 {
    match site_type {
        SiteType::Coastal if (current - 25.0).abs() <= 5.0 => 1.1,
        SiteType::Coastal => 0.9,
        SiteType::Urban if current > normal + 2.0 => 0.9,
        SiteType::Urban | SiteType::Inland => 1.0,
    }
}

/// Combined climate score, clamped to 0-100
#[must_use]
pub fn climate_score(current: f64, normal: f64, site_type: SiteType) -> f64 {
    let adjusted = base_comfort_score(current) * site_adjustment(current, normal, site_type);
    let score = COMFORT_WEIGHT * adjusted + ANOMALY_WEIGHT * anomaly_score(current, normal);
    score.clamp(0.0, 100.0)
}
