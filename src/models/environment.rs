//! Raw environmental variables sampled for a location

use serde::{Deserialize, Serialize};

/// The sampled variables behind a report, before normalization.
///
/// Entirely determined by the seed it was drawn from and never mutated
/// afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RawEnvironmentalBundle {
    /// Vegetation index (NDVI-like), 0.2-0.8
    pub vegetation_index: f64,
    /// Habitat quality fraction, 0.3-0.9
    pub habitat_quality: f64,
    /// Fraction of protected land, 0.05-0.4
    pub protected_areas: f64,
    /// Annual rainfall in mm, 300-2500
    pub annual_rainfall: f64,
    /// Groundwater depletion risk, 0.2-0.9
    pub groundwater_risk: f64,
    /// Surface water quality, 0.4-0.95
    pub water_quality: f64,
    /// PM2.5 concentration in µg/m³, 15-180
    pub pm25_level: f64,
    /// Air purity, 0.3-0.95 (not scored)
    pub air_purity: f64,
    /// Species count, 30-350
    pub species_richness: u32,
    /// Ecosystem health, 0.4-0.9
    pub ecosystem_health: f64,
    /// Current temperature in °C, 15-38
    pub current_temperature: f64,
    /// Seasonal normal temperature in °C, 22-30
    pub normal_temperature: f64,
    /// Relative humidity in percent, 40-90
    pub humidity_level: u32,
    pub is_coastal: bool,
    pub is_urban: bool,
}

impl RawEnvironmentalBundle {
    /// Signed difference between current and normal temperature
    #[must_use]
    pub fn temperature_anomaly(&self) -> f64 {
        self.current_temperature - self.normal_temperature
    }

    /// Site classification; coastal takes precedence over urban
    #[must_use]
    pub fn site_type(&self) -> SiteType {
        if self.is_coastal {
            SiteType::Coastal
        } else if self.is_urban {
            SiteType::Urban
        } else {
            SiteType::Inland
        }
    }
}

/// Site classification used to adjust the climate comfort score
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SiteType {
    Coastal,
    Urban,
    Inland,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(is_coastal: bool, is_urban: bool) -> RawEnvironmentalBundle {
        RawEnvironmentalBundle {
            vegetation_index: 0.5,
            habitat_quality: 0.6,
            protected_areas: 0.2,
            annual_rainfall: 1200.0,
            groundwater_risk: 0.5,
            water_quality: 0.7,
            pm25_level: 40.0,
            air_purity: 0.6,
            species_richness: 120,
            ecosystem_health: 0.7,
            current_temperature: 27.5,
            normal_temperature: 25.0,
            humidity_level: 60,
            is_coastal,
            is_urban,
        }
    }

    #[test]
    fn test_site_type_precedence() {
        assert_eq!(bundle(true, true).site_type(), SiteType::Coastal);
        assert_eq!(bundle(true, false).site_type(), SiteType::Coastal);
        assert_eq!(bundle(false, true).site_type(), SiteType::Urban);
        assert_eq!(bundle(false, false).site_type(), SiteType::Inland);
    }

    #[test]
    fn test_temperature_anomaly_is_signed() {
        let mut b = bundle(false, false);
        assert!((b.temperature_anomaly() - 2.5).abs() < 1e-9);
        b.current_temperature = 20.0;
        assert!((b.temperature_anomaly() + 5.0).abs() < 1e-9);
    }
}
