//! Environmental health report model

use serde::{Deserialize, Serialize};

use super::SiteType;

/// Unit label attached to every temperature block
pub const TEMPERATURE_UNIT: &str = "°C";

/// Complete report produced for one location seed
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Report {
    /// Mean of the five category scores, clamped to 0-100, 1 decimal
    pub overall_score: f64,
    pub category_scores: CategoryScores,
    pub temperature: TemperatureReport,
    pub detailed_metrics: DetailedMetrics,
    pub descriptions: Descriptions,
    pub site_type: SiteType,
}

/// Per-category scores rounded to 1 decimal
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct CategoryScores {
    pub land: f64,
    pub water: f64,
    pub air: f64,
    pub biodiversity: f64,
    pub climate: f64,
}

/// Temperature readings and their narrative
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TemperatureReport {
    pub current: f64,
    pub normal: f64,
    pub feels_like: f64,
    /// current - normal, 1 decimal
    pub anomaly: f64,
    pub category: String,
    pub feeling: String,
    pub trend: String,
    pub anomaly_description: String,
    pub unit: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DetailedMetrics {
    pub vegetation_health: f64,
    pub annual_rainfall_mm: f64,
    pub pm25_concentration: f64,
    pub air_quality: String,
    pub species_count: u32,
    pub groundwater_risk: f64,
    pub humidity_percent: u32,
    /// People per km²
    pub population_density: u32,
}

/// Qualitative text for the overall score and each category
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Descriptions {
    pub overall: String,
    pub land: String,
    pub water: String,
    pub air: String,
    pub biodiversity: String,
    pub climate: String,
}
