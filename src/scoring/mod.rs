//! Deterministic scoring engine
//!
//! A location query is hashed into a seed, the seed drives a sampler that
//! produces the raw environmental variables, and the variables are normalized
//! and combined into category scores and narrative text:
//! - seed: query text to seed
//! - sampler: seed to raw variable bundle
//! - normalize: range rescaling shared by every scorer
//! - categories / climate: bundle to category scores
//! - narrative: scores and readings to labels

pub mod categories;
pub mod climate;
pub mod narrative;
pub mod normalize;
pub mod sampler;
pub mod seed;

pub use categories::{air_score, biodiversity_score, land_score, water_score};
pub use climate::climate_score;
pub use narrative::{Category, TemperatureInsight};
pub use normalize::normalize;
pub use sampler::EnvironmentalSampler;
pub use seed::derive_seed;

use tracing::debug;

use crate::models::report::TEMPERATURE_UNIT;
use crate::models::{
    CategoryScores, Descriptions, DetailedMetrics, RawEnvironmentalBundle, Report,
    TemperatureReport,
};
use normalize::round_to;

/// Build the report for a location query
#[tracing::instrument(level = "debug")]
pub fn assess(query: &str) -> Report {
    generate_report(derive_seed(query))
}

/// Build the report for a seed
#[must_use]
pub fn generate_report(seed: u32) -> Report {
    let mut sampler = EnvironmentalSampler::new(seed);
    let bundle = sampler.draw_bundle();
    let population_density = sampler.draw_population_density();

    let report = score_bundle(&bundle, population_density);
    debug!(
        seed,
        overall = report.overall_score,
        site_type = ?report.site_type,
        "Generated environmental report"
    );
    report
}

/// Score an already sampled bundle
#[must_use]
pub fn score_bundle(bundle: &RawEnvironmentalBundle, population_density: u32) -> Report {
    let site_type = bundle.site_type();

    let land = land_score(bundle);
    let water = water_score(bundle);
    let air = air_score(bundle);
    let biodiversity = biodiversity_score(bundle);
    let climate = climate_score(
        bundle.current_temperature,
        bundle.normal_temperature,
        site_type,
    );

    let mean = (land + water + air + biodiversity + climate) / 5.0;
    let overall_score = round_to(mean.clamp(0.0, 100.0), 1);

    let insight = narrative::temperature_insight(
        bundle.current_temperature,
        bundle.normal_temperature,
    );
    let feels_like = narrative::feels_like(
        bundle.current_temperature,
        Some(f64::from(bundle.humidity_level)),
    );

    Report {
        overall_score,
        category_scores: CategoryScores {
            land: round_to(land, 1),
            water: round_to(water, 1),
            air: round_to(air, 1),
            biodiversity: round_to(biodiversity, 1),
            climate: round_to(climate, 1),
        },
        temperature: TemperatureReport {
            current: bundle.current_temperature,
            normal: bundle.normal_temperature,
            feels_like,
            anomaly: round_to(bundle.temperature_anomaly(), 1),
            category: insight.category.to_string(),
            feeling: insight.feeling.to_string(),
            trend: insight.trend.to_string(),
            anomaly_description: insight.anomaly_description,
            unit: TEMPERATURE_UNIT.to_string(),
        },
        detailed_metrics: DetailedMetrics {
            vegetation_health: bundle.vegetation_index,
            annual_rainfall_mm: bundle.annual_rainfall,
            pm25_concentration: bundle.pm25_level,
            air_quality: narrative::air_quality_label(bundle.pm25_level).to_string(),
            species_count: bundle.species_richness,
            groundwater_risk: bundle.groundwater_risk,
            humidity_percent: bundle.humidity_level,
            population_density,
        },
        descriptions: Descriptions {
            overall: narrative::score_description(overall_score).to_string(),
            land: narrative::category_description(Category::Land, land).to_string(),
            water: narrative::category_description(Category::Water, water).to_string(),
            air: narrative::category_description(Category::Air, air).to_string(),
            biodiversity: narrative::category_description(Category::Biodiversity, biodiversity)
                .to_string(),
            climate: narrative::category_description(Category::Climate, climate).to_string(),
        },
        site_type,
    }
}
