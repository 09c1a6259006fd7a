//! Seeded sampling of raw environmental variables
//!
//! Every field of [`RawEnvironmentalBundle`] is drawn from one generator in
//! the order listed in [`DRAW_ORDER`], followed by the coastal and urban
//! classification draws. Reordering any entry changes every later value for
//! a given seed.

use rand::RngExt;
use rand::rngs::ChaCha8Rng;

use super::normalize::round_to;
use super::seed::seeded_rng;
use crate::models::RawEnvironmentalBundle;

/// Probability that a site is classified as coastal
pub const COASTAL_PROBABILITY: f64 = 0.3;
/// Probability that a site is classified as urban
pub const URBAN_PROBABILITY: f64 = 0.6;

/// Bundle fields in draw order; the discriminant is the draw index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    VegetationIndex,
    HabitatQuality,
    ProtectedAreas,
    AnnualRainfall,
    GroundwaterRisk,
    WaterQuality,
    Pm25Level,
    AirPurity,
    SpeciesRichness,
    EcosystemHealth,
    CurrentTemperature,
    NormalTemperature,
    HumidityLevel,
}

/// Distribution a single field is drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Draw {
    /// Uniform float on `[min, max]`, rounded to `decimals`
    Uniform { min: f64, max: f64, decimals: u32 },
    /// Uniform integer on `[min, max]`
    Integer { min: u32, max: u32 },
}

impl Draw {
    fn sample(&self, rng: &mut ChaCha8Rng) -> f64 {
        let value = match *self {
            Draw::Uniform { min, max, decimals } => {
                round_to(rng.random_range(min..=max), decimals)
            }
            Draw::Integer { min, max } => f64::from(rng.random_range(min..=max)),
        };
        debug_assert!({
            let (min, max) = self.bounds();
            (min..=max).contains(&value)
        });
        value
    }

    /// Inclusive bounds of the values this draw can produce
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        match *self {
            Draw::Uniform { min, max, .. } => (min, max),
            Draw::Integer { min, max } => (f64::from(min), f64::from(max)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawSpec {
    pub field: Field,
    pub draw: Draw,
}

const fn uniform(field: Field, min: f64, max: f64, decimals: u32) -> DrawSpec {
    DrawSpec {
        field,
        draw: Draw::Uniform { min, max, decimals },
    }
}

const fn integer(field: Field, min: u32, max: u32) -> DrawSpec {
    DrawSpec {
        field,
        draw: Draw::Integer { min, max },
    }
}

/// Fixed draw sequence for the bundle
pub const DRAW_ORDER: [DrawSpec; 13] = [
    uniform(Field::VegetationIndex, 0.2, 0.8, 3),
    uniform(Field::HabitatQuality, 0.3, 0.9, 3),
    uniform(Field::ProtectedAreas, 0.05, 0.4, 3),
    uniform(Field::AnnualRainfall, 300.0, 2500.0, 1),
    uniform(Field::GroundwaterRisk, 0.2, 0.9, 3),
    uniform(Field::WaterQuality, 0.4, 0.95, 3),
    uniform(Field::Pm25Level, 15.0, 180.0, 1),
    uniform(Field::AirPurity, 0.3, 0.95, 3),
    integer(Field::SpeciesRichness, 30, 350),
    uniform(Field::EcosystemHealth, 0.4, 0.9, 3),
    uniform(Field::CurrentTemperature, 15.0, 38.0, 1),
    uniform(Field::NormalTemperature, 22.0, 30.0, 1),
    integer(Field::HumidityLevel, 40, 90),
];

/// Population density range in people per km², drawn after the bundle
pub const POPULATION_DENSITY: Draw = Draw::Integer { min: 50, max: 1500 };

/// A generator positioned at the start of a seed's sequence
pub struct EnvironmentalSampler {
    rng: ChaCha8Rng,
}

impl EnvironmentalSampler {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            rng: seeded_rng(seed),
        }
    }

    /// Draw the bundle fields and the two site classifications
    pub fn draw_bundle(&mut self) -> RawEnvironmentalBundle {
        let mut values = [0.0_f64; DRAW_ORDER.len()];
        for (slot, spec) in values.iter_mut().zip(DRAW_ORDER.iter()) {
            *slot = spec.draw.sample(&mut self.rng);
        }
        let value = |field: Field| values[field as usize];

        let is_coastal = self.rng.random::<f64>() < COASTAL_PROBABILITY;
        let is_urban = self.rng.random::<f64>() < URBAN_PROBABILITY;

        RawEnvironmentalBundle {
            vegetation_index: value(Field::VegetationIndex),
            habitat_quality: value(Field::HabitatQuality),
            protected_areas: value(Field::ProtectedAreas),
            annual_rainfall: value(Field::AnnualRainfall),
            groundwater_risk: value(Field::GroundwaterRisk),
            water_quality: value(Field::WaterQuality),
            pm25_level: value(Field::Pm25Level),
            air_purity: value(Field::AirPurity),
            species_richness: value(Field::SpeciesRichness) as u32,
            ecosystem_health: value(Field::EcosystemHealth),
            current_temperature: value(Field::CurrentTemperature),
            normal_temperature: value(Field::NormalTemperature),
            humidity_level: value(Field::HumidityLevel) as u32,
            is_coastal,
            is_urban,
        }
    }

    /// Next draw in the sequence: population density per km²
    pub fn draw_population_density(&mut self) -> u32 {
        POPULATION_DENSITY.sample(&mut self.rng) as u32
    }
}
