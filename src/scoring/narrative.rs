//! Human-readable labels and descriptions derived from scores and readings

use super::normalize::round_to;

/// Humidity assumed when no reading is available
pub const DEFAULT_HUMIDITY: f64 = 65.0;

/// Temperature at and above which the heat index applies
pub const HEAT_INDEX_THRESHOLD: f64 = 27.0;

/// Temperature category and advice for a reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureInsight {
    pub category: &'static str,
    pub feeling: &'static str,
    pub trend: &'static str,
    pub anomaly_description: String,
}

/// Label the absolute temperature and the anomaly against normal
#[must_use]
pub fn temperature_insight(current: f64, normal: f64) -> TemperatureInsight {
    let (category, feeling) = temperature_bucket(current);
    let (trend, anomaly_description) = anomaly_bucket(current - normal);
    TemperatureInsight {
        category,
        feeling,
        trend,
        anomaly_description,
    }
}

fn temperature_bucket(temp: f64) -> (&'static str, &'static str) {
    if temp < 10.0 {
        ("Very Cold ❄️", "Bundle up! It's quite chilly.")
    } else if temp < 20.0 {
        ("Cool 🌤️", "A light jacket might be comfortable.")
    } else if temp <= 28.0 {
        ("Comfortable 😊", "Perfect weather for outdoor activities!")
    } else if temp <= 32.0 {
        ("Warm ☀️", "Stay hydrated in this warm weather.")
    } else if temp <= 38.0 {
        ("Hot 🔥", "Avoid peak sun hours, stay cool.")
    } else {
        ("Extreme Heat 🥵", "Take precautions against heat stress.")
    }
}

fn anomaly_bucket(anomaly: f64) -> (&'static str, String) {
    if anomaly.abs() < 1.0 {
        ("Stable", "Seasonal average".to_string())
    } else if anomaly > 3.0 {
        (
            "Warmer",
            format!("Significantly warmer than usual (+{anomaly:.1}°C)"),
        )
    } else if anomaly > 1.0 {
        ("Slightly warmer", format!("Warmer than usual (+{anomaly:.1}°C)"))
    } else if anomaly < -3.0 {
        (
            "Cooler",
            format!("Significantly cooler than usual ({anomaly:.1}°C)"),
        )
    } else if anomaly < -1.0 {
        ("Slightly cooler", format!("Cooler than usual ({anomaly:.1}°C)"))
    } else {
        // exactly ±1.0
        ("Normal", "Typical for this season".to_string())
    }
}

/// Apparent temperature in °C, rounded to 1 decimal.
///
/// Below [`HEAT_INDEX_THRESHOLD`] the temperature passes through; otherwise
/// the Rothfusz heat index regression is evaluated in °F.
#[must_use]
pub fn feels_like(temp_c: f64, humidity: Option<f64>) -> f64 {
    if temp_c < HEAT_INDEX_THRESHOLD {
        return round_to(temp_c, 1);
    }
    let rh = humidity.unwrap_or(DEFAULT_HUMIDITY);
    let t = temp_c * 9.0 / 5.0 + 32.0;
    let heat_index_f = -42.379 + 2.049_015_23 * t + 10.143_331_27 * rh
        - 0.224_755_41 * t * rh
        - 0.006_837_83 * t * t
        - 0.054_817_17 * rh * rh
        + 0.001_228_74 * t * t * rh
        + 0.000_852_82 * t * rh * rh
        - 0.000_001_99 * t * t * rh * rh;
    round_to((heat_index_f - 32.0) * 5.0 / 9.0, 1)
}

/// Air quality tier for a PM2.5 concentration in µg/m³
#[must_use]
pub fn air_quality_label(pm25: f64) -> &'static str {
    if pm25 <= 12.0 {
        "Excellent"
    } else if pm25 <= 35.0 {
        "Good"
    } else if pm25 <= 55.0 {
        "Moderate"
    } else if pm25 <= 150.0 {
        "Poor"
    } else {
        "Hazardous"
    }
}

/// Description of the overall score
#[must_use]
pub fn score_description(score: f64) -> &'static str {
    if score >= 85.0 {
        "Excellent 🌟 - Outstanding environmental conditions"
    } else if score >= 70.0 {
        "Good 👍 - Healthy environment with minor concerns"
    } else if score >= 55.0 {
        "Moderate ⚖️ - Average environmental conditions"
    } else if score >= 40.0 {
        "Needs Attention ⚠️ - Some environmental challenges"
    } else if score >= 25.0 {
        "Poor 😟 - Significant environmental issues"
    } else {
        "Critical 🚨 - Severe environmental problems"
    }
}

/// Scored category a description is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Land,
    Water,
    Air,
    Biodiversity,
    Climate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    High,
    Medium,
    Low,
}

impl Level {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            Level::High
        } else if score >= 40.0 {
            Level::Medium
        } else {
            Level::Low
        }
    }
}

/// Fixed description for a category at the level its score falls into
#[must_use]
pub fn category_description(category: Category, score: f64) -> &'static str {
    match (category, Level::from_score(score)) {
        (Category::Land, Level::High) => "Lush vegetation with healthy ecosystems",
        (Category::Land, Level::Medium) => "Moderate land health with some conservation",
        (Category::Land, Level::Low) => "Limited vegetation and habitat concerns",
        (Category::Water, Level::High) => "Abundant clean water resources",
        (Category::Water, Level::Medium) => "Adequate water with some sustainability concerns",
        (Category::Water, Level::Low) => "Water scarcity or quality issues",
        (Category::Air, Level::High) => "Fresh, clean air quality",
        (Category::Air, Level::Medium) => "Moderate air with occasional pollution",
        (Category::Air, Level::Low) => "Poor air quality affecting health",
        (Category::Biodiversity, Level::High) => "Rich diversity of species and habitats",
        (Category::Biodiversity, Level::Medium) => {
            "Moderate biodiversity with conservation efforts"
        }
        (Category::Biodiversity, Level::Low) => "Limited species diversity",
        (Category::Climate, Level::High) => "Comfortable climate with stable patterns",
        (Category::Climate, Level::Medium) => "Variable climate with some extremes",
        (Category::Climate, Level::Low) => "Challenging climate conditions",
    }
}
