use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::task;
use tracing::{error, info, warn};

use crate::{
    EcoScanError, VERSION,
    location_resolver::LocationResolver,
    models::{
        Coordinates, Descriptions, LocationQuery, LocationSource, Report, ResolvedLocation,
        TemperatureReport,
    },
    scoring,
};

const SERVICE_NAME: &str = "EcoImpactScanner";

const DEMO_NOTE: &str = "This is demonstration data generated from location name. Real environmental data would require API integration with actual data sources.";

/// Shared state for the API handlers
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub resolver: LocationResolver,
}

impl AppState {
    #[must_use]
    pub fn new(resolver: LocationResolver) -> Self {
        Self { resolver }
    }
}

#[derive(Debug, Deserialize)]
pub struct GeocodeRequest {
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub location_input: String,
    pub resolved_name: String,
    pub description: String,
    pub source: LocationSource,
    pub coordinates: Coordinates,
    pub scores: ApiScores,
    pub temperature: TemperatureReport,
    pub air_quality: String,
    pub descriptions: Descriptions,
    pub links: ApiLinks,
    pub note: String,
    pub generated_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiScores {
    pub ehs: f64,
    pub land: f64,
    pub water: f64,
    pub air: f64,
    pub bio: f64,
    pub climate: f64,
    pub details: ApiDetails,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiDetails {
    pub ndvi: f64,
    pub pm25_ugm3: f64,
    pub annual_rainfall_mm: f64,
    pub species_richness_index: u32,
    pub temp_anomaly_c: f64,
    pub population_density: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiLinks {
    pub google_maps: String,
    pub openstreetmap: String,
}

impl GeocodeResponse {
    fn build(query: &LocationQuery, location: ResolvedLocation, report: Report) -> Self {
        let metrics = &report.detailed_metrics;
        let scores = ApiScores {
            ehs: report.overall_score,
            land: report.category_scores.land,
            water: report.category_scores.water,
            air: report.category_scores.air,
            bio: report.category_scores.biodiversity,
            climate: report.category_scores.climate,
            details: ApiDetails {
                ndvi: metrics.vegetation_health,
                pm25_ugm3: metrics.pm25_concentration,
                annual_rainfall_mm: metrics.annual_rainfall_mm,
                species_richness_index: metrics.species_count,
                temp_anomaly_c: report.temperature.anomaly,
                population_density: format!("{}/km²", metrics.population_density),
            },
        };
        let links = ApiLinks {
            google_maps: location.coordinates.google_maps_url(),
            openstreetmap: location.coordinates.openstreetmap_url(),
        };

        Self {
            location_input: query.to_string(),
            resolved_name: location.name,
            description: location.description,
            source: location.source,
            coordinates: location.coordinates,
            scores,
            air_quality: report.detailed_metrics.air_quality,
            temperature: report.temperature,
            descriptions: report.descriptions,
            links,
            note: DEMO_NOTE.to_string(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// JSON body returned for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub message: String,
}

/// Failures surfaced to API clients
#[derive(Debug)]
pub enum ApiError {
    /// Body missing, not JSON, or not the expected shape
    InvalidBody,
    /// Location text failed validation
    InvalidLocation,
    /// Assessment failed after the input was accepted
    Internal(String),
}

impl From<EcoScanError> for ApiError {
    fn from(err: EcoScanError) -> Self {
        match err {
            EcoScanError::Validation { .. } => ApiError::InvalidLocation,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::InvalidBody => (
                StatusCode::BAD_REQUEST,
                "Please send JSON data",
                "Content-Type must be application/json",
            ),
            ApiError::InvalidLocation => (
                StatusCode::BAD_REQUEST,
                "Valid location required",
                "Enter a city, region, or country name",
            ),
            ApiError::Internal(detail) => {
                error!("Geocoding error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Geocoding failed",
                    "Unable to process location. Try a different search term.",
                )
            }
        };
        let body = ErrorBody {
            success: false,
            error: error.to_string(),
            message: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/geocode", post(geocode_location))
        .route("/health", get(health_check))
        .with_state(state)
}

#[tracing::instrument(skip_all)]
async fn geocode_location(
    State(state): State<AppState>,
    payload: Result<Json<GeocodeRequest>, JsonRejection>,
) -> Result<Json<GeocodeResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected geocode body: {}", rejection.body_text());
        ApiError::InvalidBody
    })?;

    let query = LocationQuery::parse(&request.location)?;
    info!("Geocoding location: {}", query);

    let resolver = state.resolver.clone();
    let text = query.as_str().to_string();
    let (location, report) =
        task::spawn_blocking(move || (resolver.resolve(&text), scoring::assess(&text)))
            .await
            .map_err(EcoScanError::from)?;

    Ok(Json(GeocodeResponse::build(&query, location, report)))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let err: ApiError = EcoScanError::validation("too short").into();
        assert!(matches!(err, ApiError::InvalidLocation));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_failed_assessment_maps_to_server_error() {
        let join_err = task::spawn_blocking(|| -> u32 { panic!("sampler failure") })
            .await
            .unwrap_err();
        let err: ApiError = EcoScanError::from(join_err).into();
        assert!(matches!(err, ApiError::Internal(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert!(!body.success);
        assert_eq!(body.error, "Geocoding failed");
        assert_eq!(
            body.message,
            "Unable to process location. Try a different search term."
        );
    }

    #[test]
    fn test_config_errors_map_to_server_error() {
        let err: ApiError = EcoScanError::config("unreadable").into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn test_response_mirrors_report() {
        let query = LocationQuery::parse("Zorblaxia").unwrap();
        let location = LocationResolver::estimate(query.as_str());
        let report = scoring::assess(query.as_str());
        let response = GeocodeResponse::build(&query, location.clone(), report.clone());

        assert_eq!(response.location_input, "Zorblaxia");
        assert_eq!(response.resolved_name, location.name);
        assert_eq!(response.source, LocationSource::Estimated);
        assert_eq!(response.scores.ehs, report.overall_score);
        assert_eq!(response.scores.bio, report.category_scores.biodiversity);
        assert_eq!(response.scores.details.temp_anomaly_c, report.temperature.anomaly);
        assert!(response.scores.details.population_density.ends_with("/km²"));
        assert_eq!(response.links.google_maps, location.coordinates.google_maps_url());
        assert!(response.generated_at.ends_with('Z'));
    }
}
