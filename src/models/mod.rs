//! Data models for the EcoScan service
//!
//! This module contains the domain models organized by concern:
//! - Location: validated queries, coordinates and resolved places
//! - Environment: the raw sampled variables behind a report
//! - Report: scores, temperature narrative and descriptions

pub mod environment;
pub mod location;
pub mod report;

// Re-export all public types for convenient access
pub use environment::{RawEnvironmentalBundle, SiteType};
pub use location::{Coordinates, LocationQuery, LocationSource, ResolvedLocation};
pub use report::{CategoryScores, Descriptions, DetailedMetrics, Report, TemperatureReport};
