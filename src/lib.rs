//! `EcoScan` - deterministic environmental health reports
//!
//! This library turns a free-text location into a reproducible set of
//! environmental scores, a temperature narrative and display coordinates,
//! and exposes them over a small HTTP API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod location_resolver;
pub mod logging;
pub mod models;
pub mod places;
pub mod scoring;
pub mod web;

// Re-export core types for public API
pub use cache::LocationCache;
pub use config::EcoScanConfig;
pub use error::EcoScanError;
pub use location_resolver::LocationResolver;
pub use models::{LocationQuery, RawEnvironmentalBundle, Report, ResolvedLocation};
pub use scoring::{assess, derive_seed, generate_report};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, EcoScanError>;
