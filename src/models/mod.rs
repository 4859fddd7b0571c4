//! Data models for the `KiteBot` pipeline
//!
//! This module contains the core domain models organized by concern:
//! - Location: user query text and resolved coordinates
//! - Weather: current-conditions snapshot from the weather provider
//! - Outcome: the single result value of one pipeline run

pub mod location;
pub mod outcome;
pub mod weather;

// Re-export all public types for convenient access
pub use location::{GeoResult, LocationQuery};
pub use outcome::PipelineOutcome;
pub use weather::WeatherSnapshot;
