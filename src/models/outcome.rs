//! The single value produced by one pipeline run

use crate::models::{GeoResult, WeatherSnapshot};
use crate::wind_analysis::WindAssessment;

/// Conclusion of one pipeline run; exactly one variant per invocation
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// All stages succeeded
    Success {
        location: GeoResult,
        weather: WeatherSnapshot,
        assessment: WindAssessment,
    },
    /// No geocoding match, or the geocoder failed
    NotFound,
    /// The weather call failed or returned an unusable payload
    WeatherUnavailable,
    /// Anything else; the detail is for logs only
    UnexpectedError(String),
}

impl PipelineOutcome {
    /// Short variant name for structured logging
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineOutcome::Success { .. } => "success",
            PipelineOutcome::NotFound => "not_found",
            PipelineOutcome::WeatherUnavailable => "weather_unavailable",
            PipelineOutcome::UnexpectedError(_) => "unexpected_error",
        }
    }
}
