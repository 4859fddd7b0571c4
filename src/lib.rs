//! `KiteBot` - kitesurfing wind reports over Telegram
//!
//! This library resolves a free-text beach name to coordinates, fetches the
//! current wind for that spot, classifies it for kitesurfing and renders the
//! chat reply.

pub mod bot;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod geocoding;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod telegram;
pub mod transport;
pub mod weather;
pub mod wind_analysis;

// Re-export core types for public API
pub use config::KiteBotConfig;
pub use error::KiteBotError;
pub use geocoding::{Geocoder, NominatimClient};
pub use models::{GeoResult, LocationQuery, PipelineOutcome, WeatherSnapshot};
pub use pipeline::{PipelineOrchestrator, StageTimeouts};
pub use transport::{ChatId, ChatTransport, MessageHandle};
pub use weather::{OpenMeteoClient, WeatherProvider};
pub use wind_analysis::{WindAssessment, WindCondition};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, KiteBotError>;
