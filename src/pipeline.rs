//! Request-resolution pipeline
//!
//! Turns one chat message into one wind report: geocode the text, fetch the
//! current weather for the match, assess the wind and render the result. Each
//! stage failure short-circuits into its own [`PipelineOutcome`] variant, and a
//! panic anywhere in the run becomes [`PipelineOutcome::UnexpectedError`].

use futures::FutureExt;
use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, error, info, instrument, warn};

use crate::Result;
use crate::config::KiteBotConfig;
use crate::format::{empty_query_prompt, render, searching_placeholder};
use crate::geocoding::Geocoder;
use crate::models::{LocationQuery, PipelineOutcome};
use crate::transport::{ChatId, ChatTransport};
use crate::weather::WeatherProvider;
use crate::wind_analysis::WindAssessment;

/// Upper bound for each external call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTimeouts {
    pub geocoding: Duration,
    pub weather: Duration,
}

impl StageTimeouts {
    #[must_use]
    pub fn from_config(config: &KiteBotConfig) -> Self {
        Self {
            geocoding: config.geocoding.timeout(),
            weather: config.weather.timeout(),
        }
    }
}

impl Default for StageTimeouts {
    fn default() -> Self {
        Self {
            geocoding: Duration::from_secs(10),
            weather: Duration::from_secs(10),
        }
    }
}

/// Pipeline states, in the order one run walks through them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Geocoding,
    Weathering,
    Assessing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::Geocoding => "geocoding",
            Stage::Weathering => "weathering",
            Stage::Assessing => "assessing",
        };
        f.write_str(name)
    }
}

/// Sequences geocoding, weather lookup, assessment and formatting.
///
/// Holds no per-run state, so one instance serves every chat concurrently.
pub struct PipelineOrchestrator {
    geocoder: Arc<dyn Geocoder>,
    weather: Arc<dyn WeatherProvider>,
    timeouts: StageTimeouts,
}

impl PipelineOrchestrator {
    #[must_use]
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        weather: Arc<dyn WeatherProvider>,
        timeouts: StageTimeouts,
    ) -> Self {
        Self {
            geocoder,
            weather,
            timeouts,
        }
    }

    /// Run every stage for `query` and return exactly one outcome.
    pub async fn run(&self, query: &LocationQuery) -> PipelineOutcome {
        match AssertUnwindSafe(self.run_stages(query)).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(panic) => {
                let detail = panic_detail(panic.as_ref());
                error!(query = query.as_str(), "Pipeline panicked: {}", detail);
                PipelineOutcome::UnexpectedError(detail)
            }
        }
    }

    async fn run_stages(&self, query: &LocationQuery) -> PipelineOutcome {
        debug!(stage = %Stage::Geocoding, "Pipeline transition from {}", Stage::Idle);
        let geocoded = timeout(self.timeouts.geocoding, self.geocoder.geocode(query)).await;
        let location = match geocoded {
            Ok(Ok(Some(location))) => location,
            Ok(Ok(None)) => {
                info!(query = query.as_str(), reason = "no_match", "Location not found");
                return PipelineOutcome::NotFound;
            }
            Ok(Err(e)) => {
                warn!(
                    query = query.as_str(),
                    reason = "provider_error",
                    "Location not found: {}",
                    e
                );
                return PipelineOutcome::NotFound;
            }
            Err(_) => {
                warn!(
                    query = query.as_str(),
                    reason = "timeout",
                    "Location not found: geocoding exceeded {:?}",
                    self.timeouts.geocoding
                );
                return PipelineOutcome::NotFound;
            }
        };

        debug!(
            stage = %Stage::Weathering,
            coordinates = %location.format_coordinates(),
            "Pipeline transition"
        );
        let fetched = timeout(
            self.timeouts.weather,
            self.weather
                .current_conditions(location.latitude, location.longitude),
        )
        .await;
        let weather = match fetched {
            Ok(Ok(weather)) => weather,
            Ok(Err(e)) => {
                warn!(coordinates = %location.format_coordinates(), "Weather unavailable: {}", e);
                return PipelineOutcome::WeatherUnavailable;
            }
            Err(_) => {
                warn!(
                    coordinates = %location.format_coordinates(),
                    "Weather unavailable: request exceeded {:?}",
                    self.timeouts.weather
                );
                return PipelineOutcome::WeatherUnavailable;
            }
        };

        debug!(stage = %Stage::Assessing, "Pipeline transition");
        let assessment = WindAssessment::assess(&weather);

        PipelineOutcome::Success {
            location,
            weather,
            assessment,
        }
    }

    /// Answer one chat message: placeholder first, then a single edit with the result.
    ///
    /// Whitespace-only text gets a short prompt and no placeholder.
    #[instrument(skip(self, transport, text))]
    pub async fn handle_message<T>(&self, transport: &T, chat_id: ChatId, text: &str) -> Result<()>
    where
        T: ChatTransport + ?Sized,
    {
        let Ok(query) = LocationQuery::parse(text) else {
            debug!("Empty query, prompting for a beach name");
            transport.send_message(chat_id, empty_query_prompt()).await?;
            return Ok(());
        };

        let start_time = Instant::now();
        let placeholder = transport
            .send_message(chat_id, &searching_placeholder(&query))
            .await?;

        let outcome = self.run(&query).await;
        let reply = render_or_apologize(&outcome);
        info!(
            query = query.as_str(),
            outcome = outcome.kind(),
            "Pipeline finished in {:.3}s",
            start_time.elapsed().as_secs_f64()
        );

        transport.edit_message(&placeholder, &reply).await
    }
}

/// Render the outcome; a panicking renderer degrades to the generic apology.
fn render_or_apologize(outcome: &PipelineOutcome) -> String {
    std::panic::catch_unwind(AssertUnwindSafe(|| render(outcome))).unwrap_or_else(|panic| {
        let detail = panic_detail(panic.as_ref());
        error!("Formatting panicked: {}", detail);
        render(&PipelineOutcome::UnexpectedError(detail))
    })
}

fn panic_detail(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
