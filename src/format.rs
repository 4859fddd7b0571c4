//! Rendering of pipeline outcomes into Telegram `Markdown` messages

use std::borrow::Cow;
use std::fmt::Write;

use crate::models::{LocationQuery, PipelineOutcome, WeatherSnapshot};
use crate::wind_analysis::{NOT_AVAILABLE, WindAssessment};

/// Characters of the query echoed back in the "searching" placeholder
pub const PLACEHOLDER_QUERY_CHARS: usize = 50;

const SEPARATOR: &str = "────────────────────";

/// Characters with a meaning in Telegram's legacy `Markdown` parse mode.
const MARKDOWN_SPECIAL: [char; 4] = ['_', '*', '`', '['];

/// Escape the text for Telegram `Markdown` markup.
#[must_use]
pub fn escape_markdown(text: &str) -> Cow<'_, str> {
    if !text.contains(MARKDOWN_SPECIAL) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if MARKDOWN_SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

/// Drop the markup characters from text shown inside an entity.
///
/// Legacy `Markdown` has no escapes inside `*bold*` or `_italic_`.
#[must_use]
pub fn strip_markdown(text: &str) -> Cow<'_, str> {
    if text.contains(MARKDOWN_SPECIAL) {
        Cow::Owned(text.replace(MARKDOWN_SPECIAL, ""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Message sent right away, later edited into the final report.
#[must_use]
pub fn searching_placeholder(query: &LocationQuery) -> String {
    let shown = strip_markdown(query.preview(PLACEHOLDER_QUERY_CHARS));
    let shown = shown.trim();
    if shown.is_empty() {
        "🔍 Searching...".to_string()
    } else {
        format!("🔍 Searching: *{shown}*...")
    }
}

/// Reply to a message that contained only whitespace.
#[must_use]
pub fn empty_query_prompt() -> &'static str {
    "Please type the name of a beach.\nExample: *Praia do Coqueiro, Piauí*"
}

/// Render the final text for one pipeline outcome.
#[must_use]
pub fn render(outcome: &PipelineOutcome) -> String {
    match outcome {
        PipelineOutcome::Success {
            location,
            weather,
            assessment,
        } => render_report(location.short_address(), weather, assessment),
        PipelineOutcome::NotFound => concat!(
            "❌ *Location not found!*\n\n",
            "_Tips for a better search:_\n",
            "1. Use: `Beach, State`\n",
            "2. Check the spelling\n",
            "3. Specify the state\n\n",
            "Use /spots to see popular spots.",
        )
        .to_string(),
        PipelineOutcome::WeatherUnavailable => concat!(
            "⚠️ *Could not fetch weather data*\n",
            "Please try again in a few minutes.",
        )
        .to_string(),
        PipelineOutcome::UnexpectedError(_) => concat!(
            "💥 *Unexpected error*\n\n",
            "Something went wrong on our side.\n",
            "Please try again in a few seconds.",
        )
        .to_string(),
    }
}

fn render_report(address: &str, weather: &WeatherSnapshot, assessment: &WindAssessment) -> String {
    let emoji = assessment.condition_emoji();
    let mut text = String::with_capacity(512);

    // Writing into a String cannot fail.
    let _ = writeln!(text, "*🌊 KITESURF CONDITIONS*");
    let _ = writeln!(text, "📍 *Location:* {}", escape_markdown(address));
    let _ = writeln!(text, "{SEPARATOR}");
    let _ = writeln!(
        text,
        "💨 *Average wind:* {}",
        knots_or_na(weather.wind_speed_kmh, assessment.speed_knots)
    );
    let _ = writeln!(
        text,
        "🌪️ *Gusts:* {}",
        knots_or_na(weather.wind_gust_kmh, assessment.gust_knots)
    );
    let _ = writeln!(text, "🧭 *Direction:* {}", assessment.cardinal);
    let _ = writeln!(
        text,
        "🌡️ *Temperature:* {}",
        weather
            .temperature_c
            .map_or_else(|| NOT_AVAILABLE.to_string(), |celsius| format!("{celsius:.1}°C"))
    );
    let _ = writeln!(text, "{SEPARATOR}");
    let _ = writeln!(
        text,
        "{emoji} *{}* {emoji}",
        capitalize(assessment.condition_label())
    );
    text.push_str("\n_Live data • updated automatically_");
    text
}

/// Knots for display; a speed the provider never sent stays `N/A`.
fn knots_or_na(raw_kmh: Option<f64>, knots: f64) -> String {
    match raw_kmh {
        Some(_) => format!("{knots:.1} knots"),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
