//! Location models: the user's place query and the geocoded result

use crate::KiteBotError;

/// Trimmed, length-bounded place description typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Maximum number of characters forwarded to the geocoder
    pub const MAX_CHARS: usize = 100;

    /// Trim the raw text and bound it to [`Self::MAX_CHARS`] characters.
    pub fn parse(raw: &str) -> crate::Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(KiteBotError::validation("Location cannot be empty"));
        }
        Ok(Self(truncate_chars(trimmed, Self::MAX_CHARS).to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `max_chars` characters, used for the "searching" placeholder
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> &str {
        truncate_chars(&self.0, max_chars)
    }
}

/// Best geocoding match for a query
#[derive(Debug, Clone, PartialEq)]
pub struct GeoResult {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Canonical address returned by the provider
    pub display_address: String,
}

impl GeoResult {
    /// Number of address characters shown in a report
    pub const DISPLAY_CHARS: usize = 80;

    #[must_use]
    pub fn new(latitude: f64, longitude: f64, display_address: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            display_address: display_address.into(),
        }
    }

    /// Address cut to [`Self::DISPLAY_CHARS`] characters for display
    #[must_use]
    pub fn short_address(&self) -> &str {
        truncate_chars(&self.display_address, Self::DISPLAY_CHARS)
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Slice `text` to at most `max_chars` characters without splitting a code point.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
