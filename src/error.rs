//! Error types and handling for the `KiteBot` service

use thiserror::Error;

/// Main error type for the `KiteBot` service
#[derive(Error, Debug)]
pub enum KiteBotError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Geocoding provider errors (transport, status, payload)
    #[error("Geocoding error: {message}")]
    Geocoding { message: String },

    /// Weather provider errors (transport, status, payload)
    #[error("Weather error: {message}")]
    Weather { message: String },

    /// Chat transport errors
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl KiteBotError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new geocoding error
    pub fn geocoding<S: Into<String>>(message: S) -> Self {
        Self::Geocoding {
            message: message.into(),
        }
    }

    /// Create a new weather error
    pub fn weather<S: Into<String>>(message: S) -> Self {
        Self::Weather {
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
