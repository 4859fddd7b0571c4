use serde::Deserialize;

use crate::{KiteBotError, Result};

/// Telegram bot API [response][1].
///
/// [1]: https://core.telegram.org/bots/api#making-requests
#[derive(Debug, Deserialize)]
pub struct TelegramResult<T> {
    pub ok: bool,

    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i32>,
}

impl<T> From<TelegramResult<T>> for Result<T> {
    fn from(response: TelegramResult<T>) -> Self {
        match response {
            TelegramResult {
                ok: true,
                result: Some(result),
                ..
            } => Ok(result),
            TelegramResult {
                ok: true,
                result: None,
                ..
            } => Err(KiteBotError::transport("API response is missing `result`")),
            TelegramResult {
                error_code,
                description,
                ..
            } => Err(KiteBotError::transport(format!(
                "API error {}: {}",
                error_code.unwrap_or_default(),
                description.as_deref().unwrap_or("no description")
            ))),
        }
    }
}
