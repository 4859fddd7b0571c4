//! Telegram Bot API connection
//!
//! Long polling for incoming messages and the outbound [`ChatTransport`] used
//! by the pipeline.

pub mod methods;
pub mod objects;
pub mod result;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::TelegramConfig;
use crate::telegram::methods::{
    AllowedUpdate, DEFAULT_TIMEOUT, EditMessageText, GetMe, GetUpdates, Method, SendMessage,
};
use crate::telegram::objects::{ParseMode, Update, User};
use crate::telegram::result::TelegramResult;
use crate::transport::{ChatId, ChatTransport, MessageHandle};
use crate::{KiteBotError, Result};

/// Telegram bot API connection.
#[must_use]
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    token: String,
    base_url: String,
}

impl TelegramClient {
    pub fn new(config: &TelegramConfig, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(concat!("kitebot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| KiteBotError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: token.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Call the Telegram Bot API method.
    #[instrument(skip_all, fields(method = M::NAME))]
    pub async fn call<M: Method>(&self, method: &M) -> Result<M::Response> {
        let url = format!("{}/bot{}/{}", self.base_url, self.token, M::NAME);
        let response = self
            .client
            .post(url)
            .json(method)
            .timeout(method.timeout())
            .send()
            .await
            // The URL carries the token, keep it out of error messages.
            .map_err(|e| {
                KiteBotError::transport(format!("{} request failed: {}", M::NAME, e.without_url()))
            })?;

        debug!(status = %response.status(), "Telegram responded");
        response
            .json::<TelegramResult<M::Response>>()
            .await
            .map_err(|e| {
                KiteBotError::transport(format!(
                    "Failed to parse {} response: {}",
                    M::NAME,
                    e.without_url()
                ))
            })?
            .into()
    }

    pub async fn get_me(&self) -> Result<User> {
        self.call(&GetMe {}).await
    }

    /// Fetch message updates starting at `offset`, long-polling for `poll_timeout_secs`.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        poll_timeout_secs: u64,
    ) -> Result<Vec<Update>> {
        self.call(&GetUpdates {
            offset,
            timeout_secs: Some(poll_timeout_secs),
            allowed_updates: Some(vec![AllowedUpdate::Message]),
        })
        .await
    }
}

#[async_trait]
impl ChatTransport for TelegramClient {
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<MessageHandle> {
        let message = self
            .call(&SendMessage {
                chat_id,
                text,
                parse_mode: Some(ParseMode::Markdown),
            })
            .await?;
        Ok(MessageHandle {
            chat_id: message.chat.id,
            message_id: message.id,
        })
    }

    async fn edit_message(&self, handle: &MessageHandle, text: &str) -> Result<()> {
        self.call(&EditMessageText {
            chat_id: handle.chat_id,
            message_id: handle.message_id,
            text,
            parse_mode: Some(ParseMode::Markdown),
        })
        .await?;
        Ok(())
    }
}
