//! Chat transport seam between the pipeline and the messaging platform

use async_trait::async_trait;

use crate::Result;

/// Identifier of a chat on the messaging platform
pub type ChatId = i64;

/// A message the bot has sent and may later edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHandle {
    pub chat_id: ChatId,
    pub message_id: i64,
}

/// Outbound side of a chat platform; all text uses the platform's `Markdown` markup.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<MessageHandle>;

    async fn edit_message(&self, handle: &MessageHandle, text: &str) -> Result<()>;
}
