//! Long-polling dispatcher
//!
//! Pulls updates from Telegram and answers every text message in its own
//! task, so a slow provider call only ever delays the chat that caused it.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::Result;
use crate::commands::Command;
use crate::pipeline::PipelineOrchestrator;
use crate::telegram::TelegramClient;
use crate::telegram::objects::Update;
use crate::transport::{ChatId, ChatTransport};

/// Pause before polling again after a failed `getUpdates`
const POLL_BACKOFF: Duration = Duration::from_secs(5);

pub struct Bot {
    telegram: TelegramClient,
    orchestrator: Arc<PipelineOrchestrator>,
    poll_timeout_secs: u64,
}

impl Bot {
    pub fn new(
        telegram: TelegramClient,
        orchestrator: PipelineOrchestrator,
        poll_timeout_secs: u64,
    ) -> Self {
        Self {
            telegram,
            orchestrator: Arc::new(orchestrator),
            poll_timeout_secs,
        }
    }

    /// Poll and dispatch until Ctrl-C.
    pub async fn run(self) -> Result<()> {
        let mut offset = self.skip_pending_updates().await;
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        info!("Running…");
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutting down");
                    return Ok(());
                }
                polled = self.telegram.get_updates(offset, self.poll_timeout_secs) => match polled {
                    Ok(updates) => {
                        if let Some(last) = updates.last() {
                            offset = Some(last.id + 1);
                            info!(
                                n = updates.len(),
                                next_offset = last.id + 1,
                                "Received Telegram updates"
                            );
                        }
                        for update in updates {
                            self.dispatch(update);
                        }
                    }
                    Err(e) => {
                        error!("Failed to poll Telegram updates: {}", e);
                        tokio::time::sleep(POLL_BACKOFF).await;
                    }
                }
            }
        }
    }

    /// Forget whatever queued up while the bot was offline.
    async fn skip_pending_updates(&self) -> Option<i64> {
        match self.telegram.get_updates(Some(-1), 0).await {
            Ok(updates) => {
                let offset = updates.last().map(|last| last.id + 1);
                if let Some(offset) = offset {
                    info!(offset, "Dropped pending updates");
                }
                offset
            }
            Err(e) => {
                warn!("Could not drop pending updates: {}", e);
                None
            }
        }
    }

    fn dispatch(&self, update: Update) {
        let Some(message) = update.message else {
            debug!(update_id = update.id, "Skipping non-message update");
            return;
        };
        let Some(text) = message.text else {
            debug!(update_id = update.id, "Skipping message without text");
            return;
        };

        let chat_id = message.chat.id;
        let telegram = self.telegram.clone();
        let orchestrator = Arc::clone(&self.orchestrator);
        tokio::spawn(async move {
            if let Err(e) = respond(&telegram, &orchestrator, chat_id, &text).await {
                error!(chat_id, "Failed to answer message: {}", e);
            }
        });
    }
}

/// Answer one incoming text: static reply for commands, wind report otherwise.
pub async fn respond<T>(
    transport: &T,
    orchestrator: &PipelineOrchestrator,
    chat_id: ChatId,
    text: &str,
) -> Result<()>
where
    T: ChatTransport + ?Sized,
{
    match Command::parse(text) {
        Some(command) => {
            debug!(chat_id, ?command, "Answering command");
            transport.send_message(chat_id, command.reply_text()).await?;
            Ok(())
        }
        None => orchestrator.handle_message(transport, chat_id, text).await,
    }
}
