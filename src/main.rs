use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};

use kitebot::bot::Bot;
use kitebot::telegram::TelegramClient;
use kitebot::{
    KiteBotConfig, NominatimClient, OpenMeteoClient, PipelineOrchestrator, StageTimeouts, VERSION,
    logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = KiteBotConfig::load()?;
    logging::init(&config.logging)?;

    info!("Kite Bot Brasil v{} starting", VERSION);
    info!("Geocoding: {}", config.geocoding.base_url);
    info!("Weather: {}", config.weather.base_url);

    let token = match config.telegram_token() {
        Ok(token) => token.to_string(),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    };

    let geocoder = Arc::new(NominatimClient::new(&config.geocoding)?);
    let weather = Arc::new(OpenMeteoClient::new(&config.weather)?);
    let orchestrator =
        PipelineOrchestrator::new(geocoder, weather, StageTimeouts::from_config(&config));

    let telegram = TelegramClient::new(&config.telegram, token)?;
    let me = telegram
        .get_me()
        .await
        .context("Failed to verify the Telegram bot token")?;
    info!(
        bot_id = me.id,
        username = me.username.as_deref().unwrap_or("unknown"),
        "Connected to Telegram"
    );

    Bot::new(
        telegram,
        orchestrator,
        config.telegram.poll_timeout_seconds.into(),
    )
    .run()
    .await?;
    Ok(())
}
