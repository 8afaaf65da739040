//! Music Selector Bot - Main entry point.

use anyhow::Context;
use music_bot::config::Config;
use music_bot::dispatcher::Dispatcher;
use music_bot::error::AppResult;
use music_bot::events::Handler;
use secrecy::ExposeSecret;
use serenity::prelude::GatewayIntents;
use serenity::Client;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level);

    info!("Starting Music Selector Bot...");

    let catalog = Arc::new(config.catalog.load()?);
    info!("Catalog ready with {} tracks", catalog.len());

    let dispatcher = Arc::new(Dispatcher::with_defaults(catalog, &config.bot));
    info!("Registered {} command handlers", dispatcher.handler_count());

    let handler = Handler::new(
        dispatcher,
        config.discord.guild_id,
        config.discord.register_commands,
    );

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(config.discord.token.expose_secret(), intents)
        .event_handler(handler)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            shard_manager.shutdown_all().await;
        }
    });

    info!("Connecting to Discord gateway...");
    client.start().await?;

    info!("Shutting down...");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
