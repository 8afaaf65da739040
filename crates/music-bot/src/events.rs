//! Serenity event handler.

use crate::dispatcher::Dispatcher;
use async_trait::async_trait;
use discord_client::{BotEvent, DiscordClient};
use serenity::model::application::Interaction;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::{Context, EventHandler};
use std::sync::Arc;
use tracing::{error, info};

pub struct Handler {
    dispatcher: Arc<Dispatcher>,
    guild_id: Option<u64>,
    register_commands: bool,
}

impl Handler {
    pub fn new(dispatcher: Arc<Dispatcher>, guild_id: Option<u64>, register_commands: bool) -> Self {
        Self {
            dispatcher,
            guild_id,
            register_commands,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Logged in as {}", ready.user.name);

        if !self.register_commands {
            return;
        }

        let client = DiscordClient::new(ctx.http.clone());
        if let Err(e) = client
            .register_commands(self.guild_id, &self.dispatcher.slash_commands())
            .await
        {
            error!("Failed to register slash commands: {}", e);
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let event = BotEvent::from_message(&msg);
        let gateway = DiscordClient::new(ctx.http.clone());
        self.dispatcher.dispatch(&event, &gateway).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(event) = BotEvent::from_interaction(&interaction) else {
            return;
        };
        let gateway = DiscordClient::new(ctx.http.clone());
        self.dispatcher.dispatch(&event, &gateway).await;
    }
}
