//! Discord HTTP client.

use crate::error::DiscordError;
use crate::render::{build_command, build_interaction_response, build_message};
use crate::types::*;
use async_trait::async_trait;
use serenity::http::Http;
use serenity::model::id::{ChannelId, GuildId, InteractionId, MessageId, UserId};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Outbound side of the gateway.
///
/// Bot logic only talks to Discord through this trait, so handlers can be
/// exercised against a fake.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Post a message in a channel.
    async fn send_message(&self, channel_id: u64, reply: &Reply) -> Result<(), DiscordError>;

    /// Answer an interaction (slash command or button click).
    async fn respond(&self, interaction: &InteractionRef, reply: &Reply)
        -> Result<(), DiscordError>;

    /// Send a direct message to a user.
    async fn send_direct(&self, user_id: u64, reply: &Reply) -> Result<(), DiscordError>;
}

/// Serenity-backed [`Gateway`].
#[derive(Clone)]
pub struct DiscordClient {
    http: Arc<Http>,
}

impl DiscordClient {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Overwrite the bot's slash commands, either for one guild (visible
    /// immediately) or globally.
    #[instrument(skip(self, commands))]
    pub async fn register_commands(
        &self,
        guild_id: Option<u64>,
        commands: &[SlashCommand],
    ) -> Result<usize, DiscordError> {
        let builders: Vec<_> = commands.iter().map(build_command).collect();

        let registered = match guild_id {
            Some(id) => {
                self.http
                    .create_guild_commands(GuildId::new(id), &builders)
                    .await?
            }
            None => self.http.create_global_commands(&builders).await?,
        };

        info!("Registered {} slash commands", registered.len());
        Ok(registered.len())
    }
}

/// Discord rejects messages with neither content nor embeds.
pub(crate) fn ensure_sendable(reply: &Reply) -> Result<(), DiscordError> {
    let has_content = reply.content.as_deref().is_some_and(|c| !c.is_empty());
    if !has_content && reply.embeds.is_empty() {
        return Err(DiscordError::SendFailed(
            "reply has no content or embeds".into(),
        ));
    }
    Ok(())
}

#[async_trait]
impl Gateway for DiscordClient {
    #[instrument(skip(self, reply))]
    async fn send_message(&self, channel_id: u64, reply: &Reply) -> Result<(), DiscordError> {
        ensure_sendable(reply)?;
        let channel = ChannelId::new(channel_id);
        let mut builder = build_message(reply);
        if let Some(message_id) = reply.reply_to {
            builder = builder.reference_message((channel, MessageId::new(message_id)));
        }

        channel.send_message(self.http.as_ref(), builder).await?;
        debug!("Sent message to channel {}", channel_id);
        Ok(())
    }

    #[instrument(skip(self, interaction, reply), fields(interaction_id = interaction.id))]
    async fn respond(
        &self,
        interaction: &InteractionRef,
        reply: &Reply,
    ) -> Result<(), DiscordError> {
        ensure_sendable(reply)?;
        let response = build_interaction_response(reply);

        self.http
            .create_interaction_response(
                InteractionId::new(interaction.id),
                &interaction.token,
                &response,
                Vec::new(),
            )
            .await?;

        debug!("Responded to interaction {}", interaction.id);
        Ok(())
    }

    #[instrument(skip(self, reply))]
    async fn send_direct(&self, user_id: u64, reply: &Reply) -> Result<(), DiscordError> {
        ensure_sendable(reply)?;
        UserId::new(user_id)
            .direct_message(self.http.as_ref(), build_message(reply))
            .await?;

        debug!("Sent direct message to {}", user_id);
        Ok(())
    }
}
