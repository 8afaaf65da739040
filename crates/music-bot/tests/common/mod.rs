//! Common test utilities for integration tests.

use async_trait::async_trait;
use discord_client::{
    BotEvent, ButtonClick, DiscordError, Gateway, InteractionRef, Reply, SlashInvocation,
    TextMessage,
};
use std::sync::Mutex;

pub const CHANNEL_ID: u64 = 100;
pub const USER_ID: u64 = 200;
pub const MESSAGE_ID: u64 = 300;
pub const INTERACTION_ID: u64 = 400;

/// Something the bot sent through the gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Channel(u64, Reply),
    Interaction(u64, Reply),
    Direct(u64, Reply),
}

/// Gateway that records every outbound call.
#[derive(Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<Sent>>,
    reject_direct: bool,
    reject_all: bool,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway whose direct messages always fail, as for users with closed DMs.
    pub fn rejecting_direct_messages() -> Self {
        Self {
            reject_direct: true,
            ..Self::default()
        }
    }

    /// A gateway on which every send fails.
    pub fn rejecting_everything() -> Self {
        Self {
            reject_direct: true,
            reject_all: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), DiscordError> {
        if self.reject_all {
            return Err(DiscordError::SendFailed("Gateway unavailable".into()));
        }
        Ok(())
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Gateway for RecordingGateway {
    async fn send_message(&self, channel_id: u64, reply: &Reply) -> Result<(), DiscordError> {
        self.check()?;
        self.sent
            .lock()
            .unwrap()
            .push(Sent::Channel(channel_id, reply.clone()));
        Ok(())
    }

    async fn respond(&self, interaction: &InteractionRef, reply: &Reply) -> Result<(), DiscordError> {
        self.check()?;
        self.sent
            .lock()
            .unwrap()
            .push(Sent::Interaction(interaction.id, reply.clone()));
        Ok(())
    }

    async fn send_direct(&self, user_id: u64, reply: &Reply) -> Result<(), DiscordError> {
        if self.reject_direct {
            return Err(DiscordError::SendFailed("Cannot send messages to this user".into()));
        }
        self.sent
            .lock()
            .unwrap()
            .push(Sent::Direct(user_id, reply.clone()));
        Ok(())
    }
}

fn interaction() -> InteractionRef {
    InteractionRef {
        id: INTERACTION_ID,
        token: "interaction-token".into(),
    }
}

pub fn text(content: &str) -> BotEvent {
    BotEvent::Message(TextMessage {
        message_id: MESSAGE_ID,
        channel_id: CHANNEL_ID,
        author_id: USER_ID,
        author_is_bot: false,
        content: content.into(),
    })
}

pub fn click(custom_id: &str) -> BotEvent {
    BotEvent::Button(ButtonClick {
        interaction: interaction(),
        user_id: USER_ID,
        custom_id: custom_id.into(),
    })
}

pub fn slash(name: &str, options: &[(&str, &str)]) -> BotEvent {
    BotEvent::Slash(SlashInvocation {
        interaction: interaction(),
        user_id: USER_ID,
        name: name.into(),
        options: options
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    })
}
