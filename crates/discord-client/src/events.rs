//! Conversion of serenity gateway events into [`BotEvent`]s.

use crate::types::{BotEvent, ButtonClick, InteractionRef, SlashInvocation, TextMessage};
use serenity::all::{CommandDataOptionValue, ComponentInteractionDataKind, Interaction, Message};

impl BotEvent {
    /// Extract a bot event from a channel message.
    pub fn from_message(msg: &Message) -> Self {
        BotEvent::Message(TextMessage {
            message_id: msg.id.get(),
            channel_id: msg.channel_id.get(),
            author_id: msg.author.id.get(),
            author_is_bot: msg.author.bot,
            content: msg.content.clone(),
        })
    }

    /// Extract a bot event from an interaction.
    ///
    /// Only button clicks and slash commands are of interest; everything else
    /// yields `None`.
    pub fn from_interaction(interaction: &Interaction) -> Option<Self> {
        match interaction {
            Interaction::Component(component) => {
                if !matches!(component.data.kind, ComponentInteractionDataKind::Button) {
                    return None;
                }

                Some(BotEvent::Button(ButtonClick {
                    interaction: InteractionRef {
                        id: component.id.get(),
                        token: component.token.clone(),
                    },
                    user_id: component.user.id.get(),
                    custom_id: component.data.custom_id.clone(),
                }))
            }
            Interaction::Command(command) => {
                let options = command
                    .data
                    .options
                    .iter()
                    .filter_map(|opt| match &opt.value {
                        CommandDataOptionValue::String(value) => {
                            Some((opt.name.clone(), value.clone()))
                        }
                        _ => None,
                    })
                    .collect();

                Some(BotEvent::Slash(SlashInvocation {
                    interaction: InteractionRef {
                        id: command.id.get(),
                        token: command.token.clone(),
                    },
                    user_id: command.user.id.get(),
                    name: command.data.name.clone(),
                    options,
                }))
            }
            _ => None,
        }
    }
}
