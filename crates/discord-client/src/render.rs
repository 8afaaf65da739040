//! Conversion of bot-level payloads into serenity builders.

use crate::types::{ActionRow, Button, ButtonStyle, Embed, Reply, SlashCommand};
use serenity::builder::{
    CreateActionRow, CreateButton, CreateCommand, CreateCommandOption, CreateEmbed,
    CreateEmbedFooter, CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
};
use serenity::model::application::{ButtonStyle as SerenityButtonStyle, CommandOptionType};

/// Discord's maximum message content length in characters.
pub const MAX_CONTENT_LEN: usize = 2000;

/// Truncate a string to [`MAX_CONTENT_LEN`] characters.
pub fn truncate(s: &str) -> &str {
    match s.char_indices().nth(MAX_CONTENT_LEN) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

pub fn build_embed(embed: &Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new();
    if let Some(ref title) = embed.title {
        builder = builder.title(title);
    }
    if let Some(ref desc) = embed.description {
        builder = builder.description(desc);
    }
    if let Some(color) = embed.color {
        builder = builder.color(color);
    }
    for field in &embed.fields {
        builder = builder.field(&field.name, &field.value, field.inline);
    }
    if let Some(ref footer) = embed.footer {
        builder = builder.footer(CreateEmbedFooter::new(footer));
    }
    builder
}

fn build_button(button: &Button) -> CreateButton {
    let style = match button.style {
        ButtonStyle::Primary => SerenityButtonStyle::Primary,
        ButtonStyle::Secondary => SerenityButtonStyle::Secondary,
        ButtonStyle::Success => SerenityButtonStyle::Success,
        ButtonStyle::Danger => SerenityButtonStyle::Danger,
    };

    let mut builder = CreateButton::new(&button.custom_id)
        .label(&button.label)
        .style(style);
    if let Some(emoji) = button.emoji {
        builder = builder.emoji(emoji);
    }
    builder
}

pub fn build_action_rows(rows: &[ActionRow]) -> Vec<CreateActionRow> {
    rows.iter()
        .filter(|row| !row.buttons.is_empty())
        .map(|row| CreateActionRow::Buttons(row.buttons.iter().map(build_button).collect()))
        .collect()
}

/// Message builder shared by channel and direct messages.
///
/// `reply_to` and `ephemeral` are not applied here.
pub fn build_message(reply: &Reply) -> CreateMessage {
    let mut builder = CreateMessage::new();
    if let Some(ref content) = reply.content {
        builder = builder.content(truncate(content));
    }
    if !reply.embeds.is_empty() {
        builder = builder.embeds(reply.embeds.iter().map(build_embed).collect());
    }
    if !reply.components.is_empty() {
        builder = builder.components(build_action_rows(&reply.components));
    }
    builder
}

/// Interaction response builder.
pub fn build_interaction_response(reply: &Reply) -> CreateInteractionResponse {
    let mut msg = CreateInteractionResponseMessage::new();
    if let Some(ref content) = reply.content {
        msg = msg.content(truncate(content));
    }
    if reply.ephemeral {
        msg = msg.ephemeral(true);
    }
    if !reply.embeds.is_empty() {
        msg = msg.embeds(reply.embeds.iter().map(build_embed).collect());
    }
    if !reply.components.is_empty() {
        msg = msg.components(build_action_rows(&reply.components));
    }
    CreateInteractionResponse::Message(msg)
}

pub fn build_command(command: &SlashCommand) -> CreateCommand {
    command.options.iter().fold(
        CreateCommand::new(&command.name).description(&command.description),
        |builder, option| {
            builder.add_option(
                CreateCommandOption::new(CommandOptionType::String, &option.name, &option.description)
                    .required(option.required),
            )
        },
    )
}
