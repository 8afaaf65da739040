//! `/search name:<query>` slash command.

use crate::commands::{CommandHandler, SEARCH_PROMPT};
use crate::custom_id::{TrackAction, TrackButtonId};
use crate::error::AppResult;
use async_trait::async_trait;
use discord_client::{
    ActionRow, BotEvent, Button, Embed, Gateway, Reply, SlashCommand, MAX_EMBEDS_PER_MESSAGE,
};
use std::sync::Arc;
use track_catalog::Catalog;
use tracing::info;

const NO_TRACK: &str = "No track found.";
const AMBER: u32 = 0xFFB347;

pub struct SlashSearchHandler {
    catalog: Arc<Catalog>,
    max_results: usize,
}

impl SlashSearchHandler {
    pub fn new(catalog: Arc<Catalog>, max_results: usize) -> Self {
        Self {
            catalog,
            max_results: max_results.clamp(1, MAX_EMBEDS_PER_MESSAGE),
        }
    }

    /// Ephemeral response for `query`: one embed and one "send to me" button
    /// per matching track.
    pub fn reply(&self, query: &str) -> Reply {
        if query.trim().is_empty() {
            return Reply::ephemeral_text(SEARCH_PROMPT);
        }

        let hits: Vec<_> = self
            .catalog
            .search(query)
            .into_iter()
            .take(self.max_results)
            .collect();
        if hits.is_empty() {
            return Reply::ephemeral_text(NO_TRACK);
        }

        let single = hits.len() == 1;
        let mut reply = Reply::new().ephemeral();
        let mut buttons = Vec::with_capacity(hits.len());
        for (index, track) in hits {
            reply = reply.embed(
                Embed::new()
                    .color(AMBER)
                    .title("🎶 Music Found")
                    .field("Track", format!("**{}**", track.name), false),
            );

            let label = if single { "Send to me" } else { track.name.as_str() };
            buttons.push(
                Button::new(TrackButtonId::new(TrackAction::SendDirect, index).encode(), label)
                    .emoji('📩'),
            );
        }

        reply.components(ActionRow::chunked(buttons))
    }
}

#[async_trait]
impl CommandHandler for SlashSearchHandler {
    fn name(&self) -> &str {
        "slash-search"
    }

    fn matches(&self, event: &BotEvent) -> bool {
        matches!(event, BotEvent::Slash(cmd) if cmd.name == "search")
    }

    fn slash_command(&self) -> Option<SlashCommand> {
        Some(
            SlashCommand::new("search", "Search music").string_option(
                "name",
                "Track name or part of it",
                true,
            ),
        )
    }

    async fn execute(&self, event: &BotEvent, gateway: &dyn Gateway) -> AppResult<()> {
        let BotEvent::Slash(cmd) = event else {
            return Ok(());
        };
        let query = cmd.option("name").unwrap_or_default();

        let reply = self.reply(query);
        gateway.respond(&cmd.interaction, &reply).await?;

        info!("Slash search {:?} returned {} tracks", query, reply.embeds.len());
        Ok(())
    }
}
