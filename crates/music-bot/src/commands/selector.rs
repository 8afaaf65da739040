//! Selector command - shows one button per catalog track.

use crate::commands::{is_exact_trigger, CommandHandler, BLURPLE, EMPTY_CATALOG};
use crate::custom_id::{TrackAction, TrackButtonId};
use crate::error::AppResult;
use async_trait::async_trait;
use discord_client::{
    ActionRow, BotEvent, Button, Embed, Gateway, Reply, MAX_BUTTONS_PER_ROW, MAX_ROWS_PER_MESSAGE,
};
use std::sync::Arc;
use track_catalog::Catalog;
use tracing::info;

pub struct SelectorHandler {
    catalog: Arc<Catalog>,
    trigger: String,
}

impl SelectorHandler {
    pub fn new(catalog: Arc<Catalog>, trigger: impl Into<String>) -> Self {
        Self {
            catalog,
            trigger: trigger.into(),
        }
    }

    /// Selector messages, each holding at most five rows of five buttons.
    pub fn pages(&self) -> Vec<Reply> {
        if self.catalog.is_empty() {
            return vec![Reply::text(EMPTY_CATALOG)];
        }

        let buttons: Vec<Button> = self
            .catalog
            .iter()
            .map(|(index, track)| {
                Button::new(TrackButtonId::new(TrackAction::Pick, index).encode(), &track.name)
            })
            .collect();

        buttons
            .chunks(MAX_BUTTONS_PER_ROW * MAX_ROWS_PER_MESSAGE)
            .map(|page| {
                Reply::new()
                    .embed(selector_embed())
                    .components(ActionRow::chunked(page.to_vec()))
            })
            .collect()
    }
}

fn selector_embed() -> Embed {
    Embed::new()
        .color(BLURPLE)
        .title("🎵 Music Selector")
        .description("Choose a track and I will prepare the command for you.")
        .footer("Made for your server ❤️")
}

#[async_trait]
impl CommandHandler for SelectorHandler {
    fn name(&self) -> &str {
        "selector"
    }

    fn matches(&self, event: &BotEvent) -> bool {
        matches!(event, BotEvent::Message(msg) if is_exact_trigger(&msg.content, &self.trigger))
    }

    async fn execute(&self, event: &BotEvent, gateway: &dyn Gateway) -> AppResult<()> {
        let BotEvent::Message(msg) = event else {
            return Ok(());
        };

        let pages = self.pages();
        for page in &pages {
            gateway.send_message(msg.channel_id, page).await?;
        }

        info!("Sent selector ({} pages) to channel {}", pages.len(), msg.channel_id);
        Ok(())
    }
}
