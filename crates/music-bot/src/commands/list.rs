//! List command - prints every catalog entry.

use crate::commands::{strip_trigger, CommandHandler, EMPTY_CATALOG};
use crate::error::AppResult;
use async_trait::async_trait;
use discord_client::render::MAX_CONTENT_LEN;
use discord_client::{BotEvent, Gateway, Reply};
use std::sync::Arc;
use track_catalog::Catalog;

pub struct ListHandler {
    catalog: Arc<Catalog>,
    trigger: String,
}

impl ListHandler {
    pub fn new(catalog: Arc<Catalog>, trigger: impl Into<String>) -> Self {
        Self {
            catalog,
            trigger: trigger.into(),
        }
    }

    /// Catalog listing split into messages that fit Discord's length limit.
    pub fn pages(&self) -> Vec<String> {
        if self.catalog.is_empty() {
            return vec![EMPTY_CATALOG.to_string()];
        }

        let mut pages = Vec::new();
        let mut current = String::new();
        for (_, track) in self.catalog.iter() {
            let line = format!("- **{}**: {}", track.name, track.command);
            let needed = if current.is_empty() { line.chars().count() } else { line.chars().count() + 1 };

            if !current.is_empty() && current.chars().count() + needed > MAX_CONTENT_LEN {
                pages.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(&line);
        }
        pages.push(current);
        pages
    }
}

#[async_trait]
impl CommandHandler for ListHandler {
    fn name(&self) -> &str {
        "list"
    }

    fn matches(&self, event: &BotEvent) -> bool {
        matches!(event, BotEvent::Message(msg) if strip_trigger(&msg.content, &self.trigger).is_some())
    }

    async fn execute(&self, event: &BotEvent, gateway: &dyn Gateway) -> AppResult<()> {
        let BotEvent::Message(msg) = event else {
            return Ok(());
        };

        for page in self.pages() {
            gateway.send_message(msg.channel_id, &Reply::text(page)).await?;
        }
        Ok(())
    }
}
