//! Text search command - `!search <name>`.

use crate::commands::{strip_trigger, CommandHandler, BLURPLE, SEARCH_PROMPT};
use crate::custom_id::{TrackAction, TrackButtonId};
use crate::error::AppResult;
use async_trait::async_trait;
use discord_client::{ActionRow, BotEvent, Button, Embed, Gateway, Reply};
use std::sync::Arc;
use track_catalog::Catalog;
use tracing::info;

const NO_RESULTS: &str = "🔍 **No results found.**";

pub struct SearchHandler {
    catalog: Arc<Catalog>,
    trigger: String,
    max_results: usize,
}

impl SearchHandler {
    pub fn new(catalog: Arc<Catalog>, trigger: impl Into<String>, max_results: usize) -> Self {
        Self {
            catalog,
            trigger: trigger.into(),
            max_results: max_results.max(1),
        }
    }

    /// Messages answering `query`: one per matching track, or a single
    /// prompt/not-found reply to the triggering message.
    pub fn replies(&self, query: &str, message_id: u64) -> Vec<Reply> {
        if query.trim().is_empty() {
            return vec![Reply::text(SEARCH_PROMPT).reply_to(message_id)];
        }

        let hits = self.catalog.search(query);
        if hits.is_empty() {
            return vec![Reply::text(NO_RESULTS).reply_to(message_id)];
        }

        hits.into_iter()
            .take(self.max_results)
            .map(|(index, track)| {
                let embed = Embed::new()
                    .color(BLURPLE)
                    .title(format!("🎵 Found: **{}**", track.name))
                    .description("Click the button below to load the command.")
                    .footer("Music Search Bot");

                let button = Button::new(
                    TrackButtonId::new(TrackAction::Load, index).encode(),
                    "Load Command",
                );

                Reply::new()
                    .embed(embed)
                    .components(ActionRow::chunked(vec![button]))
            })
            .collect()
    }
}

#[async_trait]
impl CommandHandler for SearchHandler {
    fn name(&self) -> &str {
        "search"
    }

    fn matches(&self, event: &BotEvent) -> bool {
        matches!(event, BotEvent::Message(msg) if strip_trigger(&msg.content, &self.trigger).is_some())
    }

    async fn execute(&self, event: &BotEvent, gateway: &dyn Gateway) -> AppResult<()> {
        let BotEvent::Message(msg) = event else {
            return Ok(());
        };
        let query = strip_trigger(&msg.content, &self.trigger).unwrap_or_default();

        let replies = self.replies(query, msg.message_id);
        for reply in &replies {
            gateway.send_message(msg.channel_id, reply).await?;
        }

        info!("Search {:?} answered with {} messages", query, replies.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> SearchHandler {
        SearchHandler::new(Arc::new(Catalog::builtin()), "!search", 10)
    }

    #[test]
    fn test_single_match() {
        let catalog = Catalog::builtin();
        let replies = handler().replies("faded", 1);

        assert_eq!(replies.len(), 1);
        let reply = &replies[0];
        assert!(reply.embeds[0].title.as_deref().unwrap().contains("Faded"));
        assert_eq!(reply.embeds[0].footer.as_deref(), Some("Music Search Bot"));

        let buttons: Vec<_> = reply.buttons().collect();
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].label, "Load Command");

        let id: TrackButtonId = buttons[0].custom_id.parse().unwrap();
        assert_eq!(id.action, TrackAction::Load);
        assert_eq!(catalog.get(id.index).unwrap().command, "/play Faded");
    }

    #[test]
    fn test_multiple_matches_fan_out() {
        let replies = handler().replies("e", 1);
        assert_eq!(replies.len(), 3);
        assert!(replies.iter().all(|r| r.reply_to.is_none()));
    }

    #[test]
    fn test_results_capped() {
        let handler = SearchHandler::new(Arc::new(Catalog::builtin()), "!search", 2);
        assert_eq!(handler.replies("e", 1).len(), 2);
    }

    #[test]
    fn test_zero_cap_still_answers_matches() {
        let handler = SearchHandler::new(Arc::new(Catalog::builtin()), "!search", 0);
        let replies = handler.replies("faded", 1);

        assert_eq!(replies.len(), 1);
        assert!(replies[0].embeds[0].title.as_deref().unwrap().contains("Faded"));
    }

    #[test]
    fn test_no_match() {
        let replies = handler().replies("xyz", 42);

        assert_eq!(replies, vec![Reply::text(NO_RESULTS).reply_to(42)]);
        assert_eq!(replies[0].buttons().count(), 0);
    }

    #[test]
    fn test_blank_query_prompts() {
        let replies = handler().replies("  ", 42);
        assert_eq!(replies, vec![Reply::text(SEARCH_PROMPT).reply_to(42)]);
    }
}
