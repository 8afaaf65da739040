//! Routes inbound events to the first matching command handler.

use crate::commands::*;
use crate::config::BotConfig;
use discord_client::{BotEvent, Gateway, Reply, SlashCommand};
use std::sync::Arc;
use track_catalog::Catalog;
use tracing::{debug, error};

const FAILURE_REPLY: &str = "Sorry, something went wrong.";

pub struct Dispatcher {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl Dispatcher {
    pub fn new(handlers: Vec<Box<dyn CommandHandler>>) -> Self {
        Self { handlers }
    }

    /// The standard handler set over `catalog`.
    pub fn with_defaults(catalog: Arc<Catalog>, bot: &BotConfig) -> Self {
        Self::new(vec![
            Box::new(SelectorHandler::new(catalog.clone(), &bot.selector_trigger)),
            Box::new(SearchHandler::new(
                catalog.clone(),
                &bot.search_trigger,
                bot.max_results,
            )),
            Box::new(ListHandler::new(catalog.clone(), &bot.list_trigger)),
            Box::new(HelpHandler::new(bot)),
            Box::new(SlashSearchHandler::new(catalog.clone(), bot.max_results)),
            Box::new(TrackButtonHandler::new(catalog)),
        ])
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Slash commands to register with Discord.
    pub fn slash_commands(&self) -> Vec<SlashCommand> {
        self.handlers.iter().filter_map(|h| h.slash_command()).collect()
    }

    /// Handle one event. Returns whether a handler picked it up.
    pub async fn dispatch(&self, event: &BotEvent, gateway: &dyn Gateway) -> bool {
        if let BotEvent::Message(msg) = event {
            if msg.author_is_bot {
                return false;
            }
        }

        let Some(handler) = self.handlers.iter().find(|h| h.matches(event)) else {
            debug!("No handler for event from {}", event.user_id());
            return false;
        };

        if let Err(e) = handler.execute(event, gateway).await {
            error!("Handler {} error: {}", handler.name(), e);

            let reply = Reply::ephemeral_text(FAILURE_REPLY);
            let sent = match event {
                BotEvent::Message(msg) => gateway.send_message(msg.channel_id, &reply).await,
                BotEvent::Button(click) => gateway.respond(&click.interaction, &reply).await,
                BotEvent::Slash(cmd) => gateway.respond(&cmd.interaction, &reply).await,
            };
            if let Err(e) = sent {
                debug!("Failed to send error reply for {}: {}", handler.name(), e);
            }
        }

        true
    }
}
