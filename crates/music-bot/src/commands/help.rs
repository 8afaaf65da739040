//! Help command - displays available commands.

use crate::commands::{CommandHandler, BLURPLE};
use crate::config::BotConfig;
use crate::error::AppResult;
use async_trait::async_trait;
use discord_client::{BotEvent, Embed, Gateway, Reply, SlashCommand};

pub struct HelpHandler {
    embed: Embed,
}

impl HelpHandler {
    pub fn new(bot: &BotConfig) -> Self {
        let embed = Embed::new()
            .color(BLURPLE)
            .title("🎵 Bot Command List")
            .description("Here are the available commands:")
            .field("/search {name}", "Search music", false)
            .field("/help", "Show this menu", false)
            .field(bot.selector_trigger.as_str(), "Open the music selector", false)
            .field(format!("{} {{name}}", bot.search_trigger), "Search music in this channel", false)
            .field(bot.list_trigger.as_str(), "List every track", false);

        Self { embed }
    }

    pub fn reply(&self) -> Reply {
        Reply::new().embed(self.embed.clone()).ephemeral()
    }
}

#[async_trait]
impl CommandHandler for HelpHandler {
    fn name(&self) -> &str {
        "help"
    }

    fn matches(&self, event: &BotEvent) -> bool {
        matches!(event, BotEvent::Slash(cmd) if cmd.name == "help")
    }

    fn slash_command(&self) -> Option<SlashCommand> {
        Some(SlashCommand::new("help", "Show the available commands"))
    }

    async fn execute(&self, event: &BotEvent, gateway: &dyn Gateway) -> AppResult<()> {
        let BotEvent::Slash(cmd) = event else {
            return Ok(());
        };

        gateway.respond(&cmd.interaction, &self.reply()).await?;
        Ok(())
    }
}
