//! Bot command handlers.

mod buttons;
mod help;
mod list;
mod search;
mod selector;
mod slash_search;

pub use buttons::TrackButtonHandler;
pub use help::HelpHandler;
pub use list::ListHandler;
pub use search::SearchHandler;
pub use selector::SelectorHandler;
pub use slash_search::SlashSearchHandler;

use crate::error::AppResult;
use async_trait::async_trait;
use discord_client::{BotEvent, Gateway, SlashCommand};

/// Discord blurple.
pub(crate) const BLURPLE: u32 = 0x5865F2;

pub(crate) const SEARCH_PROMPT: &str = "❗ **Please type a music name.**";
pub(crate) const EMPTY_CATALOG: &str = "The catalog is empty.";

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name (e.g., "search", "selector").
    fn name(&self) -> &str;

    /// Check if this handler matches the event.
    fn matches(&self, event: &BotEvent) -> bool;

    /// Slash command this handler answers, if any.
    fn slash_command(&self) -> Option<SlashCommand> {
        None
    }

    /// Execute the command, replying through `gateway`.
    async fn execute(&self, event: &BotEvent, gateway: &dyn Gateway) -> AppResult<()>;
}

/// Match `text` against a prefix command.
///
/// The trigger is compared ASCII case-insensitively after trimming, and must be
/// followed by whitespace or the end of the message. Returns the trimmed
/// argument text.
pub(crate) fn strip_trigger<'a>(text: &'a str, trigger: &str) -> Option<&'a str> {
    let text = text.trim();
    let head = text.get(..trigger.len())?;
    if !head.eq_ignore_ascii_case(trigger) {
        return None;
    }

    let rest = &text[trigger.len()..];
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Whether `text` is exactly the trigger, ignoring ASCII case and surrounding
/// whitespace.
pub(crate) fn is_exact_trigger(text: &str, trigger: &str) -> bool {
    text.trim().eq_ignore_ascii_case(trigger)
}
