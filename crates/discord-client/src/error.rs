//! Discord client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscordError {
    #[error("Discord HTTP error: {0}")]
    Http(#[from] serenity::Error),

    #[error("Send failed: {0}")]
    SendFailed(String),
}
