//! Thin Discord layer over serenity.
//!
//! Inbound gateway events become [`BotEvent`]s and outbound [`Reply`] values
//! are rendered into serenity builders, so bot logic never touches serenity
//! types directly.

mod client;
mod error;
mod events;
pub mod render;
mod types;

pub use client::{DiscordClient, Gateway};
pub use error::DiscordError;
pub use types::*;
