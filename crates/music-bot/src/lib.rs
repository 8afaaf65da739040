//! Music selector bot for Discord.
//!
//! Users pick a track from a fixed catalog through a button selector, a text
//! search or a slash command, and get the track's playback command back.

pub mod commands;
pub mod config;
pub mod custom_id;
pub mod dispatcher;
pub mod error;
pub mod events;
