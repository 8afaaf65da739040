//! Button custom ids.
//!
//! A button id names an action and the catalog index of the track it acts on,
//! e.g. `trk:load:2`. Track names and commands are never embedded, so no
//! catalog content can break decoding, and ids stay far below Discord's
//! 100-character cap.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix shared by every button id this bot creates.
pub const CUSTOM_ID_PREFIX: &str = "trk:";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CustomIdError {
    #[error("Missing trk: prefix")]
    MissingPrefix,

    #[error("Unknown button action: {0}")]
    UnknownAction(String),

    #[error("Invalid track index: {0}")]
    InvalidIndex(String),
}

/// What a track button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackAction {
    /// Selector button: show the command to copy.
    Pick,
    /// Text search button: show the command and DM it.
    Load,
    /// Slash search button: DM the command.
    SendDirect,
}

impl TrackAction {
    pub const ALL: [TrackAction; 3] = [TrackAction::Pick, TrackAction::Load, TrackAction::SendDirect];

    fn as_str(&self) -> &'static str {
        match self {
            TrackAction::Pick => "pick",
            TrackAction::Load => "load",
            TrackAction::SendDirect => "dm",
        }
    }
}

impl FromStr for TrackAction {
    type Err = CustomIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| CustomIdError::UnknownAction(s.to_string()))
    }
}

/// Decoded track button id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackButtonId {
    pub action: TrackAction,
    pub index: usize,
}

impl TrackButtonId {
    pub fn new(action: TrackAction, index: usize) -> Self {
        Self { action, index }
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Whether a custom id was issued by this bot.
    pub fn is_ours(custom_id: &str) -> bool {
        custom_id.starts_with(CUSTOM_ID_PREFIX)
    }
}

impl fmt::Display for TrackButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}:{}", CUSTOM_ID_PREFIX, self.action.as_str(), self.index)
    }
}

impl FromStr for TrackButtonId {
    type Err = CustomIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(CUSTOM_ID_PREFIX)
            .ok_or(CustomIdError::MissingPrefix)?;

        let (action, index) = rest
            .split_once(':')
            .ok_or_else(|| CustomIdError::UnknownAction(rest.to_string()))?;

        let action = action.parse()?;
        let index = index
            .parse()
            .map_err(|_| CustomIdError::InvalidIndex(index.to_string()))?;

        Ok(Self { action, index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discord_client::MAX_CUSTOM_ID_LEN;
    use track_catalog::{Catalog, Track};

    #[test]
    fn test_encode_format() {
        assert_eq!(TrackButtonId::new(TrackAction::Pick, 0).encode(), "trk:pick:0");
        assert_eq!(TrackButtonId::new(TrackAction::Load, 2).encode(), "trk:load:2");
        assert_eq!(TrackButtonId::new(TrackAction::SendDirect, 11).encode(), "trk:dm:11");
    }

    #[test]
    fn test_decode_recovers_every_builtin_track() {
        let catalog = Catalog::builtin();

        for (index, track) in catalog.iter() {
            for action in TrackAction::ALL {
                let id: TrackButtonId = TrackButtonId::new(action, index).encode().parse().unwrap();
                assert_eq!(id.action, action);
                assert_eq!(catalog.get(id.index), Some(track));
            }
        }
    }

    #[test]
    fn test_delimiters_in_track_data_do_not_matter() {
        let catalog = Catalog::new(vec![
            Track::new("music_trk:pick:9", "/play a:b:c"),
            Track::new("load_", "sendcmd_/play x"),
        ])
        .unwrap();

        for (index, track) in catalog.iter() {
            let id: TrackButtonId = TrackButtonId::new(TrackAction::Load, index).encode().parse().unwrap();
            assert_eq!(catalog.get(id.index).unwrap().command, track.command);
        }
    }

    #[test]
    fn test_encoded_length_within_discord_cap() {
        let id = TrackButtonId::new(TrackAction::SendDirect, usize::MAX).encode();
        assert!(id.len() <= MAX_CUSTOM_ID_LEN);
    }

    #[test]
    fn test_decode_rejects_foreign_ids() {
        assert_eq!("music_Believer".parse::<TrackButtonId>(), Err(CustomIdError::MissingPrefix));
        assert!(!TrackButtonId::is_ours("load_/play faded"));
        assert!(TrackButtonId::is_ours("trk:pick:1"));
    }

    #[test]
    fn test_decode_rejects_malformed_ids() {
        assert_eq!(
            "trk:play:1".parse::<TrackButtonId>(),
            Err(CustomIdError::UnknownAction("play".into()))
        );
        assert_eq!(
            "trk:pick".parse::<TrackButtonId>(),
            Err(CustomIdError::UnknownAction("pick".into()))
        );
        assert_eq!(
            "trk:pick:-1".parse::<TrackButtonId>(),
            Err(CustomIdError::InvalidIndex("-1".into()))
        );
        assert_eq!(
            "trk:dm:".parse::<TrackButtonId>(),
            Err(CustomIdError::InvalidIndex("".into()))
        );
    }
}
