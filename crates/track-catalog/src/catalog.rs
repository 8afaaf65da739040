//! Read-only track catalog.

use crate::error::CatalogError;
use crate::types::{CatalogFile, Track};
use std::path::Path;
use tracing::{debug, info};

/// Longest accepted playback command, in characters. Leaves room for the
/// reply text wrapped around a command inside one Discord message.
pub const MAX_COMMAND_LEN: usize = 1900;

/// Ordered, immutable list of tracks.
///
/// Built once at startup and shared behind an `Arc`. Entries are addressed by
/// their index, which is what button identifiers carry.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Create a catalog, rejecting tracks with a blank name or command and
    /// commands over [`MAX_COMMAND_LEN`].
    pub fn new(tracks: Vec<Track>) -> Result<Self, CatalogError> {
        for (index, track) in tracks.iter().enumerate() {
            if track.name.trim().is_empty() {
                return Err(CatalogError::BlankField {
                    index,
                    field: "name",
                });
            }
            if track.command.trim().is_empty() {
                return Err(CatalogError::BlankField {
                    index,
                    field: "command",
                });
            }
            if track.command.chars().count() > MAX_COMMAND_LEN {
                return Err(CatalogError::CommandTooLong {
                    index,
                    max: MAX_COMMAND_LEN,
                });
            }
        }

        Ok(Self { tracks })
    }

    /// The catalog shipped with the bot.
    pub fn builtin() -> Self {
        Self {
            tracks: vec![
                Track::new("Shape of You", "/play shape of you"),
                Track::new("Believer", "/play believer"),
                Track::new("Faded", "/play Faded"),
                Track::new("Unholy", "/play Unholy"),
                Track::new("Blinding Lights", "/play Blinding Lights"),
                Track::new("Animals", "/play animals"),
            ],
        }
    }

    /// Parse a catalog from JSON (list or name → command map).
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.into_tracks()?)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&json)?;
        info!("Loaded {} tracks from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Iterate entries together with their index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Track)> {
        self.tracks.iter().enumerate()
    }

    /// All tracks whose name contains `query`, case-insensitively, in catalog
    /// order. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<(usize, &Track)> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let hits: Vec<_> = self
            .iter()
            .filter(|(_, track)| track.name.to_lowercase().contains(&needle))
            .collect();

        debug!("Search {:?} matched {} tracks", needle, hits.len());
        hits
    }
}
