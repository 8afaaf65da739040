//! Track types and the on-disk catalog format.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A playable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Display name shown on buttons and embeds.
    pub name: String,
    /// Playback command handed back to the user verbatim.
    pub command: String,
}

impl Track {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

/// Catalog file contents.
///
/// Either a list of tracks or a `{"name": "command"}` map as found in older
/// archive files. Both forms keep file order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CatalogFile {
    List(Vec<Track>),
    Map(Map<String, Value>),
}

impl CatalogFile {
    pub(crate) fn into_tracks(self) -> Result<Vec<Track>, CatalogError> {
        match self {
            CatalogFile::List(tracks) => Ok(tracks),
            CatalogFile::Map(map) => map
                .into_iter()
                .map(|(name, value)| match value {
                    Value::String(command) => Ok(Track { name, command }),
                    _ => Err(CatalogError::CommandNotString { name }),
                })
                .collect(),
        }
    }
}
