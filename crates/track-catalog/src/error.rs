//! Catalog errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Track {index} has a blank {field}")]
    BlankField { index: usize, field: &'static str },

    #[error("Track {index} command is longer than {max} characters")]
    CommandTooLong { index: usize, max: usize },

    #[error("Command for {name:?} is not a string")]
    CommandNotString { name: String },
}
