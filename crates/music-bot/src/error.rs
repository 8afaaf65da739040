//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] track_catalog::CatalogError),

    #[error("Discord error: {0}")]
    Discord(#[from] discord_client::DiscordError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] serenity::Error),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
