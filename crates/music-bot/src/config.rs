//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::path::PathBuf;
use track_catalog::{Catalog, CatalogError};

/// Application configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Discord configuration
    pub discord: DiscordConfig,

    /// Bot configuration
    #[serde(default)]
    pub bot: BotConfig,

    /// Catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize)]
pub struct DiscordConfig {
    /// Bot token
    pub token: SecretString,

    /// Register slash commands for this guild only (instant) instead of
    /// globally
    #[serde(default)]
    pub guild_id: Option<u64>,

    /// Overwrite slash command definitions on startup
    #[serde(default = "default_true")]
    pub register_commands: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Message that opens the music selector
    #[serde(default = "default_selector_trigger")]
    pub selector_trigger: String,

    /// Prefix of the text search command
    #[serde(default = "default_search_trigger")]
    pub search_trigger: String,

    /// Prefix of the catalog listing command
    #[serde(default = "default_list_trigger")]
    pub list_trigger: String,

    /// Max search results shown per query
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file; the built-in list is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            selector_trigger: default_selector_trigger(),
            search_trigger: default_search_trigger(),
            list_trigger: default_list_trigger(),
            max_results: default_max_results(),
        }
    }
}

impl CatalogConfig {
    /// Build the catalog this configuration points at.
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        match &self.path {
            Some(path) => Catalog::from_json_file(path),
            None => Ok(Catalog::builtin()),
        }
    }
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".into()
}

fn default_selector_trigger() -> String {
    "m".into()
}

fn default_search_trigger() -> String {
    "!search".into()
}

fn default_list_trigger() -> String {
    "!list".into()
}

fn default_max_results() -> usize {
    10
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_environment(config::Environment::default())
    }

    fn from_environment(env: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(env.separator("__").try_parsing(false))
            .build()
            .context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        anyhow::ensure!(
            config.bot.max_results > 0,
            "BOT__MAX_RESULTS must be at least 1"
        );

        Ok(config)
    }
}
