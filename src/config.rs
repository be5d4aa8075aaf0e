//! Application configuration read from the environment.
//!
//! All values have defaults so the loader can run against a local backend
//! without any setup. Call [`init_config`] once at startup, then read the
//! values through [`APP_CONFIG`].

use crate::utils::OwnerIdEncoding;
use anyhow::Context;
use envconfig::Envconfig;
use log::debug;
use std::sync::OnceLock;

/// Environment variables used to configure the pet editor loader.
#[derive(Envconfig, Clone, Debug)]
pub struct AppConfig {
    /// Environment name
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Base URL every relative api path is joined to
    /// Example: "https://clinic.example.com/petclinic"
    #[envconfig(default = "http://localhost:9966/petclinic")]
    pub api_base_url: String,

    /// How the owner id is placed in the owner resource path
    /// Values: "raw" (literal concatenation), "segment" (percent-encoded)
    #[envconfig(default = "raw")]
    pub owner_id_encoding: String,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    /// Parses the configured owner id encoding
    pub fn owner_id_encoding(&self) -> anyhow::Result<OwnerIdEncoding> {
        self.owner_id_encoding.parse()
    }
}

/// Global application configuration, set by [`init_config`].
pub static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Loads the configuration from the environment into [`APP_CONFIG`].
///
/// Calling it again after a successful load is a no-op.
pub fn init_config() -> anyhow::Result<()> {
    if APP_CONFIG.get().is_some() {
        return Ok(());
    }

    let app_config =
        AppConfig::init_from_env().context("failed to load app config from environment")?;
    // owner_id_encoding is validated here so a typo fails at startup
    app_config.owner_id_encoding()?;

    // a concurrent caller may have won the race, both loaded the same env
    if APP_CONFIG.set(app_config).is_err() {
        debug!("app config already initialized");
    }
    Ok(())
}
