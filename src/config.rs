//! # Configuration Management
//!
//! Loads server configuration from several layered sources:
//! - Built-in defaults (the `Default` impl below)
//! - An optional `config.toml` in the working directory
//! - Environment variables with the `APP_` prefix
//!
//! ## Configuration Priority (highest to lowest):
//! 1. `HOST` / `PORT` (set by most deployment platforms)
//! 2. `APP_` variables, sections split by a double underscore
//!    (`APP_SERVER__PORT`, `APP_DICTIONARY__PATH`, `APP_GLOSS__MAX_INPUT_CHARS`)
//! 3. `config.toml`
//! 4. Defaults
//!
//! Only the HTTP host reads configuration; the gloss engine itself is
//! configured purely through the values passed to it.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Top-level server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub dictionary: DictionaryConfig,
    pub gloss: GlossConfig,
}

/// Where the HTTP server listens.
///
/// `host = "127.0.0.1"` accepts local connections only; use `"0.0.0.0"` in
/// containers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Sign dictionary settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DictionaryConfig {
    /// Path to the flat JSON word/phrase → gloss file
    pub path: String,

    /// Load the dictionary before binding the server, failing startup on error.
    /// When false the first gloss request performs the load.
    pub warm_up: bool,
}

/// Request limits for the gloss endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlossConfig {
    /// Longest transcript accepted, in characters
    pub max_input_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            dictionary: DictionaryConfig {
                path: "data/isl_gloss.json".to_string(),
                warm_up: true,
            },
            gloss: GlossConfig {
                // A few minutes of dictated speech
                max_input_chars: 10_000,
            },
        }
    }
}

impl AppConfig {
    /// Build the configuration from defaults, `config.toml` and the environment.
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            );

        if let Ok(host) = env::var("HOST") {
            settings = settings.set_override("server.host", host)?;
        }

        if let Ok(port) = env::var("PORT") {
            settings = settings.set_override("server.port", port)?;
        }

        let config = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Reject values the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        if self.dictionary.path.trim().is_empty() {
            return Err(anyhow::anyhow!("Dictionary path cannot be empty"));
        }

        if self.gloss.max_input_chars == 0 {
            return Err(anyhow::anyhow!("Max input chars must be greater than 0"));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.dictionary.path, "data/isl_gloss.json");
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.dictionary.path = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.gloss.max_input_chars = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults_round_trip_through_config_builder() {
        let built: AppConfig = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default()).unwrap())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(built, AppConfig::default());
    }
}
