//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Logging configuration
    pub log: LogSettings,

    /// Wire decoding configuration
    pub decode: DecodeSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// Default `EnvFilter` directive, used when `RUST_LOG` is unset
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

/// Decoder configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DecodeSettings {
    /// Maximum element nesting accepted before decoding fails
    pub max_depth: usize,

    /// Log unknown discriminators at WARN instead of DEBUG
    pub warn_on_fallback: bool,
}

/// Default nesting limit for decoded trees.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Smallest nesting limit that still admits a document with one block.
pub const MIN_MAX_DEPTH: usize = 2;

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info,chat_content=debug".into(),
            json: false,
        }
    }
}

impl Default for DecodeSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            warn_on_fallback: false,
        }
    }
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the decode depth limit is too small to be useful.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let log = LogSettings::default();
        let decode = DecodeSettings::default();

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("log.filter", log.filter)?
            .set_default("log.json", log.json)?
            .set_default("decode.max_depth", decode.max_depth as i64)?
            .set_default("decode.warn_on_fallback", decode.warn_on_fallback)?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__DECODE__MAX_DEPTH=32 -> decode.max_depth = 32
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("log.filter", std::env::var("LOG_FILTER").ok())?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| settings.validate())
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.decode.max_depth < MIN_MAX_DEPTH {
            return Err(ConfigError::Message(format!(
                "decode.max_depth must be at least {}. Current value: {}",
                MIN_MAX_DEPTH, self.decode.max_depth
            )));
        }
        Ok(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: LogSettings::default(),
            decode: DecodeSettings::default(),
            environment: "development".into(),
        }
    }
}
