//! # Configuration Module
//!
//! This module handles configuration loading for the decoder and the CLI.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_content::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Decoding with max depth {}", settings.decode.max_depth);
//! ```

mod settings;

pub use settings::*;
