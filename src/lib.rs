//! # Chat Content Library
//!
//! This crate models formatted chat message content:
//! - A typed tree of block and inline nodes with fluent construction
//! - Markdown rendering of any node or document
//! - Lenient decoding of the wire format, where unknown node or channel
//!   types degrade to a fallback instead of failing
//! - The mention aggregate attached to messages
//!
//! ## Module Structure
//!
//! ```text
//! chat_content/
//! +-- config/     Configuration management
//! +-- domain/     Content tree, channels, mentions, decoding
//! +-- shared/     Common utilities (errors)
//! +-- telemetry   Logging setup
//! ```

// Configuration module
pub mod config;

// Domain layer - content model and decoding
pub mod domain;

// Shared utilities
pub mod shared;

// Telemetry and observability
pub mod telemetry;
