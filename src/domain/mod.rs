//! # Domain Layer
//!
//! The content model and its wire decoding. Independent of any transport.
//!
//! ## Structure
//!
//! - **content**: the rich-content node tree, Markdown rendering, documents
//! - **channel**: server channel subtypes
//! - **mentions**: the document-level mention aggregate
//! - **decode**: the discriminated-union decoding contract shared by both catalogs
//! - **value_objects**: node types, text leaves and element payloads

pub mod channel;
pub mod content;
pub mod decode;
pub mod mentions;
pub mod value_objects;

// Re-export commonly used types
pub use channel::{ChannelInfo, ChannelType, ServerChannel};
pub use content::{Document, MessageBody};
pub use decode::{DecodeContext, Discriminator, Polymorphic};
pub use mentions::{Mentions, MentionsPayload};
pub use value_objects::*;
