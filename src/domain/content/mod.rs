//! # Rich Content
//!
//! The node tree that makes up message bodies and documents, plus its
//! Markdown rendering and wire decoding.
//!
//! ## Structure
//!
//! - **container**: the `Render`, `ChatElement`, `Node` and `ContainerNode` traits
//! - **node**: `BlockNode` / `InlineNode` sum types
//! - **text**, **quote**, **code**, **list**: structural blocks
//! - **media**, **link**, **mention**, **placeholder**: leaf-ish blocks and inlines
//! - **document**: `Document` and `MessageBody` roots
//! - **decode**: position-aware polymorphic decoding of the wire format
//!
//! Containers are built fluently:
//!
//! ```
//! use chat_content::domain::content::{ContainerNode, Document, Heading, Paragraph, Render};
//!
//! let doc = Document::new()
//!     .append(Heading::large().append("Notes"))
//!     .append(Paragraph::from("hello"));
//! assert_eq!(doc.render(), "# Notes\nhello\n");
//! ```

mod code;
mod container;
mod decode;
mod document;
mod link;
mod list;
mod media;
mod mention;
mod node;
mod placeholder;
mod quote;
mod text;

pub use code::{CodeContainer, CodeLine, UNFORMATTED};
pub use container::{ChatElement, ContainerNode, Node, Render};
pub use document::{Document, MessageBody};
pub use link::{resolve_link_type, ContentEmbed, Hyperlink};
pub use list::{ChatList, ListEntry, ListItem};
pub use media::{Image, Video};
pub use mention::{ChannelMention, MemberMention, Reaction};
pub use node::{BlockNode, InlineNode};
pub use placeholder::{ChatEmbed, Form, ReplyHeader};
pub use quote::{BlockQuote, QuoteLine};
pub use text::{Divider, Heading, MarkdownPlainText, Paragraph};
