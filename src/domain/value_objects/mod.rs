//! # Domain Value Objects
//!
//! Immutable value types that represent content concepts without identity.
//!
//! ## Value Objects
//!
//! - **NodeType / ElementKind**: wire discriminators and block/inline layout
//! - **Leaf / Mark / Text**: terminal text spans with inline formatting
//! - **ElementData**: the optional-field payload bag of a node

mod element_data;
mod leaf;
mod node_type;

pub use element_data::*;
pub use leaf::*;
pub use node_type::*;
