//! # HTML Tree
//!
//! A minimal HTML tree built bottom-up during conversion and serialized once.
//!
//! ## Modules
//!
//! - **`attributes`**: `Attributes`, an insertion-ordered string map rendered as ` key='value'`
//! - **`node`**: `HtmlNode` (Leaf | Parent), `LeafNode`, `ParentNode` and `ParentBuilder`
//!
//! ## Rendering Rules
//!
//! - A leaf without a tag renders its value verbatim
//! - A leaf with a tag renders `<tag attrs>value</tag>`
//! - A parent renders `<tag attrs>` + children + `</tag>`
//! - Attribute values are single-quoted; no entity escaping, no whitespace between elements

pub mod attributes;
pub mod node;

pub use attributes::Attributes;
pub use node::{HtmlNode, LeafNode, ParentBuilder, ParentNode};

/// Reasons a node could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("leaf node must have a non-empty value")]
    InvalidLeafConstruction,
    #[error("invalid parent node: {reason}")]
    InvalidParentConstruction { reason: &'static str },
}
