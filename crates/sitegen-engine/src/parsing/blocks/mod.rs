//! # Block Parsing
//!
//! Three steps turn a document into block subtrees.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): lines are grouped into trimmed block strings,
//!    split on blank lines, with fenced code kept whole
//!
//! 2. **Classification** (`classify`): each block string gets a `BlockKind` from
//!    prefix rules checked in a fixed precedence order
//!
//! 3. **Conversion** (`convert`): each block becomes an HTML subtree, with inline
//!    content routed through the inline parser
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`segment`**: `BlockSegmenter` state machine and `markdown_to_blocks`
//! - **`classify`**: `block_to_block_type`
//! - **`convert`**: `block_to_html_node` and the per-kind builders
//!
//! ## Key Invariants
//!
//! - No block is empty after trimming
//! - Fenced code blocks keep their blank lines
//! - Malformed quotes and lists classify as paragraphs instead of failing

pub mod classify;
pub mod convert;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::block_to_block_type;
pub use convert::block_to_html_node;
pub use segment::{BlockSegmenter, markdown_to_blocks};
pub use types::BlockKind;
