//! # Inline Parsing
//!
//! Splits the text of a single block into styled spans and maps them to leaf nodes.
//!
//! ## Architecture
//!
//! Tokenizing is a fixed pipeline of stages over a span list: images, links,
//! bold, italic, code. Every stage only re-splits plain spans; a span that has
//! been styled keeps its text verbatim for the rest of the pipeline. There is
//! no nesting: `**a *b* c**` is one bold span with the text `a *b* c`.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` record (kind + text + optional url) and `SpanKind`
//! - **`kinds`**: Inline-specific types with owned syntax (Image, Link, Delimiter)
//! - **`parser`**: `text_to_spans()` main entry point with the `split_*` stages
//! - **`to_html`**: `span_to_html_node()` and `text_to_children()`
//!
//! ## Precedence
//!
//! Images before links, because the link pattern matches the tail of an image.
//! Bold before italic, because `**` would otherwise split as two empty italics.
//! Code last. Reordering any of these changes the output for mixed input.

pub mod kinds;
pub mod parser;
pub mod to_html;
pub mod types;

pub use parser::text_to_spans;
pub use to_html::{span_to_html_node, text_to_children};
pub use types::{SpanKind, TextSpan};
