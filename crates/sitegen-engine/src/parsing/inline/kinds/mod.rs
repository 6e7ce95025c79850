//! # Inline Kinds
//!
//! Inline-specific types that own their syntax: every pattern and delimiter
//! lives here, the parser never hardcodes `![`, `[` or `**`.
//!
//! ## Types
//!
//! - **`Image`**: `![alt](url)`, matched by a non-greedy regex
//! - **`Link`**: `[text](url)`, same shape without the leading `!`
//! - **`Delimiter`**: paired delimiters `**`, `*` and `` ` `` with the span kind each produces

pub mod delimiter;
pub mod image;
pub mod link;

pub use delimiter::Delimiter;
pub use image::Image;
pub use link::Link;
