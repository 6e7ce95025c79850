pub mod blocks;
pub mod error;
pub mod inline;

#[cfg(test)]
mod tests;

pub use error::ConversionError;

use crate::html::{HtmlNode, ParentNode};

use blocks::{block_to_html_node, markdown_to_blocks};

/// Converts a whole document into a single `div` whose children are the
/// converted blocks, in source order.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ConversionError> {
    let children = markdown_to_blocks(markdown)
        .iter()
        .map(|block| block_to_html_node(block))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new("div", children)?.into())
}
