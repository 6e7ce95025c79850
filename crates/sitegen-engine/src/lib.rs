pub mod html;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlError, HtmlNode, LeafNode, ParentNode};
pub use parsing::{ConversionError, markdown_to_html_node};
pub use site::{BuildReport, SiteError, SiteLayout, build_site};

/// Renders a markdown document to an HTML fragment wrapped in a `div`.
pub fn render(markdown: &str) -> Result<String, ConversionError> {
    Ok(markdown_to_html_node(markdown)?.to_html())
}
