use crate::{
    html::{Attributes, HtmlNode, LeafNode},
    parsing::ConversionError,
};

use super::{
    kinds::Image,
    parser::text_to_spans,
    types::{SpanKind, TextSpan},
};

/// Maps one span to a leaf node.
///
/// Images render the fixed [`Image::PLACEHOLDER`] text with `src` and `alt`
/// attributes. A span with empty text (other than an image) fails leaf
/// construction.
///
/// # Errors
/// - [`ConversionError::InvalidSpanKind`] if the kind and url pairing has no leaf mapping
/// - [`ConversionError::Html`] if the leaf cannot be built
pub fn span_to_html_node(span: &TextSpan) -> Result<HtmlNode, ConversionError> {
    let text = span.text();
    let leaf = match (span.kind(), span.url()) {
        (SpanKind::Plain, None) => LeafNode::text(text)?,
        (SpanKind::Bold, None) => LeafNode::new(text, Some("b"))?,
        (SpanKind::Italic, None) => LeafNode::new(text, Some("i"))?,
        (SpanKind::Code, None) => LeafNode::new(text, Some("code"))?,
        (SpanKind::Link, Some(url)) => {
            LeafNode::new(text, Some("a"))?.with_attributes(Attributes::new().with("href", url))
        }
        (SpanKind::Image, Some(url)) => LeafNode::new(Image::PLACEHOLDER, Some("img"))?
            .with_attributes(Attributes::new().with("src", url).with("alt", text)),
        (kind, url) => {
            return Err(ConversionError::InvalidSpanKind {
                kind,
                has_url: url.is_some(),
            });
        }
    };
    Ok(leaf.into())
}

/// Tokenizes `text` and maps every span to a leaf node, in order.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ConversionError> {
    text_to_spans(text)?.iter().map(span_to_html_node).collect()
}
