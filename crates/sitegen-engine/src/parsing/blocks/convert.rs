use crate::{
    html::{HtmlNode, ParentNode},
    parsing::{ConversionError, inline::text_to_children},
};

use super::{
    classify::block_to_block_type,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::BlockKind,
};

/// Classifies `block` and builds the matching subtree.
pub fn block_to_html_node(block: &str) -> Result<HtmlNode, ConversionError> {
    let node = match block_to_block_type(block)? {
        BlockKind::Paragraph => paragraph_to_html_node(block)?,
        BlockKind::Heading { level } => heading_to_html_node(block, level)?,
        BlockKind::Code => code_to_html_node(block)?,
        BlockKind::Quote => quote_to_html_node(block)?,
        BlockKind::OrderedList => ordered_list_to_html_node(block)?,
        BlockKind::UnorderedList => unordered_list_to_html_node(block)?,
    };
    Ok(node.into())
}

pub fn paragraph_to_html_node(block: &str) -> Result<ParentNode, ConversionError> {
    let text = Paragraph::join_lines(block.split('\n'));
    Ok(ParentNode::new("p", text_to_children(&text)?)?)
}

pub fn heading_to_html_node(block: &str, level: u8) -> Result<ParentNode, ConversionError> {
    let text = Heading::strip(block, level);
    Ok(ParentNode::new(format!("h{level}"), text_to_children(text)?)?)
}

/// `<pre><code>...</code></pre>`. The interior still goes through inline
/// tokenizing, so delimiters inside a code block are styled.
pub fn code_to_html_node(block: &str) -> Result<ParentNode, ConversionError> {
    let interior = CodeFence::interior(block).ok_or_else(|| malformed(BlockKind::Code, block))?;
    let code = ParentNode::new("code", text_to_children(interior)?)?;
    Ok(ParentNode::new("pre", vec![code.into()])?)
}

pub fn quote_to_html_node(block: &str) -> Result<ParentNode, ConversionError> {
    let lines = block
        .split('\n')
        .map(|line| {
            if BlockQuote::is_quoted(line) {
                Ok(BlockQuote::strip(line))
            } else {
                Err(malformed(BlockKind::Quote, block))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    let text = Paragraph::join_lines(lines);
    Ok(ParentNode::new("blockquote", text_to_children(&text)?)?)
}

pub fn ordered_list_to_html_node(block: &str) -> Result<ParentNode, ConversionError> {
    let items = block
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            OrderedList::strip(line, i + 1).ok_or_else(|| malformed(BlockKind::OrderedList, block))
        })
        .collect::<Result<Vec<_>, _>>()?;
    list_to_html_node("ol", items)
}

pub fn unordered_list_to_html_node(block: &str) -> Result<ParentNode, ConversionError> {
    let items = block
        .split('\n')
        .map(|line| {
            UnorderedList::strip(line).ok_or_else(|| malformed(BlockKind::UnorderedList, block))
        })
        .collect::<Result<Vec<_>, _>>()?;
    list_to_html_node("ul", items)
}

fn list_to_html_node(tag: &str, items: Vec<&str>) -> Result<ParentNode, ConversionError> {
    let children = items
        .into_iter()
        .map(|item| -> Result<HtmlNode, ConversionError> {
            Ok(ParentNode::new("li", text_to_children(item)?)?.into())
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new(tag, children)?)
}

fn malformed(kind: BlockKind, block: &str) -> ConversionError {
    ConversionError::MalformedStructuralBlock {
        kind: kind.name(),
        block: block.to_string(),
    }
}
