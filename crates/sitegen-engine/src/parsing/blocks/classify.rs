use crate::parsing::ConversionError;

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies a block. The first matching rule wins:
///
/// 1. heading: one to six `#` then a space
/// 2. code: more than one line, first and last lines start with a fence
/// 3. quote: every line starts with `>`
/// 4. unordered list: every line starts with the first line's `* ` or `- `
/// 5. ordered list: every line starts with `N. `, counting up from 1
/// 6. paragraph
///
/// A block that opens like a quote or list but breaks the pattern on a later
/// line is a paragraph, not an error.
///
/// # Errors
/// [`ConversionError::EmptyBlock`] if `block` is empty.
pub fn block_to_block_type(block: &str) -> Result<BlockKind, ConversionError> {
    if block.is_empty() {
        return Err(ConversionError::EmptyBlock);
    }

    if let Some(level) = Heading::level(block) {
        return Ok(BlockKind::Heading { level });
    }

    let lines: Vec<&str> = block.split('\n').collect();

    if CodeFence::is_fenced(&lines) {
        return Ok(BlockKind::Code);
    }

    if BlockQuote::is_quoted(block) {
        return Ok(all_or_paragraph(
            lines.iter().all(|l| BlockQuote::is_quoted(l)),
            BlockKind::Quote,
        ));
    }

    if let Some(marker) = UnorderedList::marker(block) {
        return Ok(all_or_paragraph(
            lines.iter().all(|l| l.starts_with(marker)),
            BlockKind::UnorderedList,
        ));
    }

    if OrderedList::opens(block) {
        return Ok(all_or_paragraph(
            OrderedList::is_sequential(&lines),
            BlockKind::OrderedList,
        ));
    }

    Ok(BlockKind::Paragraph)
}

fn all_or_paragraph(all: bool, kind: BlockKind) -> BlockKind {
    if all { kind } else { BlockKind::Paragraph }
}
