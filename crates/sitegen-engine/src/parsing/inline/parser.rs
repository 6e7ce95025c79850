use regex::Regex;

use super::{
    kinds::{Delimiter, Image, Link},
    types::{SpanKind, TextSpan},
};
use crate::parsing::ConversionError;

/// Tokenizes inline markdown into an ordered sequence of [`TextSpan`]s.
///
/// # Pipeline
/// Each stage re-splits the plain spans produced so far and passes styled
/// spans through untouched:
///
/// 1. images `![alt](url)`
/// 2. links `[text](url)` (after images, so an image is never read as a link)
/// 3. bold `**`, then italic `*`, then code `` ` ``
///
/// Delimiters are not checked for balance. An unpaired delimiter flips the
/// style of everything after it; that is accepted rather than corrected.
///
/// # Errors
/// [`ConversionError::InvalidSpanKind`] if a stage builds a span whose url
/// presence disagrees with its kind.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, ConversionError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_images(spans)?;
    let spans = split_links(spans)?;
    Delimiter::PRECEDENCE
        .into_iter()
        .try_fold(spans, split_delimiter)
}

pub fn split_images(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, ConversionError> {
    split_pattern(spans, Image::regex(), SpanKind::Image)
}

pub fn split_links(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>, ConversionError> {
    split_pattern(spans, Link::regex(), SpanKind::Link)
}

/// Splits plain spans on `delimiter`. Text at odd split positions takes the
/// delimiter's kind. Empty pieces are dropped.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: Delimiter,
) -> Result<Vec<TextSpan>, ConversionError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        for (i, piece) in span.text().split(delimiter.token).enumerate() {
            if piece.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 {
                SpanKind::Plain
            } else {
                delimiter.kind
            };
            out.push(TextSpan::new(kind, piece, None)?);
        }
    }
    Ok(out)
}

/// Single forward scan over each plain span, emitting the text before every
/// match, the match itself as a `kind` span, and any trailing text.
///
/// `regex` must have two capture groups: display text and url.
fn split_pattern(
    spans: Vec<TextSpan>,
    regex: &Regex,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ConversionError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.text();
        let mut current_pos = 0;
        for caps in regex.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.start() > current_pos {
                out.push(TextSpan::plain(&text[current_pos..whole.start()]));
            }
            out.push(TextSpan::new(kind, &caps[1], Some(caps[2].to_string()))?);
            current_pos = whole.end();
        }
        if current_pos < text.len() {
            out.push(TextSpan::plain(&text[current_pos..]));
        }
    }
    Ok(out)
}
