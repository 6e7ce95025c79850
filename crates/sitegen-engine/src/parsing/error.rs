use crate::{html::HtmlError, parsing::inline::SpanKind};

/// Errors raised while converting markdown into an HTML tree.
///
/// None of these are recoverable for the document being converted:
/// a document either renders fully or the call fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("span kind {kind:?} cannot be mapped to HTML (url present: {has_url})")]
    InvalidSpanKind { kind: SpanKind, has_url: bool },
    #[error("block cannot be empty")]
    EmptyBlock,
    #[error("malformed {kind} block: {block:?}")]
    MalformedStructuralBlock { kind: &'static str, block: String },
    #[error(transparent)]
    Html(#[from] HtmlError),
}
