use crate::parsing::ConversionError;

/// The style of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Whether spans of this kind carry a destination URL.
    pub fn has_url(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

/// One contiguous run of inline-styled text.
///
/// `text` is the display text, or the alt text for images. `url` is set
/// if and only if `kind` is [`SpanKind::Link`] or [`SpanKind::Image`].
/// Every constructor upholds that, and a span cannot change once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    kind: SpanKind,
    text: String,
    url: Option<String>,
}

impl TextSpan {
    /// Builds a span of any kind.
    ///
    /// # Errors
    /// [`ConversionError::InvalidSpanKind`] if url presence disagrees with `kind`.
    pub(crate) fn new(
        kind: SpanKind,
        text: impl Into<String>,
        url: Option<String>,
    ) -> Result<Self, ConversionError> {
        if kind.has_url() != url.is_some() {
            return Err(ConversionError::InvalidSpanKind {
                kind,
                has_url: url.is_some(),
            });
        }
        Ok(Self {
            kind,
            text: text.into(),
            url,
        })
    }

    fn styled(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    fn targeted(kind: SpanKind, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(SpanKind::Plain, text)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(SpanKind::Bold, text)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::styled(SpanKind::Italic, text)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::styled(SpanKind::Code, text)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::targeted(SpanKind::Link, text, url)
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::targeted(SpanKind::Image, alt, url)
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}
