/// The kind of a block, derived from its text on every classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Default when no other rule matches, and the fallback for malformed structures.
    Paragraph,
    /// `#` to `######` followed by a space.
    Heading {
        /// Number of leading `#` characters (1 to 6).
        level: u8,
    },
    /// A fenced code block (```).
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `N. `, numbered from 1 without gaps.
    OrderedList,
    /// Every line starts with the same `* ` or `- ` marker.
    UnorderedList,
}

impl BlockKind {
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading { .. } => "heading",
            BlockKind::Code => "code",
            BlockKind::Quote => "quote",
            BlockKind::OrderedList => "ordered list",
            BlockKind::UnorderedList => "unordered list",
        }
    }
}
