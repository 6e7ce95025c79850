/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quoted(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips every leading `>` and the whitespace around the remaining text.
    ///
    /// `>> nested` and `> > spaced` both lose their first run of `>` only;
    /// quotes do not nest.
    pub fn strip(line: &str) -> &str {
        line.trim_start_matches(Self::PREFIX).trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip("hello"), "hello");
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip("> hello"), "hello");
        assert_eq!(BlockQuote::strip(">hello  "), "hello");
    }

    #[test]
    fn strip_nested_quote_no_space() {
        assert_eq!(BlockQuote::strip(">> hello"), "hello");
    }

    #[test]
    fn strip_spaced_nested_quote_keeps_inner_marker() {
        assert_eq!(BlockQuote::strip("> > hello"), "> hello");
    }

    #[test]
    fn quoted_requires_marker_at_line_start() {
        assert!(BlockQuote::is_quoted(">x"));
        assert!(!BlockQuote::is_quoted(" > x"));
    }
}
