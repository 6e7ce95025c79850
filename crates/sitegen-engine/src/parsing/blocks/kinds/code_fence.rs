/// Fenced code block type.
///
/// Only backtick fences are recognised. A fence opens on a line that starts
/// with ``` (after trimming) and closes on a later line that ends with one.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn opens(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }

    pub fn closes(line: &str) -> bool {
        line.trim().ends_with(Self::BACKTICKS)
    }

    /// Whether a block's first and last lines both start with a fence.
    pub fn is_fenced(lines: &[&str]) -> bool {
        match lines {
            [first, .., last] => {
                first.starts_with(Self::BACKTICKS) && last.starts_with(Self::BACKTICKS)
            }
            _ => false,
        }
    }

    /// Returns the text between the fences, dropping the opening fence plus
    /// the one character after it (normally the newline) and the closing fence.
    ///
    /// `None` if the block does not both start and end with a fence.
    pub fn interior(block: &str) -> Option<&str> {
        let inner = block
            .strip_prefix(Self::BACKTICKS)?
            .strip_suffix(Self::BACKTICKS)?;
        let mut chars = inner.chars();
        chars.next();
        Some(chars.as_str())
    }
}
