/// ATX heading block type: one to six `#` followed by a space.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the heading level if `block` opens with a valid `#` run.
    pub fn level(block: &str) -> Option<u8> {
        let hashes = block.len() - block.trim_start_matches(Self::MARKER).len();
        if hashes == 0 || hashes > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        if !block[hashes..].starts_with(' ') {
            return None;
        }
        u8::try_from(hashes).ok()
    }

    /// Strips the `#` run and the single space that follows it.
    pub fn strip(block: &str, level: u8) -> &str {
        let prefix = usize::from(level) + 1;
        block.get(prefix..).unwrap_or_default()
    }
}
