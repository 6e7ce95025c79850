/// Unordered list block type: every line starts with the same bullet marker.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    /// The marker the first line opens with, if any.
    pub fn marker(block: &str) -> Option<&'static str> {
        Self::MARKERS.into_iter().find(|m| block.starts_with(m))
    }

    /// Strips whichever bullet marker the line starts with.
    pub fn strip(line: &str) -> Option<&str> {
        Self::MARKERS.iter().find_map(|m| line.strip_prefix(m))
    }
}

/// Ordered list block type: lines numbered `1. `, `2. `, ... without gaps.
pub struct OrderedList;

impl OrderedList {
    /// Characters removed from the front of every item, whatever its number.
    pub const MARKER_WIDTH: usize = 3;

    /// Marker for the item at 1-based position `n`.
    pub fn marker(n: usize) -> String {
        format!("{n}. ")
    }

    pub fn opens(block: &str) -> bool {
        block.starts_with(&Self::marker(1))
    }

    /// Whether each line starts with its own 1-based position marker.
    pub fn is_sequential(lines: &[&str]) -> bool {
        lines
            .iter()
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i + 1)))
    }

    /// Strips a fixed [`Self::MARKER_WIDTH`] characters from an item at
    /// 1-based position `n`.
    ///
    /// From item 10 on, the width leaves the marker's trailing space on the
    /// item text: `10. tenth` becomes ` tenth`.
    pub fn strip(line: &str, n: usize) -> Option<&str> {
        if !line.starts_with(&Self::marker(n)) {
            return None;
        }
        line.get(Self::MARKER_WIDTH..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_marker_detection() {
        assert_eq!(UnorderedList::marker("* a"), Some("* "));
        assert_eq!(UnorderedList::marker("- a"), Some("- "));
        assert_eq!(UnorderedList::marker("*a"), None);
        assert_eq!(UnorderedList::marker("+ a"), None);
    }

    #[test]
    fn unordered_strip() {
        assert_eq!(UnorderedList::strip("- item"), Some("item"));
        assert_eq!(UnorderedList::strip("* *em*"), Some("*em*"));
        assert_eq!(UnorderedList::strip("item"), None);
    }

    #[test]
    fn ordered_sequence() {
        assert!(OrderedList::is_sequential(&["1. a", "2. b", "3. c"]));
        assert!(!OrderedList::is_sequential(&["1. a", "3. b"]));
        assert!(!OrderedList::is_sequential(&["2. a"]));
    }

    #[test]
    fn ordered_strip_handles_multi_digit_markers() {
        assert_eq!(OrderedList::strip("1. first", 1), Some("first"));
        assert_eq!(OrderedList::strip("10. tenth", 10), Some(" tenth"));
        assert_eq!(OrderedList::strip("100. hundredth", 100), Some(". hundredth"));
        assert_eq!(OrderedList::strip("2. wrong", 1), None);
    }
}
