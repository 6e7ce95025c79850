use std::sync::OnceLock;

use regex::Regex;

/// Link inline type: `[text](url)`.
///
/// The pattern also matches the tail of an image, so links are only
/// extracted after images have been consumed.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[(.*?)\]\((.*?)\)";

    pub fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid link regex"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_every_link() {
        let found: Vec<_> = Link::regex()
            .captures_iter(
                "This is text with a [link](https://www.example.com) and [another](https://www.example.com/another)",
            )
            .map(|c| (c[1].to_string(), c[2].to_string()))
            .collect();
        assert_eq!(
            found,
            vec![
                ("link".to_string(), "https://www.example.com".to_string()),
                (
                    "another".to_string(),
                    "https://www.example.com/another".to_string()
                ),
            ]
        );
    }

    #[test]
    fn does_not_cross_lines() {
        assert!(!Link::regex().is_match("[text\n](url)"));
    }
}
