use std::sync::OnceLock;

use regex::Regex;

/// Image inline type: `![alt](url)`.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[(.*?)\]\((.*?)\)";
    /// Text rendered inside every `<img>` leaf; the alt text only survives as an attribute.
    pub const PLACEHOLDER: &'static str = "Image";

    pub fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid image regex"))
    }
}
