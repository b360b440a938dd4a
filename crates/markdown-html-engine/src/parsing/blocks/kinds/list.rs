use std::sync::OnceLock;

use regex::Regex;

/// Unordered (bullet) list block type.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    /// True if every line of `block` starts with `- `.
    pub fn is_list(block: &str) -> bool {
        !block.is_empty() && block.lines().all(|line| line.starts_with(Self::MARKER))
    }

    /// The item text after the marker.
    pub fn item_text(line: &str) -> &str {
        line.get(Self::MARKER.len()..).unwrap_or_default()
    }
}

/// Ordered list block type.
///
/// Items are a single digit, a dot and a space. Numbering is not checked for
/// sequence, and multi-digit numbers are not list items.
pub struct OrderedList;

impl OrderedList {
    /// Byte length of an item marker such as `1. `.
    pub const MARKER_LEN: usize = 3;

    fn marker_regex() -> &'static Regex {
        static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
        MARKER_REGEX.get_or_init(|| Regex::new(r"^[0-9]\. ").expect("Invalid ordered list regex"))
    }

    /// True if every line of `block` starts with a digit, `.` and a space.
    pub fn is_list(block: &str) -> bool {
        let marker = Self::marker_regex();
        !block.is_empty() && block.lines().all(|line| marker.is_match(line))
    }

    /// The item text after the marker.
    pub fn item_text(line: &str) -> &str {
        line.get(Self::MARKER_LEN..).unwrap_or_default()
    }
}
