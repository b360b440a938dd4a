use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::types::FragmentKind;

/// Bracket-and-paren inline syntax: `![alt](url)` and `[text](url)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Image,
    Link,
}

/// One occurrence of [`Markup`] within a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupMatch<'a> {
    /// Byte range of the whole construct, brackets and parens included.
    pub range: Range<usize>,
    /// Alt text (images) or anchor text (links).
    pub text: &'a str,
    pub url: &'a str,
}

impl Markup {
    /// Marks an image; a link must not be preceded by it.
    pub const IMAGE_PREFIX: char = '!';

    pub const fn kind(self) -> FragmentKind {
        match self {
            Markup::Image => FragmentKind::Image,
            Markup::Link => FragmentKind::Link,
        }
    }

    fn pattern(self) -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();

        match self {
            Markup::Image => IMAGE_REGEX.get_or_init(|| {
                Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").expect("Invalid image regex")
            }),
            Markup::Link => LINK_REGEX.get_or_init(|| {
                Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("Invalid link regex")
            }),
        }
    }

    /// Finds every occurrence in `text`, left to right, without overlaps.
    pub fn find_all(self, text: &str) -> Vec<MarkupMatch<'_>> {
        self.pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let full = caps.get(0)?;
                // `regex` has no lookbehind; reject `![..](..)` here instead
                if self == Markup::Link && text[..full.start()].ends_with(Self::IMAGE_PREFIX) {
                    return None;
                }
                Some(MarkupMatch {
                    range: full.range(),
                    text: caps.get(1)?.as_str(),
                    url: caps.get(2)?.as_str(),
                })
            })
            .collect()
    }

    /// Formats `text` and `url` back into this syntax.
    pub fn render(self, text: &str, url: &str) -> String {
        match self {
            Markup::Image => format!("![{text}]({url})"),
            Markup::Link => format!("[{text}]({url})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(markup: Markup, text: &str) -> Vec<(&str, &str)> {
        markup
            .find_all(text)
            .into_iter()
            .map(|m| (m.text, m.url))
            .collect()
    }

    #[test]
    fn image_match_records_range() {
        let text = "see ![cat](c.png) here";
        let found = Markup::Image.find_all(text);
        assert_eq!(found.len(), 1);
        assert_eq!(&text[found[0].range.clone()], "![cat](c.png)");
    }

    #[test]
    fn image_allows_empty_parts() {
        assert_eq!(pairs(Markup::Image, "![](x.png) ![alt]()"), vec![("", "x.png"), ("alt", "")]);
    }

    #[test]
    fn link_skips_image_syntax() {
        let text = "![img](a.png) and [link](b.html)";
        assert_eq!(pairs(Markup::Link, text), vec![("link", "b.html")]);
    }

    #[test]
    fn link_at_start_of_text() {
        assert_eq!(pairs(Markup::Link, "[a](b)"), vec![("a", "b")]);
    }

    #[test]
    fn alt_text_stops_at_first_closing_bracket() {
        assert_eq!(
            pairs(Markup::Image, "![a](1.png) and ![b](2.png)"),
            vec![("a", "1.png"), ("b", "2.png")]
        );
    }

    #[test]
    fn render_round_trips() {
        assert_eq!(Markup::Image.render("a", "u"), "![a](u)");
        assert_eq!(Markup::Link.render("a", "u"), "[a](u)");
    }
}
