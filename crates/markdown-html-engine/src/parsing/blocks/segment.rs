use std::sync::OnceLock;

use regex::Regex;

/// Splits a document into trimmed, non-empty block strings in source order.
///
/// Blocks are separated by any whitespace run containing at least two
/// newlines, i.e. one or more blank lines.
pub fn segment_blocks(document: &str) -> Vec<&str> {
    static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();
    let separator = SEPARATOR_REGEX
        .get_or_init(|| Regex::new(r"\n\s*\n").expect("Invalid block separator regex"));

    separator
        .split(document)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn paragraphs_lists_and_inline_markup() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            segment_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[rstest]
    #[case("Just one block", vec!["Just one block"])]
    #[case(
        "First paragraph\n\nSecond paragraph\n\nThird paragraph",
        vec!["First paragraph", "Second paragraph", "Third paragraph"]
    )]
    #[case(
        "First block\n\n\n\nSecond block\n\n\nThird block",
        vec!["First block", "Second block", "Third block"]
    )]
    #[case(
        "First line\nSecond line\nThird line\n\nFourth line\nFifth line",
        vec!["First line\nSecond line\nThird line", "Fourth line\nFifth line"]
    )]
    #[case(
        "# Heading 1\n\nParagraph text\n\n## Heading 2\n\nMore text",
        vec!["# Heading 1", "Paragraph text", "## Heading 2", "More text"]
    )]
    #[case(
        "- List item 1\n- List item 2\n\n```\ncode block\n```\n\nParagraph",
        vec!["- List item 1\n- List item 2", "```\ncode block\n```", "Paragraph"]
    )]
    #[case("one\n   \t\ntwo", vec!["one", "two"])]
    #[case("", vec![])]
    #[case("\n\n\n", vec![])]
    #[case("  \n \t \n  ", vec![])]
    fn segments(#[case] md: &str, #[case] expected: Vec<&str>) {
        assert_eq!(segment_blocks(md), expected);
    }

    #[test]
    fn indented_blocks_are_trimmed() {
        let md = "
        
        First block with spaces
        
        Second block with spaces
        
        ";
        assert_eq!(
            segment_blocks(md),
            vec!["First block with spaces", "Second block with spaces"]
        );
    }
}
