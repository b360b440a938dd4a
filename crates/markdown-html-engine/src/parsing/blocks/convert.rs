use crate::{
    html::HtmlNode,
    parsing::{
        ParseError,
        inline::{TextFragment, tokenize_inline},
    },
};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::{Block, BlockKind},
};

/// Builds the HTML node for one classified block.
///
/// # Errors
/// Propagates [`ParseError::UnmatchedDelimiter`] from inline tokenizing and
/// [`ParseError::MalformedHeading`] for a heading block without a marker.
pub fn block_to_html(block: &Block<'_>) -> Result<HtmlNode, ParseError> {
    let text = block.raw_text;
    let node = match block.kind {
        BlockKind::Heading { .. } => {
            let (level, content) = Heading::split(text)?;
            HtmlNode::parent(format!("h{level}"), text_to_children(content)?)
        }
        BlockKind::Code => HtmlNode::parent(
            "pre",
            vec![HtmlNode::leaf("code", CodeFence::body(text))],
        ),
        BlockKind::Quote => HtmlNode::parent(
            "blockquote",
            text_to_children(&BlockQuote::strip_prefixes(text))?,
        ),
        BlockKind::UnorderedList => list_to_html("ul", text, UnorderedList::item_text)?,
        BlockKind::OrderedList => list_to_html("ol", text, OrderedList::item_text)?,
        BlockKind::Paragraph => {
            let joined = text.lines().collect::<Vec<_>>().join(" ");
            HtmlNode::parent("p", text_to_children(&joined)?)
        }
    };
    Ok(node)
}

/// Tokenizes `text` and maps each fragment to a leaf node.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(tokenize_inline(text)?
        .iter()
        .map(TextFragment::to_html_node)
        .collect())
}

/// One `li` per line, each line's marker removed by `item_text`.
fn list_to_html(
    tag: &str,
    text: &str,
    item_text: fn(&str) -> &str,
) -> Result<HtmlNode, ParseError> {
    let items = text
        .lines()
        .map(|line| -> Result<HtmlNode, ParseError> {
            Ok(HtmlNode::parent("li", text_to_children(item_text(line))?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(tag, items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(raw: &str) -> String {
        block_to_html(&Block::new(raw)).unwrap().render().unwrap()
    }

    #[test]
    fn heading_levels() {
        assert_eq!(render("# Heading 1"), "<h1>Heading 1</h1>");
        assert_eq!(
            render("### Smaller _heading_"),
            "<h3>Smaller <i>heading</i></h3>"
        );
        assert_eq!(render("###### Six"), "<h6>Six</h6>");
    }

    #[test]
    fn code_block_is_verbatim() {
        assert_eq!(
            render("```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```"),
            "<pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre>"
        );
    }

    #[test]
    fn code_block_on_one_line() {
        assert_eq!(render("```let x = 1;```"), "<pre><code>let x = 1;</code></pre>");
    }

    #[test]
    fn quote_strips_prefix() {
        assert_eq!(
            render(">Quoted line with **bold**"),
            "<blockquote>Quoted line with <b>bold</b></blockquote>"
        );
    }

    #[test]
    fn quote_lines_are_concatenated() {
        assert_eq!(
            render(">first\n>second"),
            "<blockquote>firstsecond</blockquote>"
        );
    }

    #[test]
    fn unordered_list_items() {
        assert_eq!(
            render("- item one\n- item _two_\n- item with **bold**"),
            "<ul><li>item one</li><li>item <i>two</i></li><li>item with <b>bold</b></li></ul>"
        );
    }

    #[test]
    fn ordered_list_items() {
        assert_eq!(
            render("1. first item\n2. second `code`\n3. third item"),
            "<ol><li>first item</li><li>second <code>code</code></li><li>third item</li></ol>"
        );
    }

    #[test]
    fn paragraph_lines_are_joined_with_spaces() {
        assert_eq!(
            render("This is **bolded** paragraph\ntext in a p\ntag here"),
            "<p>This is <b>bolded</b> paragraph text in a p tag here</p>"
        );
    }

    #[test]
    fn paragraph_with_link_and_image() {
        assert_eq!(
            render("See [docs](https://example.com) and ![logo](logo.png)"),
            r#"<p>See <a href="https://example.com">docs</a> and <img src="logo.png" alt="logo"></img></p>"#
        );
    }

    #[test]
    fn unmatched_delimiter_in_list_item_fails() {
        let block = Block::new("- fine\n- **broken");
        assert!(matches!(
            block_to_html(&block),
            Err(ParseError::UnmatchedDelimiter { delimiter: "**", .. })
        ));
    }

    #[test]
    fn heading_kind_without_marker_is_malformed() {
        let block = Block {
            raw_text: "#Title",
            kind: BlockKind::Heading { level: 1 },
        };
        assert_eq!(
            block_to_html(&block),
            Err(ParseError::MalformedHeading {
                line: "#Title".to_string()
            })
        );
    }

    #[test]
    fn empty_list_item_yields_empty_li() {
        assert_eq!(render("- a\n- "), "<ul><li>a</li><li></li></ul>");
    }
}
