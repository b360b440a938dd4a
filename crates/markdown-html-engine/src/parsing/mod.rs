pub mod blocks;
pub mod inline;
pub mod snapshot;

use crate::html::HtmlNode;

use blocks::{Block, block_to_html, segment_blocks};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unmatched delimiter `{delimiter}` in {text:?}")]
    UnmatchedDelimiter {
        delimiter: &'static str,
        text: String,
    },
    #[error("malformed heading, expected `#` markers and a space: {line:?}")]
    MalformedHeading { line: String },
}

/// Segments and classifies a document into blocks, in source order.
pub fn parse_blocks(document: &str) -> Vec<Block<'_>> {
    segment_blocks(document).into_iter().map(Block::new).collect()
}

/// Converts a whole document into a single `div` node, one child per block.
///
/// # Errors
/// The first block that fails to convert aborts the document; no partial
/// tree is returned.
pub fn convert_document(document: &str) -> Result<HtmlNode, ParseError> {
    let blocks = parse_blocks(document);
    log::debug!("converting document with {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(block_to_html)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::parent("div", children))
}
