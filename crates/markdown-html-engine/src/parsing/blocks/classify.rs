use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Assigns a [`BlockKind`] to one trimmed block string.
///
/// Checked in priority order, first match wins: heading, fenced code, quote,
/// unordered list, ordered list. Anything else, including near misses such as
/// `#Title` or an unclosed fence, is a paragraph.
pub fn classify_block(block: &str) -> BlockKind {
    let kind = if let Some(level) = Heading::level(block) {
        BlockKind::Heading { level }
    } else if CodeFence::is_fenced(block) {
        BlockKind::Code
    } else if BlockQuote::is_quote(block) {
        BlockKind::Quote
    } else if UnorderedList::is_list(block) {
        BlockKind::UnorderedList
    } else if OrderedList::is_list(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    };

    log::trace!("classified block as {kind:?}: {:?}", preview(block));
    kind
}

fn preview(block: &str) -> &str {
    block.lines().next().unwrap_or_default()
}
