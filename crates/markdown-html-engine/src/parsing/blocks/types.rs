use super::classify::classify_block;

/// The structural kind of a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `#` through `######`.
    Heading { level: u8 },
    /// A fenced code block. Raw zone: no inline tokenizing inside.
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    /// Default when no other block kind matches.
    Paragraph,
}

/// One structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// Source text with surrounding whitespace trimmed; interior newlines kept.
    pub raw_text: &'a str,
    pub kind: BlockKind,
}

impl<'a> Block<'a> {
    /// Classifies `raw_text` and wraps it as a block.
    pub fn new(raw_text: &'a str) -> Self {
        Self {
            raw_text,
            kind: classify_block(raw_text),
        }
    }
}
