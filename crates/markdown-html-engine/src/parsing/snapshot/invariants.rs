use crate::parsing::{blocks::Block, inline::TextFragment};

/// Asserts that `fragments` are a faithful tokenization of `source`.
///
/// Writing every fragment back as Markdown must reproduce `source` exactly,
/// and no Plain fragment may be empty.
pub fn check_fragments(source: &str, fragments: &[TextFragment]) {
    for f in fragments {
        assert!(
            !(f.is_plain() && f.content.is_empty()),
            "empty plain fragment in tokenization of {source:?}"
        );
    }

    let rebuilt: String = fragments.iter().map(TextFragment::to_markdown).collect();
    assert_eq!(
        rebuilt, source,
        "fragments do not cover the source: {fragments:?}"
    );
}

/// Asserts that every block is non-empty, trimmed and appears in `document`
/// in order.
pub fn check_blocks(document: &str, blocks: &[Block<'_>]) {
    let mut search_from = 0;
    for b in blocks {
        assert!(!b.raw_text.is_empty(), "empty block in {document:?}");
        assert_eq!(
            b.raw_text,
            b.raw_text.trim(),
            "block is not trimmed: {:?}",
            b.raw_text
        );

        let offset = document[search_from..]
            .find(b.raw_text)
            .unwrap_or_else(|| panic!("block out of order or missing: {:?}", b.raw_text));
        search_from += offset + b.raw_text.len();
    }
}
