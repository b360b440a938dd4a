pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use html::{HtmlNode, RenderError};
pub use parsing::{
    ParseError,
    blocks::{Block, BlockKind, block_to_html, classify_block, segment_blocks},
    convert_document,
    inline::{FragmentKind, TextFragment, extract_images, extract_links, tokenize_inline},
    parse_blocks,
};
