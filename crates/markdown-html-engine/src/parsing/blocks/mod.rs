//! # Block Parsing
//!
//! Turns a whole document into a sequence of typed blocks and each block into
//! an HTML node.
//!
//! ## Phases
//!
//! 1. **Segmentation** (`segment`): split on blank lines, trim, drop empties
//! 2. **Classification** (`classify`): pick one `BlockKind` per block by
//!    structural pattern, falling back to `Paragraph`
//! 3. **Conversion** (`convert`): strip block syntax, tokenize inline text,
//!    and assemble the block's node
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `BlockKind`
//! - **`kinds`**: block-specific types owning their markers (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList)
//! - **`segment`**: `segment_blocks`
//! - **`classify`**: `classify_block`
//! - **`convert`**: `block_to_html`
//!
//! ## Key Invariants
//!
//! - Classification is total: malformed markup is reclassified, never rejected
//! - Fenced code blocks are raw zones: no inline tokenizing inside
//! - Block order matches source order

pub mod classify;
pub mod convert;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify_block;
pub use convert::block_to_html;
pub use segment::segment_blocks;
pub use types::{Block, BlockKind};
