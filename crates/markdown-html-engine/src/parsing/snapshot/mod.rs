//! # Snapshot Testing Support
//!
//! Utilities for testing the converter via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a document's block outline as stable text for
//!   `insta` snapshots
//! - **`invariants`**: Runtime checks for tokenizer and segmenter correctness
//!   (coverage of the input, no empty Plain fragments, trimmed non-empty blocks)

pub mod invariants;
pub mod normalize;

pub use invariants::{check_blocks, check_fragments};
pub use normalize::normalize;
