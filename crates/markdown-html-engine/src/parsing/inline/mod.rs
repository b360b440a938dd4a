//! # Inline Tokenizing
//!
//! Splits a single span of text into typed [`TextFragment`]s.
//!
//! ## Passes
//!
//! Tokenizing is a fixed pipeline of passes over a fragment list. Each pass
//! only re-splits `Plain` fragments and copies everything else through:
//!
//! 1. `**` → Bold
//! 2. `_` → Italic
//! 3. `` ` `` → Code
//! 4. `![alt](url)` → Image
//! 5. `[text](url)` → Link
//!
//! Delimiter priority therefore follows pass order, not position in the text.
//!
//! ## Modules
//!
//! - **`types`**: `TextFragment` and `FragmentKind`, plus the mapping to HTML leaves
//! - **`kinds`**: `Delimiter` and `Markup`, which own the inline syntax
//! - **`split`**: the individual passes (`split_delimiter`, `split_images`, `split_links`)
//! - **`parser`**: `tokenize_inline()` entry point and the `extract_*` helpers
//!
//! ## Invariants
//!
//! - No Plain fragment is ever empty
//! - Fragments cover the input in order with no gaps or overlaps; writing each
//!   back with [`TextFragment::to_markdown`] reproduces the input

pub mod kinds;
pub mod parser;
pub mod split;
pub mod types;

pub use kinds::{Delimiter, Markup};
pub use parser::{extract_images, extract_links, tokenize_inline};
pub use split::{split_delimiter, split_images, split_links};
pub use types::{FragmentKind, TextFragment};
