//! # Inline Kinds
//!
//! Inline-specific types that own their syntax.
//!
//! ## Types
//!
//! - **`Delimiter`**: paired markers `**` (bold), `_` (italic) and `` ` `` (code)
//! - **`Markup`**: bracketed image `![alt](url)` and link `[text](url)` syntax
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in parser code.
//! The splitting passes call into these types; they never hardcode `**` or `[`.

pub mod delimiter;
pub mod markup;

pub use delimiter::Delimiter;
pub use markup::{Markup, MarkupMatch};
