//! # HTML Node Tree
//!
//! The output data structure of the converter: a tree of tagged nodes that
//! renders to an HTML string.
//!
//! ## Shapes
//!
//! - **`LeafNode`**: optional tag, text value, attributes. A leaf without a tag
//!   renders as its raw value.
//! - **`ParentNode`**: tag, ordered children, attributes.
//!
//! Both are wrapped by [`HtmlNode`], which is the only type the parser hands out.
//! Rendering is fallible because nodes can be assembled field-by-field; the
//! constructors on [`HtmlNode`] always produce renderable nodes.

pub mod node;

pub use node::{Attributes, HtmlNode, LeafNode, ParentNode, RenderError};
