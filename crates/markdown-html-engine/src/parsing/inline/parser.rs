use crate::parsing::ParseError;

use super::{
    kinds::{Delimiter, Markup},
    split::{split_delimiter, split_images, split_links},
    types::TextFragment,
};

/// Tokenizes one inline span into an ordered sequence of [`TextFragment`]s.
///
/// Runs five passes, each re-splitting only the Plain fragments left by the
/// one before: `**`, `_`, `` ` ``, images, links. Text already claimed by an
/// earlier pass is never looked at again, so `` `**x**` `` fails on an
/// unmatched backtick instead of producing a code span.
///
/// # Errors
/// [`ParseError::UnmatchedDelimiter`] if any delimiter is left open.
pub fn tokenize_inline(text: &str) -> Result<Vec<TextFragment>, ParseError> {
    let mut fragments = vec![TextFragment::plain(text)];
    for delimiter in Delimiter::PRECEDENCE {
        fragments = split_delimiter(fragments, delimiter)?;
    }
    fragments = split_images(fragments);
    fragments = split_links(fragments);
    Ok(fragments)
}

/// Returns `(alt, url)` for every image in `text`.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    extract(text, Markup::Image)
}

/// Returns `(anchor, url)` for every link in `text`, skipping images.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    extract(text, Markup::Link)
}

fn extract(text: &str, markup: Markup) -> Vec<(&str, &str)> {
    markup
        .find_all(text)
        .into_iter()
        .map(|m| (m.text, m.url))
        .collect()
}
