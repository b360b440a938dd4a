use crate::parsing::ParseError;

use super::{
    kinds::{Delimiter, Markup},
    types::TextFragment,
};

/// Re-splits every Plain fragment on `delimiter`; other fragments pass through.
///
/// # Errors
/// [`ParseError::UnmatchedDelimiter`] when a Plain fragment opens the
/// delimiter without closing it.
pub fn split_delimiter(
    fragments: Vec<TextFragment>,
    delimiter: Delimiter,
) -> Result<Vec<TextFragment>, ParseError> {
    let mut out = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if fragment.is_plain() {
            split_plain_on_delimiter(&fragment.content, delimiter, &mut out)?;
        } else {
            out.push(fragment);
        }
    }
    Ok(out)
}

/// Re-splits every Plain fragment around image syntax.
pub fn split_images(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_markup(fragments, Markup::Image)
}

/// Re-splits every Plain fragment around link syntax.
pub fn split_links(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    split_markup(fragments, Markup::Link)
}

fn split_markup(fragments: Vec<TextFragment>, markup: Markup) -> Vec<TextFragment> {
    let mut out = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if fragment.is_plain() {
            split_plain_on_markup(&fragment.content, markup, &mut out);
        } else {
            out.push(fragment);
        }
    }
    out
}

/// Scans `text` left to right, alternating Plain runs and delimited spans.
///
/// The span between a pair is kept even when empty (`****` is an empty bold).
fn split_plain_on_delimiter(
    text: &str,
    delimiter: Delimiter,
    out: &mut Vec<TextFragment>,
) -> Result<(), ParseError> {
    let marker = delimiter.marker();
    let mut rest = text;

    while let Some(open) = rest.find(marker) {
        push_plain(out, &rest[..open]);

        let inner = &rest[open + marker.len()..];
        let Some(close) = inner.find(marker) else {
            return Err(ParseError::UnmatchedDelimiter {
                delimiter: marker,
                text: text.to_string(),
            });
        };

        out.push(TextFragment::new(&inner[..close], delimiter.kind()));
        rest = &inner[close + marker.len()..];
    }

    push_plain(out, rest);
    Ok(())
}

fn split_plain_on_markup(text: &str, markup: Markup, out: &mut Vec<TextFragment>) {
    let mut cursor = 0;

    for found in markup.find_all(text) {
        push_plain(out, &text[cursor..found.range.start]);
        out.push(TextFragment {
            content: found.text.to_string(),
            kind: markup.kind(),
            target: Some(found.url.to_string()),
        });
        cursor = found.range.end;
    }

    push_plain(out, &text[cursor..]);
}

/// Empty Plain runs are never emitted.
fn push_plain(out: &mut Vec<TextFragment>, text: &str) {
    if !text.is_empty() {
        out.push(TextFragment::plain(text));
    }
}
