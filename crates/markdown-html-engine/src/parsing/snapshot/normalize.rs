use std::{error::Error, fmt::Write};

use crate::parsing::{
    blocks::{Block, BlockKind, block_to_html},
    parse_blocks,
};

/// Produces a stable, line-oriented outline of a document for snapshot tests.
///
/// Each block contributes a header line with its kind and first source line,
/// followed by its rendered HTML indented by two spaces.
///
/// # Errors
/// Any parse or render failure in any block.
pub fn normalize(document: &str) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();
    for block in parse_blocks(document) {
        let html = block_to_html(&block)?.render()?;
        writeln!(out, "{}: {}", kind_label(&block), first_line(&block))?;
        for line in html.lines() {
            writeln!(out, "  {line}")?;
        }
    }
    Ok(out)
}

fn kind_label(block: &Block<'_>) -> String {
    match block.kind {
        BlockKind::Heading { level } => format!("Heading({level})"),
        BlockKind::Code => "Code".to_string(),
        BlockKind::Quote => "Quote".to_string(),
        BlockKind::UnorderedList => "UnorderedList".to_string(),
        BlockKind::OrderedList => "OrderedList".to_string(),
        BlockKind::Paragraph => "Paragraph".to_string(),
    }
}

fn first_line<'a>(block: &Block<'a>) -> &'a str {
    block.raw_text.lines().next().unwrap_or_default()
}
