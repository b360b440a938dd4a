/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// True if every line of `block` starts with the prefix.
    pub fn is_quote(block: &str) -> bool {
        !block.is_empty() && block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Drops exactly one prefix from each line and joins the lines with no separator.
    ///
    /// Lines without a prefix are kept as they are.
    pub fn strip_prefixes(block: &str) -> String {
        block
            .lines()
            .map(|line| line.strip_prefix(Self::PREFIX).unwrap_or(line))
            .collect()
    }
}
