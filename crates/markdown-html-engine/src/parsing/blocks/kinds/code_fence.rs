/// Fenced code block type with owned delimiter constant.
///
/// A code block is a raw zone: its body is emitted verbatim with no inline
/// tokenizing.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// True if the block starts and ends with a fence.
    ///
    /// The two fences may share backticks, so a lone "```" is an empty code block.
    pub fn is_fenced(block: &str) -> bool {
        block.starts_with(Self::BACKTICKS) && block.ends_with(Self::BACKTICKS)
    }

    /// The text between the fences, minus the newline that ends the opening fence.
    ///
    /// Empty when the fences overlap.
    pub fn body(block: &str) -> &str {
        let inner = block
            .strip_prefix(Self::BACKTICKS)
            .and_then(|rest| rest.strip_suffix(Self::BACKTICKS))
            .unwrap_or_default();
        inner.strip_prefix('\n').unwrap_or(inner)
    }
}
