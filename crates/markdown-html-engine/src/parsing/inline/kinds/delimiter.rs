use crate::parsing::inline::types::FragmentKind;

/// A paired inline marker. The text between an opening and closing marker
/// becomes a fragment of [`Delimiter::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    /// Passes run in this order; earlier delimiters claim their text first.
    pub const PRECEDENCE: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Italic, Delimiter::Code];

    pub const fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "_",
            Delimiter::Code => "`",
        }
    }

    pub const fn kind(self) -> FragmentKind {
        match self {
            Delimiter::Bold => FragmentKind::Bold,
            Delimiter::Italic => FragmentKind::Italic,
            Delimiter::Code => FragmentKind::Code,
        }
    }

    /// Surrounds `content` with this delimiter's marker.
    pub fn wrap(self, content: &str) -> String {
        let marker = self.marker();
        format!("{marker}{content}{marker}")
    }
}
