use crate::parsing::ParseError;

/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character, repeated once per level.
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `block` opens with 1-6 markers and a space.
    ///
    /// Only the prefix is inspected; the rest of the block may span lines.
    pub fn level(block: &str) -> Option<u8> {
        let hashes = block.len() - block.trim_start_matches(Self::MARKER).len();
        if (1..=Self::MAX_LEVEL).contains(&hashes) && block[hashes..].starts_with(' ') {
            u8::try_from(hashes).ok()
        } else {
            None
        }
    }

    /// Splits a heading block into its level and the text after the marker.
    ///
    /// # Errors
    /// [`ParseError::MalformedHeading`] if there is no space after the
    /// marker run, or the run is not 1-6 markers long.
    pub fn split(block: &str) -> Result<(u8, &str), ParseError> {
        let malformed = || ParseError::MalformedHeading {
            line: block.lines().next().unwrap_or_default().to_string(),
        };

        let (marker, text) = block.split_once(' ').ok_or_else(malformed)?;
        if marker.is_empty()
            || marker.len() > Self::MAX_LEVEL
            || !marker.chars().all(|c| c == Self::MARKER)
        {
            return Err(malformed());
        }

        let level = u8::try_from(marker.len()).map_err(|_| malformed())?;
        Ok((level, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Heading", Some(1))]
    #[case("###### Heading level 6", Some(6))]
    #[case("### multi\nline", Some(3))]
    #[case("####### seven", None)]
    #[case("#No space after hash", None)]
    #[case("Not # a heading", None)]
    #[case("#", None)]
    fn detects_level(#[case] block: &str, #[case] expected: Option<u8>) {
        assert_eq!(Heading::level(block), expected);
    }

    #[test]
    fn split_returns_level_and_text() {
        assert_eq!(Heading::split("### Smaller _heading_"), Ok((3, "Smaller _heading_")));
    }

    #[test]
    fn split_keeps_extra_spaces_in_text() {
        assert_eq!(Heading::split("#  spaced"), Ok((1, " spaced")));
    }

    #[test]
    fn split_without_space_is_malformed() {
        assert_eq!(
            Heading::split("##Nope"),
            Err(ParseError::MalformedHeading {
                line: "##Nope".to_string()
            })
        );
    }

    #[test]
    fn split_rejects_non_marker_prefix() {
        assert!(Heading::split("Title here").is_err());
        assert!(Heading::split("####### too deep").is_err());
    }
}
