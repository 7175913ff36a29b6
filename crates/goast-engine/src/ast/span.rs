//! Source positions.

use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` position range.
///
/// Positions are byte offsets shifted by the owning file's base (see
/// [`crate::parsers::FileSet`]), so they stay ordered across every file of a
/// package. Position 0 means "no position".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Span from the start of `first` to the end of `last`.
    pub fn cover(first: Span, last: Span) -> Self {
        Self::new(first.start, last.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_spans_first_to_last() {
        let span = Span::cover(Span::new(3, 5), Span::new(9, 12));
        assert_eq!(span, Span::new(3, 12));
    }

    #[test]
    fn test_default_is_no_position() {
        assert_eq!(Span::default(), Span::new(0, 0));
    }
}
