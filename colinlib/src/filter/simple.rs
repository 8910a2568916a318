//! Stateless filters that judge a line on its own.

use super::LineFilter;

/// Markers that start a comment running to the end of the line.
pub const SINGLE_LINE_COMMENT_MARKERS: [&str; 2] = ["//", "#"];

/// Filters out empty and whitespace-only lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyLineFilter;

impl LineFilter for EmptyLineFilter {
    fn is_passed_by(&mut self, line: &str) -> bool {
        !line.trim().is_empty()
    }
}

/// Filters out lines holding nothing but a single `{` or `}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketLineFilter;

impl LineFilter for BracketLineFilter {
    fn is_passed_by(&mut self, line: &str) -> bool {
        !matches!(line.trim(), "{" | "}")
    }
}

/// Filters out lines starting with `//` or `#`.
///
/// Expects a trimmed line, which is what [`super::CompositeFilter`] hands
/// its members.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleLineCommentFilter;

impl LineFilter for SingleLineCommentFilter {
    fn is_passed_by(&mut self, line: &str) -> bool {
        !SINGLE_LINE_COMMENT_MARKERS
            .iter()
            .any(|marker| line.starts_with(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CompositeFilter;

    #[test]
    fn test_empty_lines_rejected() {
        let mut filter = CompositeFilter::new().with(EmptyLineFilter);

        for line in ["", " ", "   ", "\t", " \t  "] {
            assert!(!filter.is_passed_by(line), "{line:?} should be filtered");
        }
    }

    #[test]
    fn test_non_empty_lines_pass() {
        let mut filter = EmptyLineFilter;

        assert!(filter.is_passed_by("a"));
        assert!(filter.is_passed_by("  x  "));
        assert!(filter.is_passed_by("}"));
    }

    #[test]
    fn test_bracket_only_lines_rejected() {
        let mut filter = CompositeFilter::new().with(BracketLineFilter);

        for line in ["{", "}", "{  ", "}  ", "   }  ", "   {  "] {
            assert!(!filter.is_passed_by(line), "{line:?} should be filtered");
        }
    }

    #[test]
    fn test_bracket_with_other_content_passes() {
        let mut filter = BracketLineFilter;

        assert!(filter.is_passed_by("{}"));
        assert!(filter.is_passed_by("} else {"));
        assert!(filter.is_passed_by("};"));
        assert!(filter.is_passed_by("{{"));
        assert!(filter.is_passed_by(""));
    }

    #[test]
    fn test_single_line_comments_rejected() {
        let mut filter = CompositeFilter::new().with(SingleLineCommentFilter);

        for line in [
            "//",
            "// comment",
            "//comment",
            " //comment",
            "#",
            "# comment",
            "   # comment",
        ] {
            assert!(!filter.is_passed_by(line), "{line:?} should be filtered");
        }
    }

    #[test]
    fn test_trailing_single_line_comment_passes() {
        let mut filter = SingleLineCommentFilter;

        assert!(filter.is_passed_by("let x = 1; // one"));
        assert!(filter.is_passed_by("/ not a comment"));
        assert!(filter.is_passed_by("x # y"));
    }
}
