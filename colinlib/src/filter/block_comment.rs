//! Block comment tracking.
//!
//! A block comment opens with `/*` and closes with `*/`. It may start and end
//! on the same line, span any number of lines, or open and close several
//! times on one line. [`MultiLineCommentFilter`] carries the "inside a
//! comment" flag from one line to the next, so a fresh instance is needed
//! for every file.
//!
//! Markers are matched literally: a `/*` inside a string literal still opens
//! a comment, and nested comments are not recognised.

use super::simple::SingleLineCommentFilter;
use super::LineFilter;

const COMMENT_OPEN: [char; 2] = ['/', '*'];
const COMMENT_CLOSE: [char; 2] = ['*', '/'];
const MARKER_LEN: usize = 2;

/// Filters out lines with no text outside of block comments.
///
/// The scan slides a two-character window over the line. Outside a comment
/// an opening marker switches into comment mode; inside one, a closing marker
/// switches back. After a marker the window skips past both of its
/// characters. Any other non-whitespace character seen outside a comment
/// makes the line pass.
///
/// The window never starts on the last character, so a trailing character
/// only matters as the second half of a marker. Lines shorter than a marker
/// pass when they are outside a comment and hold no whitespace; an empty
/// line passes only outside a comment.
#[derive(Debug, Clone, Default)]
pub struct MultiLineCommentFilter {
    inside_comment: bool,
}

impl MultiLineCommentFilter {
    /// Create a filter positioned outside any comment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the previous line left a block comment open.
    pub fn is_inside_comment(&self) -> bool {
        self.inside_comment
    }

    fn opens_or_closes(&self, window: [char; 2]) -> bool {
        if self.inside_comment {
            window == COMMENT_CLOSE
        } else {
            window == COMMENT_OPEN
        }
    }
}

impl LineFilter for MultiLineCommentFilter {
    fn is_passed_by(&mut self, line: &str) -> bool {
        let chars: Vec<char> = line.chars().collect();

        if chars.len() < MARKER_LEN {
            return !self.inside_comment && chars.first().is_none_or(|c| !c.is_whitespace());
        }

        let mut has_live_text = false;
        let mut i = 0;
        while i + 1 < chars.len() {
            if self.opens_or_closes([chars[i], chars[i + 1]]) {
                self.inside_comment = !self.inside_comment;
                i += MARKER_LEN;
                continue;
            }
            if !self.inside_comment && !chars[i].is_whitespace() {
                has_live_text = true;
            }
            i += 1;
        }

        has_live_text
    }

    fn reset(&mut self) {
        self.inside_comment = false;
    }
}

/// Filters out single-line and block comments.
#[derive(Debug, Clone, Default)]
pub struct CommentFilter {
    single_line: SingleLineCommentFilter,
    multi_line: MultiLineCommentFilter,
}

impl CommentFilter {
    /// Comment filter outside any block comment.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineFilter for CommentFilter {
    fn is_passed_by(&mut self, line: &str) -> bool {
        // Block state must advance even when a line comment rejects the line.
        let outside_block = self.multi_line.is_passed_by(line);
        outside_block && self.single_line.is_passed_by(line)
    }

    fn reset(&mut self) {
        self.multi_line.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdicts(lines: &[&str]) -> Vec<bool> {
        let mut filter = MultiLineCommentFilter::new();
        lines.iter().map(|line| filter.is_passed_by(line)).collect()
    }

    #[test]
    fn test_open_and_close_on_separate_lines() {
        assert_eq!(verdicts(&["/*", "*/"]), vec![false, false]);
    }

    #[test]
    fn test_comment_text_on_open_and_close_lines() {
        assert_eq!(
            verdicts(&["/*comment", "second line*/"]),
            vec![false, false]
        );
        assert_eq!(
            verdicts(&["/*comment", "second line", "*/"]),
            vec![false, false, false]
        );
    }

    #[test]
    fn test_back_to_back_comments() {
        assert_eq!(
            verdicts(&["/*", "comment*//*another one ", "* */"]),
            vec![false, false, false]
        );
        assert_eq!(
            verdicts(&["/*", "comment*/ /*another one ", "* */"]),
            vec![false, false, false]
        );
    }

    #[test]
    fn test_code_before_comment() {
        assert_eq!(
            verdicts(&["not a comment /*comment on the same line*/"]),
            vec![true]
        );
    }

    #[test]
    fn test_code_after_comment() {
        assert_eq!(verdicts(&["/*comment*/ not a comment"]), vec![true]);
    }

    #[test]
    fn test_code_between_comments() {
        assert_eq!(
            verdicts(&["/*", "comment*/ not a comment /*comment on the same line*/"]),
            vec![false, true]
        );
        assert_eq!(
            verdicts(&["/*comment*/ not a comment/*", "*/"]),
            vec![true, false]
        );
        assert_eq!(
            verdicts(&["/*comment*/ not a comment /*comment", " on another line", "*/"]),
            vec![true, false, false]
        );
    }

    #[test]
    fn test_embedded_newlines_are_whitespace() {
        let mut filter = MultiLineCommentFilter::new();

        assert!(!filter.is_passed_by("/*\n*/"));
        assert!(!filter.is_passed_by("/*comment\nsecond line\n*/"));
        assert!(filter.is_passed_by("/*comment*/ not a comment/*\ncomment on another line*/"));
    }

    #[test]
    fn test_blank_line_inside_comment_is_suppressed() {
        assert_eq!(verdicts(&["/*", "", "*/", ""]), vec![false, false, false, true]);
    }

    #[test]
    fn test_short_lines() {
        assert_eq!(verdicts(&["x", " ", ""]), vec![true, false, true]);
        assert_eq!(verdicts(&["/*", "x", "*/", "x"]), vec![false, false, false, true]);
    }

    #[test]
    fn test_last_character_only_counts_as_marker_half() {
        // The window never starts on the final character.
        assert_eq!(verdicts(&["/*a*/b"]), vec![false]);
        assert_eq!(verdicts(&["/*a*/bc"]), vec![true]);
    }

    #[test]
    fn test_unmatched_close_is_plain_text() {
        let mut filter = MultiLineCommentFilter::new();

        assert!(filter.is_passed_by("*/ stray"));
        assert!(!filter.is_inside_comment());
    }

    #[test]
    fn test_nested_open_is_not_special() {
        assert_eq!(
            verdicts(&["/* outer /* inner */", "after"]),
            vec![false, true]
        );
    }

    #[test]
    fn test_overlapping_markers_are_consumed_once() {
        // "/*/" opens on the first two characters; the trailing '/' cannot
        // pair with the '*' already consumed.
        let mut filter = MultiLineCommentFilter::new();

        assert!(!filter.is_passed_by("/*/"));
        assert!(filter.is_inside_comment());
    }

    #[test]
    fn test_markers_inside_strings_are_matched() {
        let mut filter = MultiLineCommentFilter::new();

        assert!(filter.is_passed_by("let glob = \"src/*\";"));
        assert!(filter.is_inside_comment());
        assert!(!filter.is_passed_by("let next = 1;"));
    }

    #[test]
    fn test_unicode_text() {
        assert_eq!(verdicts(&["/* коммент */ код", "é"]), vec![true, true]);
    }

    #[test]
    fn test_reset() {
        let mut filter = MultiLineCommentFilter::new();
        filter.is_passed_by("/* open");
        assert!(filter.is_inside_comment());

        filter.reset();

        assert!(!filter.is_inside_comment());
        assert!(filter.is_passed_by("code"));
    }

    #[test]
    fn test_comment_filter_combines_both_kinds() {
        let mut filter = CommentFilter::new();

        assert!(!filter.is_passed_by("// line"));
        assert!(!filter.is_passed_by("/* block */"));
        assert!(filter.is_passed_by("code();"));
    }

    #[test]
    fn test_comment_filter_tracks_block_behind_line_comment() {
        let mut filter = CommentFilter::new();

        assert!(!filter.is_passed_by("// /* opens a block anyway"));
        assert!(!filter.is_passed_by("code inside the block"));
        assert!(!filter.is_passed_by("*/"));
        assert!(filter.is_passed_by("code();"));
    }
}
