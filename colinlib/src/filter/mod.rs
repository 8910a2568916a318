//! Line filters: decide which lines count.
//!
//! Every filter answers one question for a single line: does it carry
//! material that should be counted? Filters compose through
//! [`CompositeFilter`], where a line passes only if every member passes.
//!
//! - [`EmptyLineFilter`]: blank or whitespace-only lines
//! - [`BracketLineFilter`]: a lone `{` or `}`
//! - [`SingleLineCommentFilter`]: lines starting with `//` or `#`
//! - [`MultiLineCommentFilter`]: lines fully inside `/* ... */`
//! - [`CommentFilter`]: both comment filters together
//!
//! ## Example
//!
//! ```rust
//! use colinlib::filter::{CompositeFilter, EmptyLineFilter, LineFilter, MultiLineCommentFilter};
//!
//! let mut filter = CompositeFilter::new()
//!     .with(EmptyLineFilter)
//!     .with(MultiLineCommentFilter::new());
//!
//! assert!(!filter.is_passed_by("/* start"));
//! assert!(!filter.is_passed_by(""));
//! assert!(!filter.is_passed_by("end */"));
//! assert!(filter.is_passed_by("let x = 1;"));
//! ```

pub mod block_comment;
pub mod simple;

pub use block_comment::{CommentFilter, MultiLineCommentFilter};
pub use simple::{BracketLineFilter, EmptyLineFilter, SingleLineCommentFilter};

/// A predicate over one line of text.
///
/// Filters may keep state between calls (see [`MultiLineCommentFilter`]), so
/// they must be fed every line of a file, in order, and must not be shared
/// between files.
pub trait LineFilter {
    /// Returns `true` if the line should be counted, `false` if it is filtered out.
    fn is_passed_by(&mut self, line: &str) -> bool;

    /// Forget any state carried over from previous lines.
    fn reset(&mut self) {}
}

impl<F: LineFilter + ?Sized> LineFilter for Box<F> {
    fn is_passed_by(&mut self, line: &str) -> bool {
        (**self).is_passed_by(line)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

/// An ordered collection of filters applied together.
///
/// The line is trimmed once and handed to every member. All members see
/// every line, even after one of them has already rejected it, so stateful
/// filters stay in sync with the file.
#[derive(Default)]
pub struct CompositeFilter {
    filters: Vec<Box<dyn LineFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite, which passes every line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty lines, lone braces and comments are filtered out.
    pub fn standard() -> Self {
        Self::new()
            .with(EmptyLineFilter)
            .with(BracketLineFilter)
            .with(CommentFilter::new())
    }

    /// Builder: append a filter.
    pub fn with(mut self, filter: impl LineFilter + 'static) -> Self {
        self.push(filter);
        self
    }

    /// Append a filter.
    pub fn push(&mut self, filter: impl LineFilter + 'static) {
        self.filters.push(Box::new(filter));
    }

    /// Remove every filter.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Number of member filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the composite has no members.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl LineFilter for CompositeFilter {
    fn is_passed_by(&mut self, line: &str) -> bool {
        let line = line.trim();
        let mut passed = true;
        for filter in &mut self.filters {
            if !filter.is_passed_by(line) {
                passed = false;
            }
        }
        passed
    }

    fn reset(&mut self) {
        for filter in &mut self.filters {
            filter.reset();
        }
    }
}

impl std::fmt::Debug for CompositeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeFilter")
            .field("filters", &self.filters.len())
            .finish()
    }
}
