//! Input options for counting and analysis.
//!
//! This module contains the configuration types that control which lines
//! count, which entries are visited, and how directory results are grouped.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::error::ColinError;
use crate::filter::{
    BracketLineFilter, CommentFilter, CompositeFilter, EmptyLineFilter, MultiLineCommentFilter,
    SingleLineCommentFilter,
};
use crate::Result;

/// How results for a directory are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchMode {
    /// One result per immediate child; a child directory's result covers
    /// everything beneath it
    Aggregate,
    /// One result per file anywhere below the directory, no directory subtotals
    #[default]
    Flat,
}

/// A single kind of line filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    /// Blank and whitespace-only lines
    Empty,
    /// Lines holding only `{` or `}`
    Brackets,
    /// Lines starting with `//` or `#`
    SingleLineComments,
    /// Lines entirely inside `/* ... */`
    MultiLineComments,
    /// Both comment kinds
    Comments,
}

impl FilterKind {
    /// Every kind, in the order they are listed in help text.
    pub const ALL: [FilterKind; 5] = [
        FilterKind::Empty,
        FilterKind::Brackets,
        FilterKind::SingleLineComments,
        FilterKind::MultiLineComments,
        FilterKind::Comments,
    ];

    /// The name accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Empty => "empty",
            FilterKind::Brackets => "brackets",
            FilterKind::SingleLineComments => "line-comments",
            FilterKind::MultiLineComments => "block-comments",
            FilterKind::Comments => "comments",
        }
    }

    fn push_onto(self, composite: &mut CompositeFilter) {
        match self {
            FilterKind::Empty => composite.push(EmptyLineFilter),
            FilterKind::Brackets => composite.push(BracketLineFilter),
            FilterKind::SingleLineComments => composite.push(SingleLineCommentFilter),
            FilterKind::MultiLineComments => composite.push(MultiLineCommentFilter::new()),
            FilterKind::Comments => composite.push(CommentFilter::new()),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = ColinError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ColinError::InvalidArgument(format!("unknown filter '{s}'")))
    }
}

/// Which filters make up the composite applied to each file.
///
/// A `FilterSet` is plain configuration. Every file gets its own
/// [`CompositeFilter`] built from it, so block comment state never carries
/// over from one file to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    kinds: Vec<FilterKind>,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl FilterSet {
    /// Empty lines, lone braces and comments (default)
    pub fn standard() -> Self {
        Self {
            kinds: vec![
                FilterKind::Empty,
                FilterKind::Brackets,
                FilterKind::Comments,
            ],
        }
    }

    /// No filters: every line counts
    pub fn none() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Builder: add a filter kind.
    pub fn with(mut self, kind: FilterKind) -> Self {
        self.add(kind);
        self
    }

    /// Builder: drop every occurrence of a filter kind.
    pub fn without(mut self, kind: FilterKind) -> Self {
        self.remove(kind);
        self
    }

    /// Add a filter kind. Kinds already present are not added twice.
    pub fn add(&mut self, kind: FilterKind) {
        if !self.contains(kind) {
            self.kinds.push(kind);
        }
    }

    /// Remove a filter kind, returning whether it was present.
    pub fn remove(&mut self, kind: FilterKind) -> bool {
        let before = self.kinds.len();
        self.kinds.retain(|k| *k != kind);
        self.kinds.len() != before
    }

    /// Whether a filter kind is in the set.
    pub fn contains(&self, kind: FilterKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Filter kinds in the order they are applied.
    pub fn kinds(&self) -> &[FilterKind] {
        &self.kinds
    }

    /// Whether the set passes every line.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Build a fresh composite filter with no carried state.
    pub fn build(&self) -> CompositeFilter {
        let mut composite = CompositeFilter::new();
        for kind in &self.kinds {
            kind.push_onto(&mut composite);
        }
        composite
    }

    /// Parse a comma-separated list such as `empty,comments`.
    ///
    /// `none` (or an empty string) yields a set with no filters.
    pub fn parse_list(list: &str) -> Result<Self> {
        let list = list.trim();
        if list.is_empty() || list.eq_ignore_ascii_case("none") {
            return Ok(Self::none());
        }

        let mut set = Self::none();
        for name in list.split(',') {
            set.add(name.parse()?);
        }
        Ok(set)
    }
}

/// Configuration for which directory entries are visited.
///
/// The path handed to a counter is always visited; these rules apply to
/// the entries found beneath it.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
    /// Skip entries whose name starts with `.`
    pub skip_hidden: bool,
}

impl EntryFilter {
    /// Create a filter that visits every entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| ColinError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude.push(pat);
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Builder: skip hidden files and directories.
    pub fn skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }

    /// Check whether an entry below the root should be visited.
    ///
    /// Patterns are matched against the full path and against the entry's
    /// file name, so both `**/target/**` and `*.lock` work.
    pub fn allows(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        if self.skip_hidden && name.starts_with('.') {
            return false;
        }

        let path_str = path.to_string_lossy();
        !self
            .exclude
            .iter()
            .any(|pattern| pattern.matches(&path_str) || pattern.matches(&name))
    }
}
