//! # colinlib
//!
//! Counts the meaningful lines of source files and directory trees.
//!
//! ## Overview
//!
//! A line is meaningful when it survives every configured filter. The
//! standard set rejects:
//!
//! - **Blank** lines (empty or whitespace only)
//! - **Brace** lines holding nothing but `{` or `}`
//! - **Line comments** starting with `//` or `#`
//! - **Block comments**: lines with no text outside `/* ... */`, however the
//!   markers are spread across lines
//!
//! Markers are matched literally. There is no tokenizer, so a `/*` inside a
//! string literal opens a comment too, and block comments do not nest.
//!
//! ## Directories
//!
//! Directories are walked depth first in file name order. Results for a
//! directory come in two shapes ([`SearchMode`]):
//!
//! - **Aggregate**: one result per immediate child, a child directory's
//!   result covering everything beneath it
//! - **Flat**: one result per file anywhere in the tree
//!
//! Every file is run through its own filter instance, so an unterminated
//! block comment never spills into the next file.
//!
//! ## Example
//!
//! ```rust
//! use colinlib::{LineCounter, LineDataAnalyzer, SearchMode};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("src")).unwrap();
//! fs::write(
//!     dir.path().join("src/main.rs"),
//!     "// entry\nfn main() {\n    run(); /* later */\n}\n",
//! )
//! .unwrap();
//!
//! let counter = LineCounter::new();
//! assert_eq!(counter.apply_to(dir.path()).unwrap(), 2);
//!
//! let per_entry: Vec<_> = counter
//!     .apply_to_directory(dir.path(), SearchMode::Aggregate)
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(per_entry.len(), 1);
//! assert_eq!(per_entry[0].lines, 2);
//!
//! let data = LineDataAnalyzer::new().apply_to(dir.path().join("src/main.rs")).unwrap();
//! assert_eq!(data.filtered_lines, vec!["// entry", "}"]);
//! ```

pub mod analyzer;
pub mod counter;
pub mod data;
pub mod error;
pub mod filter;
pub mod options;
pub mod reader;
pub mod walk;

pub use analyzer::LineDataAnalyzer;
pub use counter::LineCounter;
pub use data::{EntryCount, LineData};
pub use error::ColinError;
pub use filter::{CompositeFilter, LineFilter};
pub use options::{EntryFilter, FilterKind, FilterSet, SearchMode};
pub use reader::LineReader;

/// Result type for colinlib operations
pub type Result<T> = std::result::Result<T, ColinError>;
