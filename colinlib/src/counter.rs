//! Line counting over files and directory trees.
//!
//! [`LineCounter`] runs every line of a file through a freshly built
//! [`CompositeFilter`](crate::filter::CompositeFilter) and counts the lines
//! that pass. Directories are walked depth first; see [`SearchMode`] for how
//! their results are grouped.

use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::data::EntryCount;
use crate::error::ColinError;
use crate::filter::LineFilter;
use crate::options::{EntryFilter, FilterSet, SearchMode};
use crate::reader::LineReader;
use crate::walk::{ensure_directory, entries};
use crate::Result;

/// Counts the lines of files that pass a set of filters.
#[derive(Debug, Clone, Default)]
pub struct LineCounter {
    filters: FilterSet,
    entries: EntryFilter,
}

impl LineCounter {
    /// Counter using the standard filters (blanks, lone braces, comments).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the filters applied to every file.
    pub fn filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    /// Builder: set which directory entries are visited.
    pub fn entries(mut self, entries: EntryFilter) -> Self {
        self.entries = entries;
        self
    }

    /// Count the lines of a file, or of every file under a directory.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colinlib::LineCounter;
    /// use std::fs;
    /// use tempfile::tempdir;
    ///
    /// let dir = tempdir().unwrap();
    /// let file = dir.path().join("lib.rs");
    /// fs::write(&file, "/* header */\nfn f() {\n    1\n}\n").unwrap();
    ///
    /// assert_eq!(LineCounter::new().apply_to(&file).unwrap(), 2);
    /// assert_eq!(LineCounter::new().apply_to(dir.path()).unwrap(), 2);
    /// ```
    pub fn apply_to(&self, path: impl AsRef<Path>) -> Result<u64> {
        let path = path.as_ref();

        if path.is_file() {
            self.apply_to_file(path)
        } else if path.is_dir() {
            self.apply_to_directory(path, SearchMode::Flat)?
                .map(|entry| entry.map(|e| e.lines))
                .sum()
        } else {
            Err(ColinError::NotFound(path.to_path_buf()))
        }
    }

    /// Count the lines of each entry in a directory.
    ///
    /// Results are produced lazily in traversal order. The directory itself
    /// is checked before anything is yielded.
    pub fn apply_to_directory(
        &self,
        path: impl AsRef<Path>,
        mode: SearchMode,
    ) -> Result<impl Iterator<Item = Result<EntryCount>> + '_> {
        let path = path.as_ref();
        ensure_directory(path)?;

        Ok(entries(path, mode, &self.entries).map(move |entry| {
            let entry = entry?;
            let lines = self.apply_to(&entry)?;
            Ok(EntryCount::new(entry, lines))
        }))
    }

    /// Count the lines of any buffered reader.
    pub fn apply_to_reader(&self, reader: impl BufRead) -> std::io::Result<u64> {
        self.count_lines(LineReader::new(reader))
    }

    fn apply_to_file(&self, path: &Path) -> Result<u64> {
        let count = self
            .count_lines(LineReader::open(path)?)
            .map_err(|e| ColinError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!(path = %path.display(), lines = count, "counted file");
        Ok(count)
    }

    fn count_lines<R: BufRead>(&self, lines: LineReader<R>) -> std::io::Result<u64> {
        let mut filter = self.filters.build();
        let mut count = 0;
        for line in lines {
            if filter.is_passed_by(&line?) {
                count += 1;
            }
        }
        Ok(count)
    }
}
