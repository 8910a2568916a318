//! Line classification over files and directory trees.
//!
//! [`LineDataAnalyzer`] walks the same way as
//! [`LineCounter`](crate::LineCounter) but keeps every line together with its
//! verdict, which is what callers need to explain a count.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::data::LineData;
use crate::error::ColinError;
use crate::filter::LineFilter;
use crate::options::{EntryFilter, FilterSet, SearchMode};
use crate::reader::LineReader;
use crate::walk::{ensure_directory, entries};
use crate::Result;

/// Classifies the lines of files against a set of filters.
#[derive(Debug, Clone, Default)]
pub struct LineDataAnalyzer {
    filters: FilterSet,
    entries: EntryFilter,
}

impl LineDataAnalyzer {
    /// Analyzer using the standard filters (blanks, lone braces, comments).
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

    /// Classify the lines of a file, or of every file under a directory.
    ///
    /// A directory's record is named after the directory and merges its
    /// files' `all_lines` and `unfiltered_lines` in traversal order.
    pub fn apply_to(&self, path: impl AsRef<Path>) -> Result<LineData> {
        let path = path.as_ref();

        if path.is_file() {
            self.apply_to_file(path)
        } else if path.is_dir() {
            self.apply_to_directory(path, SearchMode::Flat)?
                .try_fold(LineData::new(path), |mut aggregated, entry| {
                    aggregated.absorb(entry?);
                    Ok(aggregated)
                })
        } else {
            Err(ColinError::NotFound(path.to_path_buf()))
        }
    }

    /// Classify the lines of each entry in a directory.
    ///
    /// Results are produced lazily in traversal order. The directory itself
    /// is checked before anything is yielded.
    pub fn apply_to_directory(
        &self,
        path: impl AsRef<Path>,
        mode: SearchMode,
    ) -> Result<impl Iterator<Item = Result<LineData>> + '_> {
        let path = path.as_ref();
        ensure_directory(path)?;

        Ok(entries(path, mode, &self.entries)
            .map(move |entry| entry.and_then(|entry: PathBuf| self.apply_to(entry))))
    }

    /// Classify the lines of any buffered reader.
    pub fn apply_to_reader(
        &self,
        entry_name: impl Into<PathBuf>,
        reader: impl BufRead,
    ) -> std::io::Result<LineData> {
        self.classify_lines(LineData::new(entry_name), LineReader::new(reader))
    }

    fn apply_to_file(&self, path: &Path) -> Result<LineData> {
        let data = self
            .classify_lines(LineData::new(path), LineReader::open(path)?)
            .map_err(|e| ColinError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!(
            path = %path.display(),
            passed = data.passed(),
            rejected = data.filtered_lines.len(),
            "analyzed file"
        );
        Ok(data)
    }

    fn classify_lines<R: BufRead>(
        &self,
        mut data: LineData,
        lines: LineReader<R>,
    ) -> std::io::Result<LineData> {
        let mut filter = self.filters.build();
        for line in lines {
            let line = line?;
            let passed = filter.is_passed_by(&line);
            data.push(line, passed);
        }
        Ok(data)
    }
}
