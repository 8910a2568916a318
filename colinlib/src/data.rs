//! Result types for counting and analysis

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Line count for one entry of a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryCount {
    /// File or directory the count belongs to
    pub path: PathBuf,
    /// Lines that passed every filter
    pub lines: u64,
}

impl EntryCount {
    /// Pair an entry with its count.
    pub fn new(path: impl Into<PathBuf>, lines: u64) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }
}

/// Every line of a file or directory, split by filter verdict.
///
/// For a file, `unfiltered_lines` and `filtered_lines` partition
/// `all_lines` with their relative order preserved.
///
/// A directory's `LineData` concatenates the `all_lines` and
/// `unfiltered_lines` of its files in traversal order. Rejected lines are
/// not carried up, so a directory's `filtered_lines` stays empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineData {
    /// The file or directory the lines came from
    pub entry_name: PathBuf,
    /// All lines, in order
    pub all_lines: Vec<String>,
    /// Lines that passed the filters
    pub unfiltered_lines: Vec<String>,
    /// Lines that were filtered out
    pub filtered_lines: Vec<String>,
}

impl LineData {
    /// Create an empty record for an entry.
    pub fn new(entry_name: impl Into<PathBuf>) -> Self {
        Self {
            entry_name: entry_name.into(),
            ..Self::default()
        }
    }

    /// Record a line along with its verdict.
    pub fn push(&mut self, line: String, passed: bool) {
        self.all_lines.push(line.clone());
        if passed {
            self.unfiltered_lines.push(line);
        } else {
            self.filtered_lines.push(line);
        }
    }

    /// Fold a child entry's lines into this one.
    ///
    /// Only `all_lines` and `unfiltered_lines` are merged.
    pub fn absorb(&mut self, child: LineData) {
        self.all_lines.extend(child.all_lines);
        self.unfiltered_lines.extend(child.unfiltered_lines);
    }

    /// Each of `all_lines` paired with whether it passed the filters.
    ///
    /// `unfiltered_lines` is an ordered subsequence of `all_lines` for files
    /// and directories alike, so the verdicts are recovered by walking both.
    /// Identical lines with different verdicts are matched first come, first
    /// served.
    pub fn verdicts(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        let mut passed = self.unfiltered_lines.iter().peekable();
        self.all_lines.iter().map(move |line| {
            let is_passed = passed.next_if(|p| *p == line).is_some();
            (line.as_str(), is_passed)
        })
    }

    /// Number of lines that passed the filters.
    pub fn passed(&self) -> u64 {
        self.unfiltered_lines.len() as u64
    }

    /// Number of lines read.
    pub fn total(&self) -> u64 {
        self.all_lines.len() as u64
    }
}
