//! Directory traversal.
//!
//! Entries are visited depth first and sorted by file name, so repeated
//! walks over an unchanged tree produce the same order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ColinError;
use crate::options::{EntryFilter, SearchMode};
use crate::Result;

/// Check that `path` is an existing directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else if path.is_file() {
        Err(ColinError::NotADirectory(path.to_path_buf()))
    } else {
        Err(ColinError::DirectoryNotFound(path.to_path_buf()))
    }
}

/// Lazily list the entries of `root` that get their own result.
///
/// - [`SearchMode::Aggregate`]: the immediate children, files and
///   directories alike
/// - [`SearchMode::Flat`]: every file in the subtree; directories are
///   descended into but never yielded
///
/// The caller is expected to have checked `root` with [`ensure_directory`].
pub fn entries(
    root: &Path,
    mode: SearchMode,
    filter: &EntryFilter,
) -> impl Iterator<Item = Result<PathBuf>> {
    let flatten = mode == SearchMode::Flat;
    let max_depth = if flatten { usize::MAX } else { 1 };
    let filter = filter.clone();
    let root_path = root.to_path_buf();

    WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| filter.allows(entry.path()))
        .filter_map(move |entry| match entry {
            Ok(entry) if flatten && entry.file_type().is_dir() => None,
            Ok(entry) => {
                tracing::trace!(path = %entry.path().display(), "visiting entry");
                Some(Ok(entry.into_path()))
            }
            Err(err) => Some(Err(ColinError::Walk {
                path: err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root_path.clone()),
                source: err,
            })),
        })
}
