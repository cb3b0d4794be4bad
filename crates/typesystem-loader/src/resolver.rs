//! Typesystem search path.

use std::path::{Path, PathBuf};

/// Separator between entries of a search path string.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: char = ';';

/// Separator between entries of a search path string.
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: char = ':';

/// Ordered list of directories searched for typesystem documents.
#[derive(Debug, Default, Clone)]
pub struct PathResolver {
    search_paths: Vec<PathBuf>,
}

impl PathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        self.search_paths.push(path.into());
    }

    /// Add every directory in a [`PATH_LIST_SEPARATOR`]-separated list.
    /// Empty entries are skipped.
    pub fn add_search_paths(&mut self, paths: &str) {
        self.search_paths.extend(
            paths
                .split(PATH_LIST_SEPARATOR)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        );
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Find the document `requested` refers to.
    ///
    /// Returns `requested` itself if it exists. Otherwise each search
    /// directory is tried in order with the requested file name, and the
    /// first existing candidate is returned. If nothing exists the request
    /// comes back unchanged.
    pub fn resolve(&self, requested: &Path) -> PathBuf {
        if requested.exists() {
            return requested.to_path_buf();
        }

        if let Some(file_name) = requested.file_name() {
            for dir in &self.search_paths {
                let candidate = dir.join(file_name);
                if candidate.exists() {
                    tracing::trace!(
                        requested = %requested.display(),
                        resolved = %candidate.display(),
                        "resolved typesystem through search path"
                    );
                    return candidate;
                }
            }
        }

        requested.to_path_buf()
    }
}
