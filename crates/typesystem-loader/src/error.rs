//! Errors raised while loading typesystem documents.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to load one typesystem document.
///
/// A missing file is normally reported as a warning and turned into an
/// unsuccessful load; callers only see [`LoadError::NotFound`] when they
/// read a document directly.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("can't find '{path}', typesystem paths: {}", format_paths(search_paths))]
    NotFound {
        path: PathBuf,
        search_paths: Vec<PathBuf>,
    },

    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not valid TOML or does not fit the schema.
    #[error("failed to parse '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    /// The document parsed but describes something the registry cannot hold.
    #[error("invalid typesystem '{path}': {message}")]
    Document { path: PathBuf, message: String },
}

impl LoadError {
    /// The document the error is about.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path, .. }
            | LoadError::Io { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Document { path, .. } => path.as_path(),
        }
    }
}

pub(crate) fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_search_paths() {
        let err = LoadError::NotFound {
            path: "core.toml".into(),
            search_paths: vec!["/a".into(), "/b".into()],
        };
        assert_eq!(
            err.to_string(),
            "can't find 'core.toml', typesystem paths: /a, /b"
        );
        assert_eq!(err.path(), Path::new("core.toml"));
    }

    #[test]
    fn document_error_display() {
        let err = LoadError::Document {
            path: "gui.toml".into(),
            message: "unknown container kind 'tree'".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid typesystem 'gui.toml': unknown container kind 'tree'"
        );
    }
}
