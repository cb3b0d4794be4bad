//! Typesystem loading.
//!
//! [`TypesystemLoader`] resolves document names through its
//! [`PathResolver`], parses each resolved file at most once, and feeds the
//! result into a [`TypeDatabase`]. Dependencies listed under `load` are
//! parsed before the document that names them.
//!
//! Outcomes are memoised by the canonical form of the resolved path, so two
//! spellings of one file share an entry:
//!
//! | Outcome | Returned | Memoised |
//! |---|---|---|
//! | parsed | `Ok(true)` | `true` |
//! | file missing | `Ok(false)` plus a warning | `false` |
//! | unreadable, malformed, or invalid | `Err(..)` | `false` |
//! | already seen | the memoised value | unchanged |

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use typesystem_core::{Diagnostic, ReportHandler};
use typesystem_registry::TypeDatabase;

use crate::document::TypesystemDocument;
use crate::error::{LoadError, Result, format_paths};
use crate::handler::DocumentHandler;
use crate::resolver::PathResolver;

/// Document loaded when no name is given.
pub const DEFAULT_TYPESYSTEM_FILE: &str = "typesystem.toml";

/// Parse-once loader for typesystem documents.
#[derive(Debug, Default, Clone)]
pub struct TypesystemLoader {
    resolver: PathResolver,
    parsed: FxHashMap<PathBuf, bool>,
}

impl TypesystemLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a separator-delimited list of search directories.
    pub fn add_typesystem_path(&mut self, paths: &str) {
        self.resolver.add_search_paths(paths);
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut PathResolver {
        &mut self.resolver
    }

    /// Memoised outcome for `path`, if it was requested before.
    pub fn parsed_outcome(&self, path: impl AsRef<Path>) -> Option<bool> {
        let resolved = self.resolver.resolve(path.as_ref());
        self.parsed.get(&memo_key(&resolved)).copied()
    }

    /// Number of distinct documents requested so far.
    pub fn parsed_count(&self) -> usize {
        self.parsed.len()
    }

    /// Load the document at `path` into `db`.
    ///
    /// With `generate` false every entity of the document (and of its
    /// dependencies) is registered hidden. A missing file is reported to
    /// `reporter` unless a suppression pattern in `db` matches the message.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn parse_file(
        &mut self,
        db: &mut TypeDatabase,
        path: impl AsRef<Path>,
        generate: bool,
        reporter: &mut dyn ReportHandler,
    ) -> Result<bool> {
        let requested = path.as_ref();
        let resolved = self.resolver.resolve(requested);
        let key = memo_key(&resolved);
        if let Some(&outcome) = self.parsed.get(&key) {
            return Ok(outcome);
        }

        let source = match self.read(requested, &resolved) {
            Ok(source) => source,
            Err(err @ LoadError::NotFound { .. }) => {
                self.parsed.insert(key, false);
                let message = err.to_string();
                if db.rules().is_suppressed_warning(&message) {
                    tracing::trace!(%message, "suppressed warning");
                } else {
                    reporter.report(
                        Diagnostic::warning(message).with_source(requested.display().to_string()),
                    );
                }
                return Ok(false);
            }
            Err(err) => {
                self.parsed.insert(key, false);
                return Err(err);
            }
        };

        // A document that is being loaded counts as loaded, so cyclic
        // `load` lists terminate.
        self.parsed.insert(key.clone(), true);

        let before = db.type_count();
        let result = self.parse_source(db, &source, &resolved, generate, reporter);
        self.parsed.insert(key, result.is_ok());
        result?;

        reporter.debug(format!(
            "Parsed: '{}', {} new entries",
            requested.display(),
            db.type_count() - before
        ));
        Ok(true)
    }

    /// Load a document given as text.
    ///
    /// `origin` names the document in errors and anchors nothing else;
    /// nested `load` entries still go through the search path. The text is
    /// not memoised.
    pub fn parse_str(
        &mut self,
        db: &mut TypeDatabase,
        source: &str,
        origin: &Path,
        generate: bool,
        reporter: &mut dyn ReportHandler,
    ) -> Result<()> {
        self.parse_source(db, source, origin, generate, reporter)
    }

    fn parse_source(
        &mut self,
        db: &mut TypeDatabase,
        source: &str,
        origin: &Path,
        generate: bool,
        reporter: &mut dyn ReportHandler,
    ) -> Result<()> {
        let document = TypesystemDocument::from_toml(source).map_err(|e| LoadError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

        for dependency in &document.load {
            let name = self.dependency_path(origin, dependency.name());
            let loaded =
                self.parse_file(db, &name, generate && dependency.generate(), reporter)?;
            if !loaded {
                return Err(LoadError::Document {
                    path: origin.to_path_buf(),
                    message: format!("failed to load '{}'", dependency.name()),
                });
            }
        }

        DocumentHandler::new(db, origin, generate).apply(&document)
    }

    /// Dependencies are looked up next to the document first, then through
    /// the search path.
    fn dependency_path(&self, origin: &Path, name: &str) -> PathBuf {
        let sibling = origin
            .parent()
            .map(|dir| dir.join(name))
            .filter(|candidate| candidate.exists());
        sibling.unwrap_or_else(|| PathBuf::from(name))
    }

    fn read(&self, requested: &Path, resolved: &Path) -> Result<String> {
        if !resolved.exists() {
            return Err(LoadError::NotFound {
                path: requested.to_path_buf(),
                search_paths: self.resolver.search_paths().to_vec(),
            });
        }
        fs::read_to_string(resolved).map_err(|source| LoadError::Io {
            path: resolved.to_path_buf(),
            source,
        })
    }
}

/// Existing files are keyed by their canonical path; anything else by the
/// resolved path as given.
fn memo_key(resolved: &Path) -> PathBuf {
    fs::canonicalize(resolved).unwrap_or_else(|_| resolved.to_path_buf())
}

impl std::fmt::Display for TypesystemLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} documents, typesystem paths: {}",
            self.parsed.len(),
            format_paths(self.resolver.search_paths())
        )
    }
}
