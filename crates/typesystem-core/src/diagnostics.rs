//! Diagnostic reporting.
//!
//! The registry and loader never print. They hand messages to a
//! [`ReportHandler`]; [`Diagnostics`] collects them for inspection and
//! [`TracingReporter`] forwards them to `tracing`.

use std::collections::VecDeque;
use std::fmt;

/// A single diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The severity level of this diagnostic
    pub kind: DiagnosticKind,
    /// The diagnostic message text
    pub message: String,
    /// The configuration file the message is about, if any
    pub source: Option<String>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Warning,
            message: message.into(),
            source: None,
        }
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Debug,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// The severity level of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Something the user should look at; subject to suppression patterns.
    Warning,
    /// Progress information, never suppressed.
    Debug,
}

/// Receiver for diagnostics emitted while loading configuration.
pub trait ReportHandler {
    fn report(&mut self, diagnostic: Diagnostic);

    fn warning(&mut self, message: String) {
        self.report(Diagnostic::warning(message));
    }

    fn debug(&mut self, message: String) {
        self.report(Diagnostic::debug(message));
    }
}

/// Collects diagnostics in arrival order.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    diagnostics: VecDeque<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push_back(diagnostic);
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::Warning)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Warning)
    }

    pub fn count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }
}

impl ReportHandler for Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.add_diagnostic(diagnostic);
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ReportHandler for TracingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        let source = diagnostic.source.as_deref().unwrap_or("-");
        match diagnostic.kind {
            DiagnosticKind::Warning => tracing::warn!(source, "{}", diagnostic.message),
            DiagnosticKind::Debug => tracing::debug!(source, "{}", diagnostic.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_str = match self.kind {
            DiagnosticKind::Warning => "warning",
            DiagnosticKind::Debug => "debug",
        };

        if let Some(source) = &self.source {
            write!(f, "{}: {}: {}", source, kind_str, self.message)
        } else {
            write!(f, "{}: {}", kind_str, self.message)
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}
