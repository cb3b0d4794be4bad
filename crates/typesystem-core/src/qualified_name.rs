use std::fmt;

/// C++ scope separator.
pub const CPP_SCOPE_SEPARATOR: &str = "::";

/// Separator used between scopes of target-language names.
pub const TARGET_SCOPE_SEPARATOR: &str = ".";

/// Scope-qualified C++ name.
///
/// Registry keys are plain strings; this type is used where a name has to be
/// taken apart or extended one scope at a time.
///
/// # Examples
///
/// ```
/// use typesystem_core::QualifiedName;
///
/// let class = QualifiedName::global("ClassName");
/// assert_eq!(class.to_string(), "ClassName");
///
/// let nested = QualifiedName::new("ClassEnum", vec!["Nsp".into(), "A".into()]);
/// assert_eq!(nested.to_string(), "Nsp::A::ClassEnum");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Scope-local name (e.g., "ClassName")
    pub name: String,
    /// Enclosing scopes, outermost first (e.g., ["Nsp", "A"])
    /// Empty at global scope
    pub scopes: Vec<String>,
}

impl QualifiedName {
    /// Create a new qualified name with enclosing scopes.
    pub fn new(name: impl Into<String>, scopes: Vec<String>) -> Self {
        Self {
            name: name.into(),
            scopes,
        }
    }

    /// Create a qualified name at global scope.
    pub fn global(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scopes: Vec::new(),
        }
    }

    /// Create from a qualified string (e.g., "Qt::Alignment").
    ///
    /// Splits on "::" outside template argument lists, so
    /// `QMap<Qt::Key, int>` stays one segment. A leading "::" is dropped.
    pub fn from_qualified_string(s: &str) -> Self {
        let mut parts = split_scopes(s);
        match parts.pop() {
            Some(name) => Self {
                name: name.to_string(),
                scopes: parts.into_iter().map(str::to_string).collect(),
            },
            None => Self::global(""),
        }
    }

    /// Create a child name inside this scope.
    ///
    /// Example: `Nsp::A` + `ClassEnum` = `Nsp::A::ClassEnum`
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut scopes = self.scopes.clone();
        scopes.push(self.name.clone());
        Self {
            name: name.into(),
            scopes,
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for scope in &self.scopes {
            write!(f, "{scope}{CPP_SCOPE_SEPARATOR}")?;
        }
        write!(f, "{}", self.name)
    }
}

/// Strip template arguments from a type name.
///
/// `QList<int>` becomes `QList`; names without arguments are returned as is.
/// A name starting with `<` is left alone.
pub fn template_base_name(name: &str) -> &str {
    match name.find('<') {
        Some(pos) if pos > 0 => &name[..pos],
        _ => name,
    }
}

fn split_scopes(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                if i > start {
                    parts.push(&s[start..i]);
                }
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    if start < s.len() {
        parts.push(&s[start..]);
    }
    parts
}
