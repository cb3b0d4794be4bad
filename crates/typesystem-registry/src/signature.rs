//! Function signature normalisation.
//!
//! Signatures written by hand in configuration documents must compare equal
//! to the ones produced from parsed headers, so both sides go through
//! [`TypeDatabase::normalized_signature`] before being stored or looked up.

use crate::TypeDatabase;

/// Short unsigned spellings and their expansions.
const UNSIGNED_SHORTHANDS: [(&str, &str); 4] = [
    ("uchar", "unsigned char"),
    ("ushort", "unsigned short"),
    ("uint", "unsigned int"),
    ("ulong", "unsigned long"),
];

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Collapse whitespace runs and drop every space that does not separate two
/// identifier characters.
///
/// ```
/// use typesystem_registry::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  foo ( const  QString & , int ) "), "foo(const QString&,int)");
/// ```
pub fn normalize_whitespace(signature: &str) -> String {
    let mut out = String::with_capacity(signature.len());
    let mut pending_space = false;

    for c in signature.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space
            && is_identifier_char(c)
            && out.chars().next_back().is_some_and(is_identifier_char)
        {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }
    out
}

impl TypeDatabase {
    /// Canonical form of a function signature.
    ///
    /// Whitespace is normalised with [`normalize_whitespace`], then the
    /// shorthands `uchar`, `ushort`, `uint` and `ulong` are expanded to
    /// `unsigned X` unless a type with that exact name resolves through
    /// [`TypeDatabase::find_type`].
    pub fn normalized_signature(&self, signature: &str) -> String {
        let normalized = normalize_whitespace(signature);
        let mut out = String::with_capacity(normalized.len());
        let mut rest = normalized.as_str();

        while let Some(start) = rest.find(is_identifier_char) {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            let end = tail
                .find(|c: char| !is_identifier_char(c))
                .unwrap_or(tail.len());
            let word = &tail[..end];
            out.push_str(self.expand_unsigned(word));
            rest = &tail[end..];
        }
        out.push_str(rest);
        out
    }

    fn expand_unsigned<'a>(&self, word: &'a str) -> &'a str {
        match UNSIGNED_SHORTHANDS.iter().find(|(short, _)| *short == word) {
            Some((_, expanded)) if self.find_type(word).is_none() => expanded,
            _ => word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typesystem_core::{PrimitiveTypeEntry, TypeEntry, TypeEntryKind};

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(normalize_whitespace("void  foo()"), "void foo()");
        assert_eq!(normalize_whitespace("\tfoo(\n int\ta )"), "foo(int a)");
        assert_eq!(normalize_whitespace("foo( const char * )"), "foo(const char*)");
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn unsigned_shorthands_expand() {
        let db = TypeDatabase::new();
        assert_eq!(
            db.normalized_signature("setValue(uint, ushort)"),
            "setValue(unsigned int,unsigned short)"
        );
        assert_eq!(db.normalized_signature("f(uchar *p)"), "f(unsigned char*p)");
        assert_eq!(db.normalized_signature("f(ulong)"), "f(unsigned long)");
    }

    #[test]
    fn shorthand_inside_identifier_is_kept() {
        let db = TypeDatabase::new();
        assert_eq!(db.normalized_signature("uintValue(quint32)"), "uintValue(quint32)");
        assert_eq!(db.normalized_signature("f(my_uint)"), "f(my_uint)");
    }

    #[test]
    fn known_shorthand_type_is_kept() {
        let mut db = TypeDatabase::new();
        db.add_type(TypeEntry::primitive("uint")).unwrap();
        assert_eq!(db.normalized_signature("f(uint, uchar)"), "f(uint,unsigned char)");
    }

    #[test]
    fn non_preferred_shorthand_alias_still_expands() {
        let mut db = TypeDatabase::new();
        db.add_type(TypeEntry::new(
            "uint",
            TypeEntryKind::Primitive(PrimitiveTypeEntry::new().with_preferred_target_lang_type(false)),
        ))
        .unwrap();
        assert_eq!(db.normalized_signature("f(uint)"), "f(unsigned int)");
    }

    #[test]
    fn malformed_input_does_not_panic() {
        let db = TypeDatabase::new();
        assert_eq!(db.normalized_signature("(((uint"), "(((unsigned int");
        assert_eq!(db.normalized_signature("é uint ü"), "é unsigned int ü");
    }
}
