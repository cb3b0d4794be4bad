//! Naming tests: the four names of an entity, loaded from real typesystem
//! documents.

use std::path::PathBuf;

use typesystem::{Context, TypeRef};

fn typesystem_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("typesystems")
        .join(filename)
}

/// Load a fixture into a fresh context.
fn load(filename: &str) -> Context {
    let mut ctx = Context::new();
    let loaded = ctx
        .load(typesystem_path(filename), true)
        .unwrap_or_else(|e| panic!("Failed to load {}: {}", filename, e));
    assert!(loaded, "{} was not found", filename);
    ctx
}

fn assert_names(entry: &TypeRef<'_>, name: &str, cpp: &str, target: &str, qualified: &str) {
    assert_eq!(entry.name(), name, "name of {}", cpp);
    assert_eq!(entry.qualified_cpp_name(), cpp, "qualified C++ name of {}", cpp);
    assert_eq!(entry.target_lang_name(), target, "target name of {}", cpp);
    assert_eq!(
        entry.qualified_target_lang_name(),
        qualified,
        "qualified target name of {}",
        cpp
    );
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_class() {
    let ctx = load("class.toml");
    let class = ctx.database().find_type("ClassName").unwrap();
    assert_names(&class, "ClassName", "ClassName", "ClassName", "Foo.ClassName");
}

#[test]
fn test_class_in_namespace() {
    let ctx = load("class_in_namespace.toml");
    let db = ctx.database();

    let class = db.find_type("Nsp::ClassName").unwrap();
    assert_names(
        &class,
        "ClassName",
        "Nsp::ClassName",
        "Nsp.ClassName",
        "Foo.Nsp.ClassName",
    );

    let nsp = db.find_namespace_type("Nsp").unwrap();
    assert_names(&nsp, "Nsp", "Nsp", "Nsp", "Foo.Nsp");
}

#[test]
fn test_class_in_hidden_namespace() {
    let ctx = load("hidden_namespace.toml");
    let db = ctx.database();

    let nsp = db.find_namespace_type("Nsp").unwrap();
    assert_names(&nsp, "Nsp", "Nsp", "", "");

    let class = db.find_type("Nsp::ClassName").unwrap();
    assert_names(
        &class,
        "ClassName",
        "Nsp::ClassName",
        "ClassName",
        "Foo.ClassName",
    );
}

#[test]
fn test_deep_class_nesting() {
    let ctx = load("deep_nesting.toml");
    let db = ctx.database();

    let expected = [
        ("A", "A", "A", "Foo.A"),
        ("B", "A::B", "A.B", "Foo.A.B"),
        ("C", "A::B::C", "A.B.C", "Foo.A.B.C"),
        ("D", "A::B::C::D", "A.B.C.D", "Foo.A.B.C.D"),
    ];
    for (name, cpp, target, qualified) in expected {
        let entry = db
            .find_complex_type(cpp)
            .unwrap_or_else(|| panic!("{} not registered", cpp));
        assert_names(&entry, name, cpp, target, qualified);
    }
}

#[test]
fn test_enum_in_class_in_hidden_namespace() {
    let ctx = load("enum_in_hidden_namespace.toml");
    let db = ctx.database();

    let class = db.find_type("Nsp::A").unwrap();
    assert_names(&class, "A", "Nsp::A", "A", "Foo.A");

    let enumeration = db.find_type("Nsp::A::ClassEnum").unwrap();
    assert!(enumeration.is_enum());
    assert_names(
        &enumeration,
        "ClassEnum",
        "Nsp::A::ClassEnum",
        "A.ClassEnum",
        "Foo.A.ClassEnum",
    );
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_hidden_ancestor_leaves_no_empty_segment() {
    let ctx = load("enum_in_hidden_namespace.toml");
    for entry in ctx.database().arena().iter().filter(|e| !e.is_varargs()) {
        let target = entry.target_lang_name();
        assert!(!target.starts_with('.'), "{:?}", entry);
        assert!(!target.contains(".."), "{:?}", entry);
        assert!(!target.ends_with('.'), "{:?}", entry);
    }
}

#[test]
fn test_qualified_target_name_is_package_plus_chain() {
    let ctx = load("deep_nesting.toml");
    for entry in ctx.database().arena().iter().filter(|e| e.is_complex()) {
        let package = entry.target_lang_package().unwrap();
        assert_eq!(
            entry.qualified_target_lang_name(),
            format!("{}.{}", package, entry.target_lang_name())
        );
    }
}

#[test]
fn test_names_are_rederivable() {
    let ctx = load("class_in_namespace.toml");
    let class = ctx.database().find_type("Nsp::ClassName").unwrap();
    let first = class.qualified_target_lang_name();
    let second = class.qualified_target_lang_name();
    assert_eq!(first, second);
}
