//! Populates a [`TypeDatabase`] from a parsed [`TypesystemDocument`].

use std::path::Path;

use typesystem_core::{
    AddedFunction, ComplexKind, ComplexTypeEntry, ContainerKind, EnumTypeEntry, FlagsTypeEntry,
    FunctionModification, PrimitiveTypeEntry, QualifiedName, TypeEntry, TypeEntryKind, TypeFlags, TypeId,
    TypeRejection, WILDCARD,
};
use typesystem_registry::TypeDatabase;

use crate::document::{
    AddFunctionDecl, ComplexTypeDecl, ContainerTypeDecl, EnumTypeDecl, FunctionDecl,
    ModifyFunctionDecl, PrimitiveTypeDecl, RejectionDecl, ScopeChildren, TypesystemDocument,
};
use crate::error::{LoadError, Result};

/// Where a declaration sits in the document.
#[derive(Debug, Clone, Copy)]
struct Scope<'d> {
    /// Enclosing entity; `None` at top level.
    id: Option<TypeId>,
    /// Package for top-level entities.
    package: Option<&'d str>,
    /// Class type receiving added functions and modifications.
    class: Option<TypeId>,
}

impl<'d> Scope<'d> {
    fn root(package: Option<&'d str>) -> Self {
        Self {
            id: None,
            package,
            class: None,
        }
    }

    fn namespace(id: TypeId) -> Self {
        Self {
            id: Some(id),
            package: None,
            class: None,
        }
    }

    fn class(id: TypeId) -> Self {
        Self {
            id: Some(id),
            package: None,
            class: Some(id),
        }
    }
}

pub(crate) struct DocumentHandler<'a> {
    db: &'a mut TypeDatabase,
    source: &'a Path,
    /// False registers every entity of the document hidden.
    generate: bool,
}

impl<'a> DocumentHandler<'a> {
    pub(crate) fn new(db: &'a mut TypeDatabase, source: &'a Path, generate: bool) -> Self {
        Self {
            db,
            source,
            generate,
        }
    }

    /// Register everything the document declares, except nested loads.
    pub(crate) fn apply(&mut self, document: &TypesystemDocument) -> Result<()> {
        for import in &document.imports {
            self.db.add_required_target_import(import.as_str());
        }
        for pattern in &document.suppress_warnings {
            self.db.rules_mut().add_suppressed_warning(pattern);
        }
        for rejection in &document.rejection {
            self.add_rejection(rejection);
        }

        let root = Scope::root(document.package.as_deref());
        for primitive in &document.primitive_type {
            self.add_primitive(primitive, root)?;
        }
        for container in &document.container_type {
            self.add_container(container, root)?;
        }
        for template in &document.template {
            self.db
                .add_template(TypeEntry::template(&template.name, &template.code))
                .map_err(|e| self.error(e.to_string()))?;
        }
        self.add_children(&document.children, root)
    }

    fn error(&self, message: String) -> LoadError {
        LoadError::Document {
            path: self.source.to_path_buf(),
            message,
        }
    }

    /// `name` qualified by the C++ name of the enclosing scope.
    fn scoped_name(&self, scope: Scope<'_>, name: &str) -> QualifiedName {
        match scope.id.and_then(|id| self.db.entry(id)) {
            Some(parent) => {
                QualifiedName::from_qualified_string(&parent.qualified_cpp_name()).child(name)
            }
            None => QualifiedName::global(name),
        }
    }

    fn register(&mut self, entry: TypeEntry, scope: Scope<'_>) -> Result<TypeId> {
        let entry = self.prepare(entry, scope);
        self.db
            .add_type(entry)
            .map_err(|e| self.error(e.to_string()))
    }

    fn prepare(&self, mut entry: TypeEntry, scope: Scope<'_>) -> TypeEntry {
        entry.generate &= self.generate;
        match scope.id {
            Some(id) => entry.in_scope(id),
            None => {
                if let Some(package) = scope.package {
                    entry.package = Some(package.to_string());
                }
                entry
            }
        }
    }

    fn add_children(&mut self, children: &ScopeChildren, scope: Scope<'_>) -> Result<()> {
        for namespace in &children.namespace_type {
            let mut entry = TypeEntry::namespace(&namespace.name).with_generate(namespace.generate);
            entry.target_lang_name = namespace.target_name.clone();
            let id = self.register(entry, scope)?;
            self.add_children(&namespace.children, Scope::namespace(id))?;
        }
        for class in &children.value_type {
            self.add_complex(class, ComplexKind::Value, scope)?;
        }
        for class in &children.object_type {
            self.add_complex(class, ComplexKind::Object, scope)?;
        }
        for enumeration in &children.enum_type {
            self.add_enum(enumeration, scope)?;
        }
        for function in &children.function {
            self.add_function(function, scope)?;
        }
        for added in &children.add_function {
            self.add_added_function(added, scope);
        }
        for modification in &children.modify_function {
            self.add_modification(modification, scope);
        }
        Ok(())
    }

    fn add_primitive(&mut self, decl: &PrimitiveTypeDecl, scope: Scope<'_>) -> Result<TypeId> {
        let mut primitive = PrimitiveTypeEntry::new()
            .with_preferred_conversion(decl.preferred_conversion)
            .with_preferred_target_lang_type(decl.preferred_target_type);
        primitive.target_lang_api_name = decl.target_api_name.clone();
        primitive.aliased_type = decl.aliased_type.clone();

        let mut entry = TypeEntry::new(&decl.name, TypeEntryKind::Primitive(primitive));
        entry.target_lang_name = decl.target_name.clone();
        self.register(entry, scope)
    }

    fn add_container(&mut self, decl: &ContainerTypeDecl, scope: Scope<'_>) -> Result<TypeId> {
        let kind = decl
            .kind
            .parse::<ContainerKind>()
            .map_err(|e| self.error(e))?;
        let mut entry = TypeEntry::container(&decl.name, kind);
        entry.target_lang_name = decl.target_name.clone();
        self.register(entry, scope)
    }

    fn add_complex(
        &mut self,
        decl: &ComplexTypeDecl,
        kind: ComplexKind,
        scope: Scope<'_>,
    ) -> Result<TypeId> {
        let mut flags = TypeFlags::empty();
        flags.set(TypeFlags::FORCE_ABSTRACT, decl.force_abstract);
        flags.set(TypeFlags::DEPRECATED, decl.deprecated);
        flags.set(TypeFlags::DELETE_IN_MAIN_THREAD, decl.delete_in_main_thread);

        let mut complex = ComplexTypeEntry::new(kind).with_flags(flags);
        complex.extra_includes = decl.extra_includes.clone();
        complex.polymorphic_id_value = decl.polymorphic_id_value.clone();

        let mut entry = TypeEntry::new(&decl.name, TypeEntryKind::Complex(complex))
            .with_generate(decl.generate);
        entry.target_lang_name = decl.target_name.clone();
        entry.include = decl.include.clone();

        let id = self.register(entry, scope)?;
        self.add_children(&decl.children, Scope::class(id))?;
        Ok(id)
    }

    fn add_enum(&mut self, decl: &EnumTypeDecl, scope: Scope<'_>) -> Result<TypeId> {
        let payload = EnumTypeEntry::new()
            .with_values(decl.values.iter().map(String::as_str))
            .with_rejected_values(decl.reject_values.iter().map(String::as_str));
        let mut entry =
            TypeEntry::new(&decl.name, TypeEntryKind::Enum(payload)).with_generate(decl.generate);
        entry.target_lang_name = decl.target_name.clone();
        let enum_id = self.register(entry, scope)?;

        if let Some(flags_name) = &decl.flags {
            let flags_id = self.add_flags(flags_name, enum_id, decl.generate, scope)?;
            if let Some(payload) = self.db.entry_mut(enum_id).and_then(TypeEntry::as_enum_mut) {
                payload.flags = Some(flags_id);
            }
        }
        Ok(enum_id)
    }

    /// Create the flags type of an enum in the enum's own scope.
    fn add_flags(
        &mut self,
        name: &str,
        origin: TypeId,
        generate: bool,
        scope: Scope<'_>,
    ) -> Result<TypeId> {
        let original_name = self.scoped_name(scope, name).to_string();
        let payload = FlagsTypeEntry::new(original_name).with_origin(origin);
        let entry = TypeEntry::new(name, TypeEntryKind::Flags(payload)).with_generate(generate);
        let entry = self.prepare(entry, scope);
        self.db
            .add_flags_type(entry)
            .map_err(|e| self.error(e.to_string()))
    }

    /// Register a function signature; overloads share one entity.
    fn add_function(&mut self, decl: &FunctionDecl, scope: Scope<'_>) -> Result<TypeId> {
        let signature = self.db.normalized_signature(&decl.signature);
        let name = function_name(&signature).to_string();
        if name.is_empty() {
            return Err(self.error(format!(
                "function signature '{}' has no name",
                decl.signature
            )));
        }

        let qualified = self.scoped_name(scope, &name).to_string();
        if let Some(id) = self.db.find_function_type(&qualified).map(|f| f.id()) {
            if let Some(function) = self.db.entry_mut(id).and_then(TypeEntry::as_function_mut)
                && !function.has_signature(&signature)
            {
                function.add_signature(signature);
            }
            return Ok(id);
        }

        let mut entry = TypeEntry::function(name, signature);
        entry.target_lang_name = decl.rename.clone();
        self.register(entry, scope)
    }

    fn add_added_function(&mut self, decl: &AddFunctionDecl, scope: Scope<'_>) {
        let signature = self.db.normalized_signature(&decl.signature);
        let function =
            AddedFunction::new(signature, decl.return_type.clone()).with_static(decl.is_static);

        match scope.class.and_then(|id| self.db.entry_mut(id)).and_then(TypeEntry::as_complex_mut)
        {
            Some(class) => class.added_functions.push(function),
            None => self.db.rules_mut().add_global_user_functions([function]),
        }
    }

    fn add_modification(&mut self, decl: &ModifyFunctionDecl, scope: Scope<'_>) {
        let mut modification = FunctionModification::new(self.db.normalized_signature(&decl.signature))
            .with_remove(decl.remove);
        modification.rename = decl.rename.clone();

        match scope.class.and_then(|id| self.db.entry_mut(id)).and_then(TypeEntry::as_complex_mut)
        {
            Some(class) => class.function_modifications.push(modification),
            None => self
                .db
                .rules_mut()
                .add_global_user_function_modification(modification),
        }
    }

    fn add_rejection(&mut self, decl: &RejectionDecl) {
        let member = |value: &Option<String>| value.clone().unwrap_or_else(|| WILDCARD.to_string());
        let rejection = TypeRejection::new(
            decl.class.clone(),
            member(&decl.function),
            member(&decl.field),
            member(&decl.enum_name),
        );
        tracing::trace!(?rejection, "added rejection");
        self.db.rules_mut().add_rejection(rejection);
    }
}

/// The identifier before `(`, without any leading return type.
fn function_name(signature: &str) -> &str {
    let head = match signature.find('(') {
        Some(pos) => &signature[..pos],
        None => signature,
    };
    head.trim().rsplit(' ').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(source: &str, generate: bool) -> Result<TypeDatabase> {
        let mut db = TypeDatabase::new();
        let document = TypesystemDocument::from_toml(source).unwrap();
        DocumentHandler::new(&mut db, Path::new("test.toml"), generate).apply(&document)?;
        Ok(db)
    }

    #[test]
    fn function_name_extraction() {
        assert_eq!(function_name("qHash(const QString&)"), "qHash");
        assert_eq!(function_name("int foo(int)"), "foo");
        assert_eq!(function_name("bare"), "bare");
        assert_eq!(function_name("(int)"), "");
    }

    #[test]
    fn package_applies_to_top_level_chain() {
        let db = load(
            r#"
            package = "Foo"

            [[namespace-type]]
            name = "Nsp"

            [[namespace-type.value-type]]
            name = "ClassName"
            "#,
            true,
        )
        .unwrap();

        let class = db.find_type("Nsp::ClassName").unwrap();
        assert_eq!(class.target_lang_name(), "Nsp.ClassName");
        assert_eq!(class.qualified_target_lang_name(), "Foo.Nsp.ClassName");
    }

    #[test]
    fn generate_false_hides_everything() {
        let db = load(
            r#"
            package = "Foo"

            [[object-type]]
            name = "QObject"

            [[object-type.enum-type]]
            name = "Policy"
            "#,
            false,
        )
        .unwrap();

        let object = db.find_type("QObject").unwrap();
        assert!(!object.generate_code());
        assert_eq!(object.qualified_target_lang_name(), "");
        let policy = db.find_type("QObject::Policy").unwrap();
        assert!(!policy.generate_code());
    }

    #[test]
    fn enum_flags_are_created_in_enum_scope() {
        let db = load(
            r#"
            [[namespace-type]]
            name = "Qt"

            [[namespace-type.enum-type]]
            name = "AlignmentFlag"
            values = ["AlignLeft", "AlignRight"]
            flags = "Alignment"
            "#,
            true,
        )
        .unwrap();

        let flags = db.find_flags_type("Qt::Alignment").unwrap();
        let enumeration = db.find_type("Qt::AlignmentFlag").unwrap();
        assert_eq!(
            flags.as_flags().and_then(|f| f.origin),
            Some(enumeration.id())
        );
        assert_eq!(
            enumeration.as_enum().and_then(|e| e.flags),
            Some(flags.id())
        );
        assert_eq!(db.find_flags_type("Alignment").map(|f| f.id()), Some(flags.id()));
    }

    #[test]
    fn nested_names_carry_the_full_cpp_scope() {
        let db = load(
            r#"
            [[namespace-type]]
            name = "Nsp"

            [[namespace-type.object-type]]
            name = "Widget"

            [[namespace-type.object-type.enum-type]]
            name = "RenderFlag"
            flags = "RenderFlags"

            [[namespace-type.object-type.function]]
            signature = "void render(int)"
            "#,
            true,
        )
        .unwrap();

        let flags = db.find_flags_type("Nsp::Widget::RenderFlags").unwrap();
        assert_eq!(
            flags.as_flags().map(|f| f.original_name.as_str()),
            Some("Nsp::Widget::RenderFlags")
        );
        let render = db.find_function_type("Nsp::Widget::render").unwrap();
        assert_eq!(render.qualified_cpp_name(), "Nsp::Widget::render");
    }

    #[test]
    fn rejections_default_to_wildcard() {
        let db = load(
            r#"
            [[rejection]]
            class = "QObjectPrivate"

            [[rejection]]
            class = "*"
            function = "metaObject"
            "#,
            true,
        )
        .unwrap();

        assert!(db.rules().is_class_rejected("QObjectPrivate"));
        assert!(db.rules().is_function_rejected("QWidget", "metaObject"));
        assert!(!db.rules().is_class_rejected("QWidget"));
    }

    #[test]
    fn function_overloads_share_entity() {
        let db = load(
            r#"
            [[function]]
            signature = "qHash(const QString &)"

            [[function]]
            signature = "qHash(uint)"
            "#,
            true,
        )
        .unwrap();

        let function = db.find_function_type("qHash").unwrap();
        let signatures = &function.as_function().unwrap().signatures;
        assert_eq!(signatures, &["qHash(const QString&)", "qHash(unsigned int)"]);
    }

    #[test]
    fn added_functions_attach_to_class_or_global() {
        let db = load(
            r#"
            [[add-function]]
            signature = "swap(Foo &, Foo &)"

            [[object-type]]
            name = "QWidget"

            [[object-type.add-function]]
            signature = "grab()"
            return-type = "QPixmap"

            [[object-type.modify-function]]
            signature = "show()"
            rename = "display"
            "#,
            true,
        )
        .unwrap();

        let global = db.rules().find_global_user_functions("swap");
        assert_eq!(global.len(), 1);
        assert_eq!(global[0].signature, "swap(Foo&,Foo&)");

        let widget = db.find_complex_type("QWidget").unwrap();
        let complex = widget.as_complex().unwrap();
        assert_eq!(complex.added_functions[0].name, "grab");
        assert_eq!(complex.function_modifications("show()").len(), 1);
        assert!(db.rules().function_modifications("show()").is_empty());
    }

    #[test]
    fn unknown_container_kind_is_a_document_error() {
        let result = load(
            r#"
            [[container-type]]
            name = "QTree"
            kind = "tree"
            "#,
            true,
        );
        assert!(matches!(result, Err(LoadError::Document { .. })));
    }

    #[test]
    fn nameless_function_is_a_document_error() {
        let result = load("[[function]]\nsignature = \"(int)\"", true);
        assert!(matches!(result, Err(LoadError::Document { .. })));
    }
}
