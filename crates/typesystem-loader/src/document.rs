//! Typesystem document schema.
//!
//! ```toml
//! package = "Foo"
//! imports = ["Bar"]
//! load = ["common.toml", { name = "gui.toml", generate = false }]
//! suppress-warnings = ["skipping field * with unmatched type"]
//!
//! [[primitive-type]]
//! name = "int"
//!
//! [[namespace-type]]
//! name = "Nsp"
//! generate = false
//!
//!   [[namespace-type.value-type]]
//!   name = "ClassName"
//! ```
//!
//! Namespaces and class types nest: the children of an element are declared
//! inside it, and nesting gives the C++ scope of every entity.

use serde::Deserialize;

/// Root of a typesystem document.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TypesystemDocument {
    /// Target package of every top-level entity in this document.
    pub package: Option<String>,
    #[serde(default)]
    pub imports: Vec<String>,
    /// Documents this one depends on, loaded first.
    #[serde(default)]
    pub load: Vec<LoadReference>,
    #[serde(default)]
    pub suppress_warnings: Vec<String>,
    #[serde(default)]
    pub primitive_type: Vec<PrimitiveTypeDecl>,
    #[serde(default)]
    pub container_type: Vec<ContainerTypeDecl>,
    #[serde(default)]
    pub rejection: Vec<RejectionDecl>,
    #[serde(default)]
    pub template: Vec<TemplateDecl>,
    #[serde(flatten)]
    pub children: ScopeChildren,
}

/// Elements allowed at top level and inside namespaces and class types.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScopeChildren {
    #[serde(default)]
    pub namespace_type: Vec<NamespaceDecl>,
    #[serde(default)]
    pub value_type: Vec<ComplexTypeDecl>,
    #[serde(default)]
    pub object_type: Vec<ComplexTypeDecl>,
    #[serde(default)]
    pub enum_type: Vec<EnumTypeDecl>,
    #[serde(default)]
    pub function: Vec<FunctionDecl>,
    #[serde(default)]
    pub add_function: Vec<AddFunctionDecl>,
    #[serde(default)]
    pub modify_function: Vec<ModifyFunctionDecl>,
}

/// A dependency document, by name or with an explicit generation switch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LoadReference {
    Name(String),
    Detailed {
        name: String,
        #[serde(default = "default_true")]
        generate: bool,
    },
}

impl LoadReference {
    pub fn name(&self) -> &str {
        match self {
            LoadReference::Name(name) | LoadReference::Detailed { name, .. } => name,
        }
    }

    pub fn generate(&self) -> bool {
        match self {
            LoadReference::Name(_) => true,
            LoadReference::Detailed { generate, .. } => *generate,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PrimitiveTypeDecl {
    pub name: String,
    pub target_name: Option<String>,
    pub target_api_name: Option<String>,
    pub aliased_type: Option<String>,
    #[serde(default = "default_true")]
    pub preferred_conversion: bool,
    #[serde(default = "default_true")]
    pub preferred_target_type: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NamespaceDecl {
    pub name: String,
    #[serde(default = "default_true")]
    pub generate: bool,
    pub target_name: Option<String>,
    #[serde(flatten)]
    pub children: ScopeChildren,
}

/// A `value-type` or `object-type` element.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ComplexTypeDecl {
    pub name: String,
    #[serde(default = "default_true")]
    pub generate: bool,
    pub target_name: Option<String>,
    pub include: Option<String>,
    #[serde(default)]
    pub extra_includes: Vec<String>,
    #[serde(default)]
    pub force_abstract: bool,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub delete_in_main_thread: bool,
    pub polymorphic_id_value: Option<String>,
    #[serde(flatten)]
    pub children: ScopeChildren,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EnumTypeDecl {
    pub name: String,
    #[serde(default = "default_true")]
    pub generate: bool,
    pub target_name: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub reject_values: Vec<String>,
    /// Name of a flags type to create next to the enum.
    pub flags: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ContainerTypeDecl {
    pub name: String,
    pub kind: String,
    pub target_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FunctionDecl {
    pub signature: String,
    pub rename: Option<String>,
}

/// Rejection rule; omitted members match anything.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RejectionDecl {
    pub class: String,
    pub function: Option<String>,
    pub field: Option<String>,
    #[serde(rename = "enum")]
    pub enum_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AddFunctionDecl {
    pub signature: String,
    pub return_type: Option<String>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ModifyFunctionDecl {
    pub signature: String,
    pub rename: Option<String>,
    #[serde(default)]
    pub remove: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateDecl {
    pub name: String,
    pub code: String,
}

fn default_true() -> bool {
    true
}

impl TypesystemDocument {
    /// Parse a document from TOML text.
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}
