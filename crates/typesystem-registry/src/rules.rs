//! Rule store: everything the configuration says about declarations that is
//! not itself an entity.
//!
//! The external merge step asks the store before materialising a parsed
//! declaration (`is_*_rejected`, `should_drop_type_entry`,
//! `supported_api_version`) and while building functions
//! (`function_modifications`, `find_global_user_functions`).

use typesystem_core::{AddedFunction, FunctionModification, GlobPattern, TypeRejection};

/// Rejections, suppressions, injected functions and version gates.
#[derive(Debug, Clone)]
pub struct RuleStore {
    rejections: Vec<TypeRejection>,
    /// When non-empty, only these classes are generated.
    rebuild_classes: Vec<String>,
    suppress_warnings: bool,
    suppressed_warnings: Vec<GlobPattern>,
    global_user_functions: Vec<AddedFunction>,
    function_mods: Vec<FunctionModification>,
    api_version: f64,
    /// Kept sorted for binary search.
    drop_type_entries: Vec<String>,
}

impl Default for RuleStore {
    fn default() -> Self {
        Self {
            rejections: Vec::new(),
            rebuild_classes: Vec::new(),
            suppress_warnings: true,
            suppressed_warnings: Vec::new(),
            global_user_functions: Vec::new(),
            function_mods: Vec::new(),
            api_version: 0.0,
            drop_type_entries: Vec::new(),
        }
    }
}

impl RuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================================================
    // Rejection
    // ==========================================================================

    pub fn add_rejection(&mut self, rejection: TypeRejection) {
        self.rejections.push(rejection);
    }

    pub fn rejections(&self) -> &[TypeRejection] {
        &self.rejections
    }

    /// Restrict generation to `classes`. An empty list lifts the restriction.
    pub fn set_rebuild_classes(&mut self, classes: Vec<String>) {
        self.rebuild_classes = classes;
    }

    /// Check whether a whole class is excluded.
    ///
    /// A non-empty rebuild list overrides every rejection rule: a class is
    /// rejected exactly when it is not on the list.
    pub fn is_class_rejected(&self, class_name: &str) -> bool {
        if !self.rebuild_classes.is_empty() {
            return !self.rebuild_classes.iter().any(|c| c == class_name);
        }
        self.rejections.iter().any(|r| r.rejects_class(class_name))
    }

    pub fn is_function_rejected(&self, class_name: &str, function_name: &str) -> bool {
        self.rejections
            .iter()
            .any(|r| r.rejects_function(class_name, function_name))
    }

    pub fn is_field_rejected(&self, class_name: &str, field_name: &str) -> bool {
        self.rejections
            .iter()
            .any(|r| r.rejects_field(class_name, field_name))
    }

    pub fn is_enum_rejected(&self, class_name: &str, enum_name: &str) -> bool {
        self.rejections
            .iter()
            .any(|r| r.rejects_enum(class_name, enum_name))
    }

    // ==========================================================================
    // Diagnostic suppression
    // ==========================================================================

    pub fn set_suppress_warnings(&mut self, value: bool) {
        self.suppress_warnings = value;
    }

    pub fn suppress_warnings(&self) -> bool {
        self.suppress_warnings
    }

    /// Add a suppression pattern; it is compiled once here.
    pub fn add_suppressed_warning(&mut self, pattern: &str) {
        self.suppressed_warnings.push(GlobPattern::compile(pattern));
    }

    pub fn suppressed_warnings(&self) -> &[GlobPattern] {
        &self.suppressed_warnings
    }

    /// True if suppression is enabled and some pattern matches `message`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn is_suppressed_warning(&self, message: &str) -> bool {
        self.suppress_warnings
            && self
                .suppressed_warnings
                .iter()
                .any(|pattern| pattern.matches(message))
    }

    // ==========================================================================
    // Injected functions and modifications
    // ==========================================================================

    pub fn add_global_user_functions(&mut self, functions: impl IntoIterator<Item = AddedFunction>) {
        self.global_user_functions.extend(functions);
    }

    pub fn global_user_functions(&self) -> &[AddedFunction] {
        &self.global_user_functions
    }

    /// Injected global functions called `name`, in registration order.
    pub fn find_global_user_functions(&self, name: &str) -> Vec<&AddedFunction> {
        self.global_user_functions
            .iter()
            .filter(|f| f.name == name)
            .collect()
    }

    pub fn add_global_user_function_modification(&mut self, modification: FunctionModification) {
        self.function_mods.push(modification);
    }

    pub fn add_global_user_function_modifications(
        &mut self,
        modifications: impl IntoIterator<Item = FunctionModification>,
    ) {
        self.function_mods.extend(modifications);
    }

    /// Every modification stored for exactly `signature`, in registration order.
    pub fn function_modifications(&self, signature: &str) -> Vec<&FunctionModification> {
        self.function_mods
            .iter()
            .filter(|m| m.signature == signature)
            .collect()
    }

    // ==========================================================================
    // API version gate
    // ==========================================================================

    pub fn api_version(&self) -> f64 {
        self.api_version
    }

    pub fn set_api_version(&mut self, version: f64) {
        self.api_version = version;
    }

    /// True if something introduced in `version` is available.
    pub fn supported_api_version(&self, version: f64) -> bool {
        version <= self.api_version
    }

    // ==========================================================================
    // Drop list
    // ==========================================================================

    /// Replace the drop list; it is stored sorted.
    pub fn set_drop_type_entries(&mut self, mut entries: Vec<String>) {
        entries.sort();
        self.drop_type_entries = entries;
    }

    pub fn drop_type_entries(&self) -> &[String] {
        &self.drop_type_entries
    }

    pub fn has_dropped_type_entries(&self) -> bool {
        !self.drop_type_entries.is_empty()
    }

    /// Check a fully qualified type name against the drop list.
    pub fn should_drop_type_entry(&self, full_type_name: &str) -> bool {
        self.drop_type_entries
            .binary_search_by(|entry| entry.as_str().cmp(full_type_name))
            .is_ok()
    }
}
