//! User-supplied functions and signature modifications.

/// A function injected by the configuration that has no C++ declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedFunction {
    /// Function name, the part of the signature before `(`.
    pub name: String,
    /// Full signature as written, e.g. `"swap(Foo&, Foo&)"`.
    pub signature: String,
    /// Return type; `None` means `void`.
    pub return_type: Option<String>,
    pub is_static: bool,
}

impl AddedFunction {
    /// Create an added function from its signature.
    ///
    /// Signatures are not validated; a signature without `(` is taken to be
    /// just a name.
    pub fn new(signature: impl Into<String>, return_type: Option<String>) -> Self {
        let signature = signature.into();
        let name = match signature.find('(') {
            Some(pos) => signature[..pos].trim().to_string(),
            None => signature.trim().to_string(),
        };
        Self {
            name,
            signature,
            return_type,
            is_static: false,
        }
    }

    /// Mark the function as static.
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }
}

/// A modification applied to every function with a given signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionModification {
    /// Signature the modification is keyed on.
    pub signature: String,
    /// New target-language name.
    pub rename: Option<String>,
    /// Drop the function from the generated bindings.
    pub remove: bool,
}

impl FunctionModification {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            rename: None,
            remove: false,
        }
    }

    pub fn with_rename(mut self, name: impl Into<String>) -> Self {
        self.rename = Some(name.into());
        self
    }

    pub fn with_remove(mut self, remove: bool) -> Self {
        self.remove = remove;
        self
    }

    pub fn is_renamed(&self) -> bool {
        self.rename.is_some()
    }
}
