//! Compilation units.
//!
//! A unit is the top-level symbol/attribute set of one module (imported
//! binary or parsed source). It is owned by exactly one symbol space and is
//! frozen before that space is shared: freezing is one-way, and every
//! mutation after it fails with [`UnitError::Frozen`].

use crate::symbols::ClassSymbol;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// An attribute usage record: the attribute class's qualified name plus its
/// positional arguments rendered as strings. Attached to classes and to
/// whole units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), args: Vec::new() }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }
}

/// Mutation failures on a compilation unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnitError {
    /// Insertion or replacement attempted after `freeze`.
    Frozen { module: String },
    /// A class with the same qualified name is already present.
    DuplicateClass { name: String },
    /// Replacement target does not exist.
    UnknownClass { name: String },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::Frozen { module } => {
                write!(f, "compilation unit of module `{module}` is frozen")
            }
            UnitError::DuplicateClass { name } => {
                write!(f, "duplicate class `{name}` in compilation unit")
            }
            UnitError::UnknownClass { name } => {
                write!(f, "no class `{name}` in compilation unit")
            }
        }
    }
}

impl std::error::Error for UnitError {}

/// Frozen-once container of one module's top-level classes and attributes.
///
/// Classes are keyed by qualified name (unique per unit) and kept in
/// insertion order so enumeration is deterministic.
#[derive(Debug)]
pub struct CompilationUnit {
    module: String,
    classes: IndexMap<String, Arc<ClassSymbol>>,
    attributes: Vec<Attribute>,
    frozen: bool,
}

impl CompilationUnit {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            classes: IndexMap::new(),
            attributes: Vec::new(),
            frozen: false,
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// One-way transition; no insertion is permitted afterwards.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Adds a class, returning the shared handle now owned by the unit.
    pub fn add_class(&mut self, class: ClassSymbol) -> Result<Arc<ClassSymbol>, UnitError> {
        if self.frozen {
            return Err(UnitError::Frozen { module: self.module.clone() });
        }
        let name = class.qualified_name().to_string();
        if self.classes.contains_key(&name) {
            return Err(UnitError::DuplicateClass { name });
        }
        let handle = Arc::new(class);
        self.classes.insert(name, Arc::clone(&handle));
        Ok(handle)
    }

    /// Swaps an existing entry for `class`, keyed by its qualified name.
    /// Used by the importer to canonicalize special classes before freezing.
    pub fn replace_class(&mut self, class: Arc<ClassSymbol>) -> Result<(), UnitError> {
        if self.frozen {
            return Err(UnitError::Frozen { module: self.module.clone() });
        }
        let name = class.qualified_name().to_string();
        match self.classes.get_mut(&name) {
            Some(slot) => {
                *slot = class;
                Ok(())
            }
            None => Err(UnitError::UnknownClass { name }),
        }
    }

    pub fn add_attribute(&mut self, attribute: Attribute) -> Result<(), UnitError> {
        if self.frozen {
            return Err(UnitError::Frozen { module: self.module.clone() });
        }
        self.attributes.push(attribute);
        Ok(())
    }

    pub fn class(&self, qualified_name: &str) -> Option<&Arc<ClassSymbol>> {
        self.classes.get(qualified_name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &Arc<ClassSymbol>> {
        self.classes.values()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}
