//! Metadata import: descriptor in, frozen unit out.
//!
//! The importer walks a [`ModuleDescriptor`] and builds the compilation
//! unit for one binary module. Nested and non-public types are skipped;
//! base types and type parameters lower eagerly while member detail stays
//! in record form (the class table is the eager name index, member cost is
//! paid on first touch). The placeholder class for the "nothing" return
//! type is swapped for one process-wide singleton, and the unit is frozen
//! as the final step.

use crate::doc::DocProvider;
use crate::space::SymbolSpace;
use once_cell::sync::Lazy;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, warn};
use tydom_common::names;
use tydom_model::descriptor::ModuleDescriptor;
use tydom_model::expr::TypeExpr;
use tydom_model::symbols::{ClassKind, ClassSymbol, Modifiers};
use tydom_model::unit::{CompilationUnit, UnitError};
use tydom_model::well_known;

/// Import failures. Skipped types and failed freshness probes are not
/// errors; this is for descriptors the importer cannot turn into a unit at
/// all.
#[derive(Debug)]
pub enum ImportError {
    /// The descriptor's identity has no module name.
    MissingName,
    /// Unit construction rejected the descriptor (duplicate class names).
    Unit(UnitError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::MissingName => write!(f, "module descriptor has no name"),
            ImportError::Unit(err) => write!(f, "module import failed: {err}"),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Unit(err) => Some(err),
            ImportError::MissingName => None,
        }
    }
}

impl From<UnitError> for ImportError {
    fn from(err: UnitError) -> Self {
        ImportError::Unit(err)
    }
}

/// The canonical class behind [`TypeExpr::Void`]. Identity-shared across
/// every imported module so void classes compare pointer-equal.
pub fn void_class() -> Arc<ClassSymbol> {
    static VOID_CLASS: Lazy<Arc<ClassSymbol>> = Lazy::new(|| {
        Arc::new(
            ClassSymbol::new(well_known::VOID, ClassKind::Struct)
                .with_modifiers(Modifiers::PUBLIC | Modifiers::SEALED)
                .with_bases(vec![TypeExpr::named(well_known::OBJECT)]),
        )
    });
    Arc::clone(&VOID_CLASS)
}

/// Builds the frozen compilation unit for `descriptor`.
pub fn import_unit(descriptor: &ModuleDescriptor) -> Result<CompilationUnit, ImportError> {
    if descriptor.identity.name.is_empty() {
        return Err(ImportError::MissingName);
    }
    let mut unit = CompilationUnit::new(descriptor.identity.name.clone());
    let mut skipped = 0usize;
    for record in &descriptor.types {
        if names::is_nested(&record.name) || !record.modifiers.contains(Modifiers::PUBLIC) {
            skipped += 1;
            continue;
        }
        unit.add_class(record.lower())?;
    }
    for attribute in &descriptor.attributes {
        unit.add_attribute(attribute.clone())?;
    }
    if unit.class(well_known::VOID).is_some() {
        unit.replace_class(void_class())?;
    }
    unit.freeze();
    debug!(
        module = %descriptor.identity.name,
        classes = unit.class_count(),
        skipped,
        "imported module metadata"
    );
    Ok(unit)
}

/// Imports `descriptor` and wraps the unit in a symbol space carrying the
/// descriptor's declared references. When the identity names an on-disk
/// location without a stored write time, the file is probed now so later
/// freshness checks have a baseline.
pub fn import_space(
    descriptor: &ModuleDescriptor,
    docs: Option<Arc<dyn DocProvider>>,
) -> Result<SymbolSpace, ImportError> {
    let mut identity = descriptor.identity.clone();
    if identity.last_write.is_none() {
        if let Some(location) = &identity.location {
            identity.last_write = probe_last_write(location);
        }
    }
    let unit = import_unit(descriptor)?;
    Ok(SymbolSpace::from_unit(
        identity,
        unit,
        descriptor.references.clone(),
        docs,
    ))
}

/// Reads the module file's mtime. Failure is logged and yields `None`,
/// which makes the space permanently "up to date": an unreadable module
/// must never block editing.
fn probe_last_write(location: &Path) -> Option<SystemTime> {
    match fs::metadata(location).and_then(|m| m.modified()) {
        Ok(time) => Some(time),
        Err(error) => {
            warn!(
                location = %location.display(),
                %error,
                "could not read module write time, freshness checks disabled for it"
            );
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/import_tests.rs"]
mod import_tests;
