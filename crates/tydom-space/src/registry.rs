//! The shared space registry.
//!
//! One registry per editing session. It caches every imported module space
//! by module name, owns the lazily built `core` space, and is the lookup
//! authority [`SymbolSpace::resolve_references`] asks when it retries
//! pending reference names.
//!
//! All operations take `&self`; the map is sharded and safe to hit from
//! concurrent feature requests.
//!
//! [`SymbolSpace::resolve_references`]: crate::space::SymbolSpace::resolve_references

use crate::corelib;
use crate::doc::DocProvider;
use crate::import::{self, ImportError};
use crate::space::SymbolSpace;
use crate::well_known::WellKnownTypes;
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::info;
use tydom_model::descriptor::ModuleDescriptor;
use tydom_model::well_known;

#[derive(Default)]
pub struct Registry {
    spaces: DashMap<String, Arc<SymbolSpace>>,
    core: OnceCell<Arc<SymbolSpace>>,
    cached_well_known: OnceCell<WellKnownTypes>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in `core` space, imported on first use. Import of the
    /// compiled-in descriptor cannot fail short of a defect in it.
    pub fn core_space(&self) -> &Arc<SymbolSpace> {
        self.core.get_or_init(|| {
            let space = import::import_space(&corelib::descriptor(), None)
                .expect("built-in core module descriptor must import");
            Arc::new(space)
        })
    }

    /// Cached handles to the `core` types the resolution engine treats
    /// specially.
    pub fn well_known(&self) -> &WellKnownTypes {
        self.cached_well_known
            .get_or_init(|| WellKnownTypes::new(self.core_space()))
    }

    /// Looks up a space by module name. `core` always answers.
    pub fn find(&self, module: &str) -> Option<Arc<SymbolSpace>> {
        if module == well_known::CORE_MODULE {
            return Some(Arc::clone(self.core_space()));
        }
        self.spaces.get(module).map(|entry| Arc::clone(entry.value()))
    }

    /// Imports `descriptor` and caches the space under its module name.
    pub fn load(&self, descriptor: &ModuleDescriptor) -> Result<Arc<SymbolSpace>, ImportError> {
        self.load_with_docs(descriptor, None)
    }

    /// [`load`](Self::load) with an external documentation provider. An
    /// existing entry under the same name is replaced; holders of the old
    /// space keep it alive until they drop it.
    pub fn load_with_docs(
        &self,
        descriptor: &ModuleDescriptor,
        docs: Option<Arc<dyn DocProvider>>,
    ) -> Result<Arc<SymbolSpace>, ImportError> {
        let space = Arc::new(import::import_space(descriptor, docs)?);
        self.spaces.insert(space.name().to_string(), Arc::clone(&space));
        info!(module = space.name(), classes = space.unit().class_count(), "module loaded");
        Ok(space)
    }

    /// Caches an externally built space (a parsed source module) so other
    /// spaces can resolve it by name.
    pub fn insert(&self, space: Arc<SymbolSpace>) {
        self.spaces.insert(space.name().to_string(), space);
    }

    /// Drops a cached space. The built-in module cannot be removed.
    pub fn remove(&self, module: &str) -> Option<Arc<SymbolSpace>> {
        if module == well_known::CORE_MODULE {
            return None;
        }
        self.spaces.remove(module).map(|(_, space)| space)
    }

    /// Drops every space whose backing module file changed since import.
    /// Returns the evicted module names; callers reload and re-resolve.
    pub fn evict_stale(&self) -> Vec<String> {
        let stale: Vec<String> = self
            .spaces
            .iter()
            .filter(|entry| !entry.value().is_up_to_date())
            .map(|entry| entry.key().clone())
            .collect();
        for name in &stale {
            self.spaces.remove(name);
            info!(module = %name, "stale module evicted");
        }
        stale
    }

    /// Retries pending reference resolution on every cached space. Returns
    /// how many spaces gained at least one reference.
    pub fn resolve_all(&self) -> usize {
        let spaces: Vec<Arc<SymbolSpace>> =
            self.spaces.iter().map(|entry| Arc::clone(entry.value())).collect();
        spaces
            .iter()
            .filter(|space| space.resolve_references(self))
            .count()
    }

    /// Cached module names, sorted. The built-in module is not listed.
    pub fn modules(&self) -> Vec<String> {
        let mut names: Vec<String> =
            self.spaces.iter().map(|entry| entry.key().clone()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod registry_tests;
