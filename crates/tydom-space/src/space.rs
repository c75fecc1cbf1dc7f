//! Symbol spaces.
//!
//! A [`SymbolSpace`] is the resolvable symbol set of one module: the frozen
//! compilation unit, a class table keyed by qualified name, a namespace
//! table for completion-style listing, and the module's declared references
//! to other spaces.
//!
//! Everything except the reference partition is immutable after
//! construction. References start as pending names; [`resolve_references`]
//! moves whatever the registry can answer into the resolved list and fires
//! the change notification exactly when something newly resolved. Resolved
//! spaces are held weakly; the registry (or an editing session) owns them.
//!
//! [`resolve_references`]: SymbolSpace::resolve_references

use crate::doc::DocProvider;
use crate::registry::Registry;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::fs;
use std::sync::{Arc, Mutex, Weak};
use tracing::{trace, warn};
use tydom_common::names;
use tydom_model::expr::ClassResolver;
use tydom_model::identity::ModuleIdentity;
use tydom_model::symbols::{ClassSymbol, Member};
use tydom_model::unit::CompilationUnit;

/// Reference partition of one space. `resolved` only grows; a name never
/// moves back to `pending`.
#[derive(Default)]
struct ReferenceState {
    pending: Vec<String>,
    resolved: Vec<(String, Weak<SymbolSpace>)>,
}

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct NamespaceEntry {
    classes: Vec<Arc<ClassSymbol>>,
    children: Vec<String>,
}

/// Classes and child namespaces visible under one namespace.
#[derive(Default)]
pub struct NamespaceContents {
    pub classes: Vec<Arc<ClassSymbol>>,
    pub namespaces: Vec<String>,
}

pub struct SymbolSpace {
    identity: ModuleIdentity,
    unit: CompilationUnit,
    classes: FxHashMap<String, Arc<ClassSymbol>>,
    namespaces: FxHashMap<String, NamespaceEntry>,
    refs: Mutex<ReferenceState>,
    listeners: Mutex<Vec<Listener>>,
    docs: Option<Arc<dyn DocProvider>>,
}

impl SymbolSpace {
    /// Wraps a built unit. `references` are module names to resolve against
    /// the registry later; direct handles can be injected with
    /// [`add_reference`](Self::add_reference) instead.
    pub fn from_unit(
        identity: ModuleIdentity,
        unit: CompilationUnit,
        references: Vec<String>,
        docs: Option<Arc<dyn DocProvider>>,
    ) -> Self {
        let mut classes = FxHashMap::default();
        let mut namespaces: FxHashMap<String, NamespaceEntry> = FxHashMap::default();
        namespaces.insert(String::new(), NamespaceEntry::default());

        for class in unit.classes() {
            classes.insert(class.qualified_name().to_string(), Arc::clone(class));

            let mut parent = String::new();
            for ancestor in names::ancestor_namespaces(class.namespace()) {
                let child = names::short_name_of(ancestor).to_string();
                let entry = namespaces.entry(parent.clone()).or_default();
                if !entry.children.contains(&child) {
                    entry.children.push(child);
                }
                namespaces.entry(ancestor.to_string()).or_default();
                parent = ancestor.to_string();
            }
            namespaces
                .entry(class.namespace().to_string())
                .or_default()
                .classes
                .push(Arc::clone(class));
        }

        Self {
            identity,
            unit,
            classes,
            namespaces,
            refs: Mutex::new(ReferenceState { pending: references, resolved: Vec::new() }),
            listeners: Mutex::new(Vec::new()),
            docs,
        }
    }

    /// Space over a parser-produced unit. Source spaces have no on-disk
    /// identity and are always fresh; the parser collaborator rebuilds them
    /// per reparse.
    pub fn from_source(name: impl Into<String>, unit: CompilationUnit) -> Self {
        Self::from_unit(ModuleIdentity::new(name), unit, Vec::new(), None)
    }

    pub fn identity(&self) -> &ModuleIdentity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn unit(&self) -> &CompilationUnit {
        &self.unit
    }

    // -------------------------------------------------------------------------
    // Class and namespace lookup
    // -------------------------------------------------------------------------

    /// Looks up a class declared in this space itself.
    pub fn local_class(&self, qualified_name: &str) -> Option<Arc<ClassSymbol>> {
        self.classes.get(qualified_name).cloned()
    }

    /// Looks up a class in this space, then in each resolved reference
    /// space's own classes, in declaration order. Not transitive: a
    /// reference's references are not searched.
    pub fn lookup_class(&self, qualified_name: &str) -> Option<Arc<ClassSymbol>> {
        if let Some(class) = self.local_class(qualified_name) {
            return Some(class);
        }
        for space in self.resolved_references() {
            if let Some(class) = space.local_class(qualified_name) {
                return Some(class);
            }
        }
        None
    }

    pub fn namespace_exists(&self, namespace: &str) -> bool {
        if namespace.is_empty() {
            return false;
        }
        self.namespaces.contains_key(namespace)
            || self
                .resolved_references()
                .iter()
                .any(|space| space.namespaces.contains_key(namespace))
    }

    /// Merged contents of `namespace` across this space and its resolved
    /// references. Classes are unique by qualified name, first declaration
    /// wins; child namespace names are deduplicated.
    pub fn namespace_contents(&self, namespace: &str) -> NamespaceContents {
        let mut out = NamespaceContents::default();
        let mut seen_classes = FxHashSet::default();
        let mut collect = |entry: &NamespaceEntry, out: &mut NamespaceContents| {
            for class in &entry.classes {
                if seen_classes.insert(class.qualified_name().to_string()) {
                    out.classes.push(Arc::clone(class));
                }
            }
            for child in &entry.children {
                if !out.namespaces.contains(child) {
                    out.namespaces.push(child.clone());
                }
            }
        };
        if let Some(entry) = self.namespaces.get(namespace) {
            collect(entry, &mut out);
        }
        for space in self.resolved_references() {
            if let Some(entry) = space.namespaces.get(namespace) {
                collect(entry, &mut out);
            }
        }
        out
    }

    // -------------------------------------------------------------------------
    // References
    // -------------------------------------------------------------------------

    /// Names declared but not yet resolved.
    pub fn pending_references(&self) -> Vec<String> {
        self.refs.lock().unwrap().pending.clone()
    }

    /// Snapshot of the resolved reference spaces, strong and in resolution
    /// order. Entries whose owner dropped them are skipped.
    pub fn resolved_references(&self) -> Vec<Arc<SymbolSpace>> {
        self.refs
            .lock()
            .unwrap()
            .resolved
            .iter()
            .filter_map(|(_, weak)| weak.upgrade())
            .collect()
    }

    /// Injects a reference handle directly, bypassing name resolution.
    /// Used by source spaces that link against already-loaded spaces. A
    /// handle already present is not added twice.
    pub fn add_reference(&self, space: &Arc<SymbolSpace>) {
        let mut state = self.refs.lock().unwrap();
        let present = state.resolved.iter().any(|(_, weak)| {
            weak.upgrade().is_some_and(|existing| Arc::ptr_eq(&existing, space))
        });
        if !present {
            state
                .resolved
                .push((space.name().to_string(), Arc::downgrade(space)));
        }
    }

    /// Re-attempts resolution of every still-pending reference name against
    /// `registry`. Names that resolve move to the resolved list; the rest
    /// stay pending for the next call. Idempotent and monotonic.
    ///
    /// Returns true, and fires the references-changed notification, exactly
    /// when at least one name newly resolved in this call.
    pub fn resolve_references(&self, registry: &Registry) -> bool {
        let newly_resolved = {
            let mut state = self.refs.lock().unwrap();
            let state = &mut *state;
            let mut still_pending = Vec::new();
            let mut changed = false;
            for name in state.pending.drain(..) {
                match registry.find(&name) {
                    Some(space) => {
                        trace!(module = self.name(), reference = %name, "reference resolved");
                        state.resolved.push((name, Arc::downgrade(&space)));
                        changed = true;
                    }
                    None => still_pending.push(name),
                }
            }
            state.pending = still_pending;
            changed
        };
        if newly_resolved {
            self.notify_references_changed();
        }
        newly_resolved
    }

    /// Registers a callback invoked after a `resolve_references` call that
    /// newly resolved at least one name.
    pub fn on_references_changed(&self, listener: impl Fn() + Send + Sync + 'static) {
        self.listeners.lock().unwrap().push(Arc::new(listener));
    }

    fn notify_references_changed(&self) {
        let snapshot: Vec<Listener> = self.listeners.lock().unwrap().clone();
        for listener in snapshot {
            listener();
        }
    }

    // -------------------------------------------------------------------------
    // Freshness
    // -------------------------------------------------------------------------

    /// Compares the stored last-write-time against the file's current one.
    ///
    /// Spaces without a location or stored time (built-in, source) are
    /// always fresh. A probe failure is logged and reported as fresh: a
    /// vanished or unreadable module file must never block editing.
    pub fn is_up_to_date(&self) -> bool {
        let (Some(location), Some(stored)) = (&self.identity.location, self.identity.last_write)
        else {
            return true;
        };
        match fs::metadata(location).and_then(|m| m.modified()) {
            Ok(current) => current == stored,
            Err(error) => {
                warn!(
                    module = self.name(),
                    location = %location.display(),
                    %error,
                    "freshness probe failed, treating module as up to date"
                );
                true
            }
        }
    }

    // -------------------------------------------------------------------------
    // Documentation
    // -------------------------------------------------------------------------

    pub fn class_documentation(&self, class: &ClassSymbol) -> Option<String> {
        self.docs.as_ref()?.documentation(class.doc_key())
    }

    pub fn member_documentation(&self, member: &Member) -> Option<String> {
        self.docs.as_ref()?.documentation(&member.doc_key())
    }
}

impl ClassResolver for SymbolSpace {
    fn find_class(&self, qualified_name: &str) -> Option<Arc<ClassSymbol>> {
        self.lookup_class(qualified_name)
    }
}

impl fmt::Debug for SymbolSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolSpace")
            .field("identity", &self.identity)
            .field("classes", &self.classes.len())
            .field("pending", &self.pending_references())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/space_tests.rs"]
mod space_tests;
