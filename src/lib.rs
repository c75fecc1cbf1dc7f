//! tydom: semantic model for a multi-language source-analysis tool.
//!
//! The workspace splits into four layers, re-exported here:
//!
//! - `tydom-common`: qualified-name utilities and traversal limits
//! - `tydom-model`: type expressions, symbols, compilation units, and
//!   module descriptors
//! - `tydom-space`: symbol spaces, the session registry, and metadata
//!   import, including the built-in `core` module
//! - `tydom-resolver`: the pure query engine for conversion,
//!   applicability, common types, inheritance trees, and member
//!   comparison
//!
//! A typical session builds a [`Registry`], loads module descriptors or
//! source units into it, and then asks the resolver questions through
//! [`SymbolSpace`] handles. Every query is total: unresolvable names
//! narrow answers instead of faulting.

pub use tydom_common as common;
pub use tydom_model as model;
pub use tydom_resolver as resolver;
pub use tydom_space as space;

// =============================================================================
// Flat surface
// =============================================================================

// The names most callers touch, lifted to the crate root.
pub use tydom_model::{
    ClassKind, ClassSymbol, CompilationUnit, Member, MemberKind, Modifiers, ModuleDescriptor,
    ModuleIdentity, TypeExpr, TypeParam,
};
pub use tydom_resolver::{
    InheritanceTree, common_type, conversion_exists, inheritance_tree, is_applicable,
    is_similar_member, type_argument_to_ancestor,
};
pub use tydom_space::{
    DocProvider, ImportError, Registry, StaticDocs, SymbolSpace, WellKnownTypes, import_space,
    import_unit,
};

// Tracing configuration (opt-in, env-var gated)
pub mod tracing_config;
