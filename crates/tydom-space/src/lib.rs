//! Symbol spaces, the shared registry, and metadata import.
//!
//! This crate turns module metadata into resolvable symbol sets:
//!
//! - [`import`]: descriptor in, frozen compilation unit out
//! - [`space`]: per-module class/namespace tables plus the lazily resolved
//!   reference partition with its change notification
//! - [`registry`]: the session-wide space cache, owner of the built-in
//!   `core` space
//! - [`corelib`]: the built-in module's descriptor
//! - [`well_known`]: cached handles and builders for the `core` types the
//!   resolution engine treats specially
//! - [`doc`]: the external documentation boundary

pub mod corelib;
pub mod doc;
pub mod import;
pub mod registry;
pub mod space;
pub mod well_known;

pub use doc::{DocProvider, StaticDocs};
pub use import::{ImportError, import_space, import_unit, void_class};
pub use registry::Registry;
pub use space::{NamespaceContents, SymbolSpace};
pub use well_known::WellKnownTypes;
