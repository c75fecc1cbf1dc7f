//! Member and type resolution engine.
//!
//! Pure, non-mutating queries over loaded symbol spaces. Every operation
//! returns a definite answer over an incomplete graph; an unresolvable
//! name narrows the result, it never faults.
//!
//! - [`convert`]: implicit conversion, including the numeric widening
//!   table and anonymous-function-to-delegate matching
//! - [`applicable`]: overload applicability, looser than conversion while
//!   a candidate's type parameters are unfixed
//! - [`common_type`]: least-upper-bound used by type inference
//! - [`inherit`]: bounded breadth-first inheritance trees and base-type
//!   argument projection
//! - [`members`]: member shadowing comparison

pub mod applicable;
pub mod common_type;
pub mod convert;
pub mod inherit;
pub mod members;
pub mod widening;

pub use applicable::is_applicable;
pub use common_type::common_type;
pub use convert::conversion_exists;
pub use inherit::{InheritanceTree, TreeNode, inheritance_tree, type_argument_to_ancestor};
pub use members::is_similar_member;
pub use widening::widens_to;
