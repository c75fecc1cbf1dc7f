//! Data model of the tydom semantic layer.
//!
//! This crate defines the shapes the rest of the system computes over:
//!
//! - **Type expressions** (`expr`): the closed [`TypeExpr`] union with
//!   canonical naming and positional substitution
//! - **Symbols** (`symbols`): classes, members, and type parameters
//! - **Compilation units** (`unit`): frozen-once top-level symbol sets
//! - **Module identity** (`identity`): name/version/location/mtime keys
//! - **Descriptors** (`descriptor`): the serde exchange tree a reflection
//!   collaborator emits, plus lowering into the model
//! - **Well-known names** (`well_known`): the built-in `core` types the
//!   engine treats specially
//!
//! Everything here is pure data: no I/O, no global state beyond the atomic
//! member-id counter.

pub mod descriptor;
pub mod expr;
pub mod identity;
pub mod symbols;
pub mod unit;
pub mod well_known;

pub use descriptor::{
    MemberRecord, ModuleDescriptor, ParamRecord, TypeParamRecord, TypeRecord, TypeRef,
};
pub use expr::{
    ArrayType, ClassResolver, ConstructedType, LambdaType, NamedType, ParamRef, TypeArgs,
    TypeExpr,
};
pub use identity::ModuleIdentity;
pub use symbols::{
    ClassKind, ClassSymbol, Member, MemberId, MemberKind, Modifiers, ParamModifiers, ParamOwner,
    Parameter, TypeParam,
};
pub use unit::{Attribute, CompilationUnit, UnitError};
