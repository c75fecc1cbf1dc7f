//! Class symbols, members, and type parameters.
//!
//! A [`ClassSymbol`] is the resolved form of one top-level type: its base
//! types and type parameters are lowered eagerly at import, while member
//! detail stays in record form until first access (`members()` materializes
//! through a compute-once cell, so shared symbols stay cheap to import and
//! safe to touch from concurrent readers).

use crate::descriptor::{self, MemberRecord};
use crate::expr::{ParamRef, TypeExpr};
use crate::unit::Attribute;
use crate::well_known;
use bitflags::bitflags;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tydom_common::names;

/// Global counter backing [`MemberId::fresh`]. Ids are process-unique so
/// member-owned type parameters stay distinguishable across spaces.
static NEXT_MEMBER_ID: AtomicU64 = AtomicU64::new(1);

// =============================================================================
// Identifiers and flags
// =============================================================================

/// Process-unique member identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberId(pub u64);

impl MemberId {
    /// Sentinel for "no member".
    pub const INVALID: Self = Self(0);

    pub fn fresh() -> Self {
        Self(NEXT_MEMBER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

bitflags! {
    /// Declaration modifiers, shared by classes and members.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Modifiers: u16 {
        const PUBLIC    = 1 << 0;
        const INTERNAL  = 1 << 1;
        const PROTECTED = 1 << 2;
        const PRIVATE   = 1 << 3;
        const STATIC    = 1 << 4;
        const ABSTRACT  = 1 << 5;
        const VIRTUAL   = 1 << 6;
        const OVERRIDE  = 1 << 7;
        const SEALED    = 1 << 8;
        const READONLY  = 1 << 9;
        const CONST     = 1 << 10;
    }
}

bitflags! {
    /// Passing-mode modifiers on a declared parameter.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ParamModifiers: u8 {
        const IN       = 1 << 0;
        const OUT      = 1 << 1;
        const REF      = 1 << 2;
        const VARIADIC = 1 << 3;
        const OPTIONAL = 1 << 4;
    }
}

/// What a class-level symbol declares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
}

/// What a member-level symbol declares. Local variables get an entry of
/// their own because scope resolution must tell them apart from fields even
/// when name and type coincide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    Method,
    Field,
    Property,
    Event,
    LocalVariable,
}

// =============================================================================
// Type parameters
// =============================================================================

/// Owner of a type parameter: the declaring class (by qualified name) or the
/// declaring member (by process-unique id).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParamOwner {
    Class(String),
    Member(MemberId),
}

/// A declared type parameter. The index is its zero-based position in the
/// owner's parameter list and is stable for the owner's lifetime.
///
/// Constraints participate in conversion queries only; applicability ignores
/// them deliberately.
#[derive(Clone, Debug)]
pub struct TypeParam {
    pub name: String,
    pub index: u32,
    pub constraints: Vec<TypeExpr>,
}

impl TypeParam {
    pub fn new(name: impl Into<String>, index: u32) -> Self {
        Self { name: name.into(), index, constraints: Vec::new() }
    }

    pub fn with_constraints(mut self, constraints: Vec<TypeExpr>) -> Self {
        self.constraints = constraints;
        self
    }
}

// =============================================================================
// Members
// =============================================================================

/// A declared parameter of a method, property, or delegate invocation.
#[derive(Clone, Debug)]
pub struct Parameter {
    pub name: String,
    pub param_type: TypeExpr,
    pub modifiers: ParamModifiers,
}

impl Parameter {
    pub fn new(name: impl Into<String>, param_type: TypeExpr) -> Self {
        Self { name: name.into(), param_type, modifiers: ParamModifiers::empty() }
    }
}

/// One member of a class: method, field, property, event, or local variable
/// (source spaces model locals as members of their enclosing scope).
/// `return_type` is the member's declared type: a field's field type, a
/// method's return type.
#[derive(Clone, Debug)]
pub struct Member {
    id: MemberId,
    pub name: String,
    pub kind: MemberKind,
    pub declaring_class: String,
    pub modifiers: Modifiers,
    pub return_type: TypeExpr,
    pub parameters: Vec<Parameter>,
    pub type_params: Vec<TypeParam>,
}

impl Member {
    pub fn new(
        name: impl Into<String>,
        kind: MemberKind,
        declaring_class: impl Into<String>,
        return_type: TypeExpr,
    ) -> Self {
        Self {
            id: MemberId::fresh(),
            name: name.into(),
            kind,
            declaring_class: declaring_class.into(),
            modifiers: Modifiers::PUBLIC,
            return_type,
            parameters: Vec::new(),
            type_params: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_type_params(mut self, type_params: Vec<TypeParam>) -> Self {
        self.type_params = type_params;
        self
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    /// Owner tag for this member's own type parameters.
    pub fn param_owner(&self) -> ParamOwner {
        ParamOwner::Member(self.id)
    }

    /// Expression referring to this member's type parameter at `index`.
    pub fn param_ref(&self, index: u32) -> TypeExpr {
        let name = self
            .type_params
            .get(index as usize)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("T{index}"));
        TypeExpr::Param(ParamRef { owner: self.param_owner(), index, name })
    }

    /// True when `r` refers to one of this member's own type parameters.
    pub fn owns_param(&self, r: &ParamRef) -> bool {
        matches!(r.owner, ParamOwner::Member(id) if id == self.id)
    }

    /// Documentation lookup key, `DeclaringClass#member`.
    pub fn doc_key(&self) -> String {
        format!("{}#{}", self.declaring_class, self.name)
    }
}

// =============================================================================
// Class symbols
// =============================================================================

/// A resolved top-level type.
///
/// Built either eagerly (source spaces, tests) via the `with_members`
/// builder, or from import records with member lowering deferred to first
/// `members()` call.
#[derive(Debug)]
pub struct ClassSymbol {
    qualified_name: String,
    kind: ClassKind,
    modifiers: Modifiers,
    type_params: Vec<TypeParam>,
    base_types: Vec<TypeExpr>,
    attributes: Vec<Attribute>,
    members: OnceCell<Vec<Member>>,
    member_records: Vec<MemberRecord>,
}

impl ClassSymbol {
    pub fn new(qualified_name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            kind,
            modifiers: Modifiers::PUBLIC,
            type_params: Vec::new(),
            base_types: Vec::new(),
            attributes: Vec::new(),
            members: OnceCell::new(),
            member_records: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_type_params(mut self, type_params: Vec<TypeParam>) -> Self {
        self.type_params = type_params;
        self
    }

    pub fn with_bases(mut self, base_types: Vec<TypeExpr>) -> Self {
        self.base_types = base_types;
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Eagerly supplied member list (source spaces, tests).
    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = OnceCell::with_value(members);
        self
    }

    /// Member records to lower on first access (import path).
    pub fn with_member_records(mut self, records: Vec<MemberRecord>) -> Self {
        self.member_records = records;
        self
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Short name without the namespace.
    pub fn name(&self) -> &str {
        names::short_name_of(&self.qualified_name)
    }

    pub fn namespace(&self) -> &str {
        names::namespace_of(&self.qualified_name)
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn type_params(&self) -> &[TypeParam] {
        &self.type_params
    }

    pub fn arity(&self) -> u32 {
        self.type_params.len() as u32
    }

    pub fn base_types(&self) -> &[TypeExpr] {
        &self.base_types
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    /// Members, lowering retained import records on first access.
    pub fn members(&self) -> &[Member] {
        self.members
            .get_or_init(|| descriptor::lower_members(self, &self.member_records))
    }

    pub fn find_member(&self, name: &str) -> Option<&Member> {
        self.members().iter().find(|m| m.name == name)
    }

    /// The synthesized invocation member of a delegate class.
    pub fn invoke_member(&self) -> Option<&Member> {
        if self.kind != ClassKind::Delegate {
            return None;
        }
        self.members()
            .iter()
            .find(|m| m.kind == MemberKind::Method && m.name == well_known::INVOKE_MEMBER)
    }

    /// Owner tag for this class's type parameters.
    pub fn param_owner(&self) -> ParamOwner {
        ParamOwner::Class(self.qualified_name.clone())
    }

    /// Expression referring to this class's type parameter at `index`.
    pub fn param_ref(&self, index: u32) -> TypeExpr {
        let name = self
            .type_params
            .get(index as usize)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("T{index}"));
        TypeExpr::Param(ParamRef { owner: self.param_owner(), index, name })
    }

    /// Expression referring to this class itself (unbound for generics).
    pub fn self_type(&self) -> TypeExpr {
        TypeExpr::generic(self.qualified_name.clone(), self.arity())
    }

    /// Documentation lookup key (the qualified name).
    pub fn doc_key(&self) -> &str {
        &self.qualified_name
    }
}

#[cfg(test)]
#[path = "tests/symbol_tests.rs"]
mod symbol_tests;
