//! Module descriptors: the exchange shape reflection produces.
//!
//! A metadata-reflection collaborator walks a binary module and emits a
//! [`ModuleDescriptor`]: identity, referenced module names, module-level
//! attributes, and one [`TypeRecord`] per exported type. Only this
//! enumerated shape is depended on; the whole tree derives serde so it can
//! cross a process boundary as JSON.
//!
//! Lowering turns records into model types. Type references inside a record
//! are positional ([`TypeRef::ClassParam`]/[`TypeRef::MethodParam`]) because
//! the record cannot know the process-unique ids lowering will allocate.

use crate::expr::{ParamRef, TypeExpr};
use crate::identity::ModuleIdentity;
use crate::symbols::{
    ClassKind, ClassSymbol, Member, MemberId, MemberKind, Modifiers, ParamModifiers, ParamOwner,
    Parameter, TypeParam,
};
use crate::unit::Attribute;
use crate::well_known;
use serde::{Deserialize, Serialize};

/// Everything the importer consumes for one binary module.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub identity: ModuleIdentity,
    /// Names of modules this module references.
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Exported types, nested ones included (the importer skips them).
    #[serde(default)]
    pub types: Vec<TypeRecord>,
}

impl ModuleDescriptor {
    pub fn new(identity: ModuleIdentity) -> Self {
        Self { identity, references: Vec::new(), attributes: Vec::new(), types: Vec::new() }
    }

    pub fn with_references(mut self, references: Vec<String>) -> Self {
        self.references = references;
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_types(mut self, types: Vec<TypeRecord>) -> Self {
        self.types = types;
        self
    }
}

/// One exported type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeRecord {
    /// Qualified name; nested types carry the nesting marker.
    pub name: String,
    pub kind: ClassKind,
    #[serde(default = "default_visibility")]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub type_params: Vec<TypeParamRecord>,
    #[serde(default)]
    pub bases: Vec<TypeRef>,
    #[serde(default)]
    pub members: Vec<MemberRecord>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeParamRecord {
    pub name: String,
    #[serde(default)]
    pub constraints: Vec<TypeRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MemberRecord {
    pub name: String,
    pub kind: MemberKind,
    #[serde(default = "default_visibility")]
    pub modifiers: Modifiers,
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<ParamRecord>,
    #[serde(default)]
    pub type_params: Vec<TypeParamRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParamRecord {
    pub name: String,
    pub param_type: TypeRef,
    #[serde(default)]
    pub modifiers: ParamModifiers,
}

/// Positional type reference inside a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeRef {
    Named {
        name: String,
        #[serde(default)]
        arity: u32,
    },
    Generic {
        definition: Box<TypeRef>,
        args: Vec<TypeRef>,
    },
    Array {
        element: Box<TypeRef>,
        #[serde(default = "default_rank")]
        rank: u32,
    },
    /// Type parameter of the declaring type, by index.
    ClassParam { index: u32 },
    /// Type parameter of the declaring member, by index.
    MethodParam { index: u32 },
}

fn default_rank() -> u32 {
    1
}

// Records omitting modifiers mean plain public declarations.
fn default_visibility() -> Modifiers {
    Modifiers::PUBLIC
}

// =============================================================================
// Record construction helpers (used by the built-in module and by tests)
// =============================================================================

impl TypeRecord {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            modifiers: Modifiers::PUBLIC,
            type_params: Vec::new(),
            bases: Vec::new(),
            members: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_type_params(mut self, names: &[&str]) -> Self {
        self.type_params = names
            .iter()
            .map(|n| TypeParamRecord { name: (*n).to_string(), constraints: Vec::new() })
            .collect();
        self
    }

    pub fn with_bases(mut self, bases: Vec<TypeRef>) -> Self {
        self.bases = bases;
        self
    }

    pub fn with_members(mut self, members: Vec<MemberRecord>) -> Self {
        self.members = members;
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }
}

impl MemberRecord {
    pub fn new(name: impl Into<String>, kind: MemberKind, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            kind,
            modifiers: Modifiers::PUBLIC,
            return_type,
            parameters: Vec::new(),
            type_params: Vec::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<ParamRecord>) -> Self {
        self.parameters = parameters;
        self
    }
}

impl ParamRecord {
    pub fn new(name: impl Into<String>, param_type: TypeRef) -> Self {
        Self { name: name.into(), param_type, modifiers: ParamModifiers::empty() }
    }
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named { name: name.into(), arity: 0 }
    }

    pub fn generic(name: impl Into<String>, arity: u32) -> Self {
        TypeRef::Named { name: name.into(), arity }
    }

    /// `definition{args}` where the definition is a named generic.
    pub fn constructed(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        let arity = args.len() as u32;
        TypeRef::Generic {
            definition: Box::new(TypeRef::Named { name: name.into(), arity }),
            args,
        }
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array { element: Box::new(element), rank: 1 }
    }

    pub fn class_param(index: u32) -> Self {
        TypeRef::ClassParam { index }
    }

    pub fn method_param(index: u32) -> Self {
        TypeRef::MethodParam { index }
    }
}

// =============================================================================
// Lowering
// =============================================================================

struct LowerCtx<'a> {
    class: &'a str,
    class_param_names: &'a [String],
    /// Present while lowering one member's records.
    member: Option<(MemberId, &'a [String])>,
}

impl LowerCtx<'_> {
    fn param_name(names: &[String], index: u32) -> String {
        names
            .get(index as usize)
            .cloned()
            .unwrap_or_else(|| format!("T{index}"))
    }
}

impl TypeRef {
    fn lower(&self, ctx: &LowerCtx<'_>) -> TypeExpr {
        match self {
            TypeRef::Named { name, arity } => {
                if name == well_known::VOID {
                    TypeExpr::Void
                } else {
                    TypeExpr::generic(name.clone(), *arity)
                }
            }
            TypeRef::Generic { definition, args } => TypeExpr::constructed(
                definition.lower(ctx),
                args.iter().map(|a| a.lower(ctx)),
            ),
            TypeRef::Array { element, rank } => {
                TypeExpr::array_with_rank(element.lower(ctx), *rank)
            }
            TypeRef::ClassParam { index } => TypeExpr::Param(ParamRef {
                owner: ParamOwner::Class(ctx.class.to_string()),
                index: *index,
                name: LowerCtx::param_name(ctx.class_param_names, *index),
            }),
            // A member-parameter reference outside member context is
            // malformed metadata; an invalid owner never matches anything.
            TypeRef::MethodParam { index } => match ctx.member {
                Some((id, names)) => TypeExpr::Param(ParamRef {
                    owner: ParamOwner::Member(id),
                    index: *index,
                    name: LowerCtx::param_name(names, *index),
                }),
                None => TypeExpr::Param(ParamRef {
                    owner: ParamOwner::Member(MemberId::INVALID),
                    index: *index,
                    name: format!("T{index}"),
                }),
            },
        }
    }
}

fn lower_type_params(
    records: &[TypeParamRecord],
    ctx: &LowerCtx<'_>,
) -> Vec<TypeParam> {
    records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            TypeParam::new(rec.name.clone(), i as u32)
                .with_constraints(rec.constraints.iter().map(|c| c.lower(ctx)).collect())
        })
        .collect()
}

impl TypeRecord {
    /// Lowers this record into a class symbol. Base types, type parameters,
    /// and attributes are resolved now; member records are retained and
    /// lowered on first member access.
    pub fn lower(&self) -> ClassSymbol {
        let class_param_names: Vec<String> =
            self.type_params.iter().map(|p| p.name.clone()).collect();
        let ctx = LowerCtx {
            class: &self.name,
            class_param_names: &class_param_names,
            member: None,
        };
        let type_params = lower_type_params(&self.type_params, &ctx);
        let bases: Vec<TypeExpr> = self.bases.iter().map(|b| b.lower(&ctx)).collect();
        ClassSymbol::new(self.name.clone(), self.kind)
            .with_modifiers(self.modifiers)
            .with_type_params(type_params)
            .with_bases(bases)
            .with_attributes(self.attributes.clone())
            .with_member_records(self.members.clone())
    }
}

/// Lowers retained member records against their declaring class. Called once
/// per class from `ClassSymbol::members`.
pub(crate) fn lower_members(class: &ClassSymbol, records: &[MemberRecord]) -> Vec<Member> {
    let class_param_names: Vec<String> =
        class.type_params().iter().map(|p| p.name.clone()).collect();
    records
        .iter()
        .map(|rec| {
            let mut member = Member::new(
                rec.name.clone(),
                rec.kind,
                class.qualified_name(),
                TypeExpr::Void,
            )
            .with_modifiers(rec.modifiers);
            let member_param_names: Vec<String> =
                rec.type_params.iter().map(|p| p.name.clone()).collect();
            let ctx = LowerCtx {
                class: class.qualified_name(),
                class_param_names: &class_param_names,
                member: Some((member.id(), &member_param_names)),
            };
            member.type_params = lower_type_params(&rec.type_params, &ctx);
            member.return_type = rec.return_type.lower(&ctx);
            member.parameters = rec
                .parameters
                .iter()
                .map(|p| Parameter {
                    name: p.name.clone(),
                    param_type: p.param_type.lower(&ctx),
                    modifiers: p.modifiers,
                })
                .collect();
            member
        })
        .collect()
}
