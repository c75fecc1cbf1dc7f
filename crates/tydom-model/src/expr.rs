//! Type expressions and substitution.
//!
//! Every type mentioned anywhere in the model (base types, member types,
//! parameter types, query arguments) is a [`TypeExpr`]. The enum is closed:
//! conversion and inheritance rules match exhaustively over it, so adding a
//! variant forces every rule site to take a position.
//!
//! Expressions reference classes by qualified name, never by embedded object
//! graph, so any single expression is a finite tree even though classes refer
//! to each other mutually at the symbol-space level.

use crate::symbols::{ClassSymbol, ParamOwner};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Type-argument list for constructed types. Nearly all real generics have
/// one or two arguments.
pub type TypeArgs = SmallVec<[TypeExpr; 2]>;

/// Resolves qualified class names to class symbols.
///
/// Implemented by symbol spaces; expressions only need this narrow seam, so
/// the model crate stays independent of the space crate.
pub trait ClassResolver {
    fn find_class(&self, qualified_name: &str) -> Option<Arc<ClassSymbol>>;
}

// =============================================================================
// TypeExpr - Closed Type-Expression Union
// =============================================================================

/// A type expression.
///
/// | Variant | Example rendering |
/// |---------|-------------------|
/// | `Named` | `core.String` |
/// | `Array` | `core.String[]`, `core.Int32[,]` |
/// | `Constructed` | `core.collections.generic.List{core.String}` |
/// | `Param` | `T` |
/// | `Lambda` | `fn(core.String)->core.Boolean`, `fn(..)` |
/// | `Null` | `null` |
/// | `Void` | `core.Void` |
///
/// The rendering above is the *canonical name*: two expressions denote the
/// same type exactly when their canonical names are equal, and inheritance
/// walks deduplicate by it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// Reference to a class, interface, struct, enum, or delegate by
    /// qualified name. `arity` is the declared type-parameter count of the
    /// referenced definition (zero for non-generics and for references that
    /// do not care).
    Named(NamedType),
    /// Array over an element type. `rank` is the number of dimensions.
    Array(ArrayType),
    /// A generic definition bound to concrete type arguments.
    Constructed(Box<ConstructedType>),
    /// Reference to a type parameter of a class or member.
    Param(ParamRef),
    /// Anonymous function signature, produced for lambda expressions before
    /// their target delegate type is known.
    Lambda(LambdaType),
    /// The type of the null literal.
    Null,
    /// The "nothing" return type. Canonicalized at import time so every
    /// occurrence compares equal.
    Void,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedType {
    pub name: String,
    pub arity: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArrayType {
    pub element: Box<TypeExpr>,
    pub rank: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConstructedType {
    pub definition: Box<TypeExpr>,
    pub args: TypeArgs,
}

/// Reference to a type parameter. Identity is `(owner, index)`; `name` is
/// carried for display only and never compared.
#[derive(Clone, Debug)]
pub struct ParamRef {
    pub owner: ParamOwner,
    pub index: u32,
    pub name: String,
}

impl PartialEq for ParamRef {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.index == other.index
    }
}

impl Eq for ParamRef {}

impl std::hash::Hash for ParamRef {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.index.hash(state);
    }
}

/// Anonymous function signature.
///
/// `params: None` means the lambda declared no parameter list at all and
/// matches any delegate parameter list (wildcard). That is distinct from
/// `Some(vec![])`, an explicit empty list that only matches zero-parameter
/// delegates. `return_type: None` means the body's type has not been
/// inferred yet and is treated as compatible.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LambdaType {
    pub return_type: Option<Box<TypeExpr>>,
    pub params: Option<Vec<TypeExpr>>,
}

// =============================================================================
// Construction helpers
// =============================================================================

impl TypeExpr {
    /// Reference to a non-generic class by qualified name.
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(NamedType { name: name.into(), arity: 0 })
    }

    /// Reference to a generic definition by qualified name and arity.
    pub fn generic(name: impl Into<String>, arity: u32) -> Self {
        TypeExpr::Named(NamedType { name: name.into(), arity })
    }

    /// Single-dimension array over `element`.
    pub fn array(element: TypeExpr) -> Self {
        Self::array_with_rank(element, 1)
    }

    pub fn array_with_rank(element: TypeExpr, rank: u32) -> Self {
        TypeExpr::Array(ArrayType { element: Box::new(element), rank })
    }

    /// `definition` bound to `args`.
    pub fn constructed(definition: TypeExpr, args: impl IntoIterator<Item = TypeExpr>) -> Self {
        TypeExpr::Constructed(Box::new(ConstructedType {
            definition: Box::new(definition),
            args: args.into_iter().collect(),
        }))
    }

    pub fn param(owner: ParamOwner, index: u32, name: impl Into<String>) -> Self {
        TypeExpr::Param(ParamRef { owner, index, name: name.into() })
    }

    pub fn lambda(return_type: Option<TypeExpr>, params: Option<Vec<TypeExpr>>) -> Self {
        TypeExpr::Lambda(LambdaType { return_type: return_type.map(Box::new), params })
    }
}

// =============================================================================
// Queries
// =============================================================================

impl TypeExpr {
    pub fn is_null(&self) -> bool {
        matches!(self, TypeExpr::Null)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeExpr::Void)
    }

    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            TypeExpr::Named(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayType> {
        match self {
            TypeExpr::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_constructed(&self) -> Option<&ConstructedType> {
        match self {
            TypeExpr::Constructed(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_param(&self) -> Option<&ParamRef> {
        match self {
            TypeExpr::Param(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_lambda(&self) -> Option<&LambdaType> {
        match self {
            TypeExpr::Lambda(l) => Some(l),
            _ => None,
        }
    }

    /// Qualified name of the class this expression refers to, if any.
    /// Constructed types answer with their definition's name.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            TypeExpr::Named(n) => Some(&n.name),
            TypeExpr::Constructed(c) => c.definition.class_name(),
            _ => None,
        }
    }

    /// Resolves this expression to its declaring class symbol.
    ///
    /// `Named` and `Constructed` resolve through `resolver`; every other
    /// variant has no declaring class and answers `None`. A name that does
    /// not resolve (reference still pending) also answers `None`: queries
    /// narrow over incomplete graphs instead of failing.
    pub fn underlying_class<R: ClassResolver + ?Sized>(
        &self,
        resolver: &R,
    ) -> Option<Arc<ClassSymbol>> {
        match self {
            TypeExpr::Named(n) => resolver.find_class(&n.name),
            TypeExpr::Constructed(c) => c.definition.underlying_class(resolver),
            _ => None,
        }
    }

    /// Canonical name (see the variant table on [`TypeExpr`]).
    pub fn canonical_name(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Substitution
// =============================================================================

impl TypeExpr {
    /// Replaces every [`ParamRef`] bound to `owner` with the entry of `args`
    /// at its index, rebuilding the tree. Everything else is preserved, so
    /// substitution is transitive through nested constructed, array, and
    /// lambda forms.
    ///
    /// An index with no corresponding entry in `args` (arity mismatch in the
    /// input graph) leaves the reference in place rather than failing.
    ///
    /// Substituting a definition's own parameter list over itself is the
    /// identity, and applying the same substitution twice equals applying it
    /// once: after the first pass no reference bound to `owner` remains
    /// except ones reintroduced by `args` themselves, which map to
    /// themselves.
    pub fn substitute(&self, owner: &ParamOwner, args: &[TypeExpr]) -> TypeExpr {
        match self {
            TypeExpr::Param(p) if p.owner == *owner => match args.get(p.index as usize) {
                Some(replacement) => replacement.clone(),
                None => self.clone(),
            },
            TypeExpr::Param(_) | TypeExpr::Named(_) | TypeExpr::Null | TypeExpr::Void => {
                self.clone()
            }
            TypeExpr::Array(a) => TypeExpr::Array(ArrayType {
                element: Box::new(a.element.substitute(owner, args)),
                rank: a.rank,
            }),
            TypeExpr::Constructed(c) => TypeExpr::Constructed(Box::new(ConstructedType {
                definition: Box::new(c.definition.substitute(owner, args)),
                args: c.args.iter().map(|a| a.substitute(owner, args)).collect(),
            })),
            TypeExpr::Lambda(l) => TypeExpr::Lambda(LambdaType {
                return_type: l
                    .return_type
                    .as_ref()
                    .map(|r| Box::new(r.substitute(owner, args))),
                params: l
                    .params
                    .as_ref()
                    .map(|ps| ps.iter().map(|p| p.substitute(owner, args)).collect()),
            }),
        }
    }
}

// =============================================================================
// Canonical naming
// =============================================================================

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(n) => f.write_str(&n.name),
            TypeExpr::Array(a) => {
                write!(f, "{}[", a.element)?;
                for _ in 1..a.rank {
                    f.write_str(",")?;
                }
                f.write_str("]")
            }
            TypeExpr::Constructed(c) => {
                write!(f, "{}{{", c.definition)?;
                for (i, arg) in c.args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str("}")
            }
            TypeExpr::Param(p) => f.write_str(&p.name),
            TypeExpr::Lambda(l) => {
                f.write_str("fn(")?;
                match &l.params {
                    None => f.write_str("..")?,
                    Some(ps) => {
                        for (i, p) in ps.iter().enumerate() {
                            if i > 0 {
                                f.write_str(",")?;
                            }
                            write!(f, "{p}")?;
                        }
                    }
                }
                f.write_str(")")?;
                if let Some(ret) = &l.return_type {
                    write!(f, "->{ret}")?;
                }
                Ok(())
            }
            TypeExpr::Null => f.write_str("null"),
            TypeExpr::Void => f.write_str(crate::well_known::VOID),
        }
    }
}

#[cfg(test)]
#[path = "tests/expr_tests.rs"]
mod expr_tests;
