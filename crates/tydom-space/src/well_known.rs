//! Cached class handles and expression builders for the built-in types.
//!
//! The engine's special cases need the `core` classes themselves, not just
//! their names; [`WellKnownTypes`] resolves each once against the imported
//! core space. The free functions build the type expressions client code
//! asks about most.

use crate::space::SymbolSpace;
use std::sync::Arc;
use tydom_model::expr::TypeExpr;
use tydom_model::symbols::ClassSymbol;
use tydom_model::well_known as names;

/// Handles to the `core` classes the resolution engine treats specially,
/// resolved once per registry.
pub struct WellKnownTypes {
    pub object: Arc<ClassSymbol>,
    pub void: Arc<ClassSymbol>,
    pub string: Arc<ClassSymbol>,
    pub char: Arc<ClassSymbol>,
    pub boolean: Arc<ClassSymbol>,
    pub delegate: Arc<ClassSymbol>,
    pub disposable: Arc<ClassSymbol>,
    pub enumerable: Arc<ClassSymbol>,
    pub collection: Arc<ClassSymbol>,
    pub list: Arc<ClassSymbol>,
    pub enumerator: Arc<ClassSymbol>,
    pub enumerable_generic: Arc<ClassSymbol>,
    pub collection_generic: Arc<ClassSymbol>,
    pub list_generic: Arc<ClassSymbol>,
    pub enumerator_generic: Arc<ClassSymbol>,
    pub array_list: Arc<ClassSymbol>,
    pub dictionary: Arc<ClassSymbol>,
    pub key_value_pair: Arc<ClassSymbol>,
}

impl WellKnownTypes {
    /// Resolves every handle against the imported core space. A missing
    /// name is a defect in the built-in descriptor.
    pub(crate) fn new(core: &SymbolSpace) -> Self {
        let class = |name: &str| {
            core.local_class(name)
                .expect("core module must declare every well-known type")
        };
        Self {
            object: class(names::OBJECT),
            void: class(names::VOID),
            string: class(names::STRING),
            char: class(names::CHAR),
            boolean: class(names::BOOLEAN),
            delegate: class(names::DELEGATE),
            disposable: class(names::DISPOSABLE),
            enumerable: class(names::ENUMERABLE),
            collection: class(names::COLLECTION),
            list: class(names::LIST),
            enumerator: class(names::ENUMERATOR),
            enumerable_generic: class(names::ENUMERABLE_G),
            collection_generic: class(names::COLLECTION_G),
            list_generic: class(names::LIST_G),
            enumerator_generic: class(names::ENUMERATOR_G),
            array_list: class(names::ARRAY_LIST),
            dictionary: class(names::DICTIONARY),
            key_value_pair: class(names::KEY_VALUE_PAIR),
        }
    }
}

// =============================================================================
// Expression builders
// =============================================================================

pub fn object_type() -> TypeExpr {
    TypeExpr::named(names::OBJECT)
}

pub fn string_type() -> TypeExpr {
    TypeExpr::named(names::STRING)
}

pub fn char_type() -> TypeExpr {
    TypeExpr::named(names::CHAR)
}

pub fn boolean_type() -> TypeExpr {
    TypeExpr::named(names::BOOLEAN)
}

pub fn int32_type() -> TypeExpr {
    TypeExpr::named(names::INT32)
}

fn of(definition: &str, args: Vec<TypeExpr>) -> TypeExpr {
    TypeExpr::constructed(TypeExpr::generic(definition, args.len() as u32), args)
}

/// `core.collections.generic.Enumerable{element}`.
pub fn enumerable_of(element: TypeExpr) -> TypeExpr {
    of(names::ENUMERABLE_G, vec![element])
}

/// `core.collections.generic.List{element}`.
pub fn list_of(element: TypeExpr) -> TypeExpr {
    of(names::LIST_G, vec![element])
}

/// `core.collections.generic.ArrayList{element}`.
pub fn array_list_of(element: TypeExpr) -> TypeExpr {
    of(names::ARRAY_LIST, vec![element])
}

/// `core.collections.generic.Dictionary{key, value}`.
pub fn dictionary_of(key: TypeExpr, value: TypeExpr) -> TypeExpr {
    of(names::DICTIONARY, vec![key, value])
}

/// `core.collections.generic.KeyValuePair{key, value}`.
pub fn key_value_pair_of(key: TypeExpr, value: TypeExpr) -> TypeExpr {
    of(names::KEY_VALUE_PAIR, vec![key, value])
}

/// `core.Predicate{subject}`.
pub fn predicate_of(subject: TypeExpr) -> TypeExpr {
    of(names::PREDICATE, vec![subject])
}

/// `core.Converter{input, output}`.
pub fn converter_of(input: TypeExpr, output: TypeExpr) -> TypeExpr {
    of(names::CONVERTER, vec![input, output])
}

/// `core.Action{subject}`.
pub fn action_of(subject: TypeExpr) -> TypeExpr {
    of(names::ACTION, vec![subject])
}
