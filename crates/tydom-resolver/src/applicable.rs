//! Overload applicability.
//!
//! Deliberately looser than conversion: while a candidate method's own type
//! parameters are unfixed, an argument must not be rejected just because it
//! is not yet known to convert. Constraint checking happens later, at
//! instantiation, not here.

use crate::convert::conversion_exists;
use crate::inherit::inheritance_tree;
use tydom_model::expr::TypeExpr;
use tydom_model::symbols::Member;
use tydom_space::SymbolSpace;

/// True when `argument` can occupy a parameter slot of type `expected` on
/// a call to `context`, before the call's type arguments are fixed.
///
/// An `expected` that is one of `context`'s own type parameters accepts
/// anything. The check recurses structurally so that rule applies at any
/// depth: arrays of equal rank recurse on elements, and a constructed
/// expectation recurses pairwise against each node of the argument's
/// inheritance tree built from the same generic definition. Everything
/// else falls back to [`conversion_exists`].
pub fn is_applicable(
    space: &SymbolSpace,
    argument: &TypeExpr,
    expected: &TypeExpr,
    context: Option<&Member>,
) -> bool {
    if let (Some(param), Some(member)) = (expected.as_param(), context) {
        if member.owns_param(param) {
            return true;
        }
    }

    if let (Some(given), Some(wanted)) = (argument.as_array(), expected.as_array()) {
        if given.rank == wanted.rank {
            return is_applicable(space, &given.element, &wanted.element, context);
        }
    }

    if let Some(wanted) = expected.as_constructed() {
        let definition = wanted.definition.canonical_name();
        for node in inheritance_tree(space, argument).nodes() {
            let Some(found) = node.ty.as_constructed() else {
                continue;
            };
            if found.definition.canonical_name() != definition
                || found.args.len() != wanted.args.len()
            {
                continue;
            }
            let pairwise_ok = found
                .args
                .iter()
                .zip(wanted.args.iter())
                .all(|(given, wanted)| is_applicable(space, given, wanted, context));
            if pairwise_ok {
                return true;
            }
        }
    }

    conversion_exists(space, argument, expected)
}

#[cfg(test)]
#[path = "tests/applicable_tests.rs"]
mod applicable_tests;
