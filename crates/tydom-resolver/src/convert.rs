//! Implicit conversion.
//!
//! `conversion_exists` answers assignment compatibility the way the host
//! language's implicit-conversion rules do, over possibly incomplete
//! symbol graphs. It is a pure query: unresolvable names narrow the answer
//! to false, they never fault.

use crate::inherit::inheritance_tree;
use crate::widening;
use tydom_model::expr::{LambdaType, TypeExpr};
use tydom_model::symbols::ClassKind;
use tydom_space::SymbolSpace;

/// True when `source` implicitly converts to `target`.
///
/// The rules, in order: a type-parameter target never accepts (the
/// asymmetry that keeps overload applicability a separate, looser check);
/// canonical-name identity; null to any reference type; a lambda source is
/// judged against delegate targets only; numeric widening; array
/// covariance over reference elements of equal rank; finally membership of
/// `target` in `source`'s inheritance tree, which covers upcasts, exact
/// interface instantiations, and a type-parameter source reaching targets
/// through its constraint set.
pub fn conversion_exists(space: &SymbolSpace, source: &TypeExpr, target: &TypeExpr) -> bool {
    if target.as_param().is_some() {
        return false;
    }
    let target_name = target.canonical_name();
    if source.canonical_name() == target_name {
        return true;
    }
    match source {
        TypeExpr::Null => return is_reference_type(space, target),
        TypeExpr::Lambda(lambda) => return lambda_to_delegate(space, lambda, target),
        _ => {}
    }
    if let (Some(s), Some(t)) = (source.as_named(), target.as_named()) {
        if widening::widens_to(&s.name, &t.name) {
            return true;
        }
    }
    if let (Some(s), Some(t)) = (source.as_array(), target.as_array()) {
        if s.rank == t.rank
            && is_reference_type(space, &s.element)
            && is_reference_type(space, &t.element)
            && conversion_exists(space, &s.element, &t.element)
        {
            return true;
        }
    }
    inheritance_tree(space, source).contains(&target_name)
}

/// Reference-type test for the null-assignment and array-covariance rules.
/// Unresolvable names and unfixed type parameters are not provably
/// reference types and answer false.
fn is_reference_type(space: &SymbolSpace, ty: &TypeExpr) -> bool {
    match ty {
        TypeExpr::Null | TypeExpr::Array(_) => true,
        TypeExpr::Named(_) | TypeExpr::Constructed(_) => match ty.underlying_class(space) {
            Some(class) => matches!(
                class.kind(),
                ClassKind::Class | ClassKind::Interface | ClassKind::Delegate
            ),
            None => false,
        },
        TypeExpr::Param(_) | TypeExpr::Lambda(_) | TypeExpr::Void => false,
    }
}

/// Anonymous-function-to-delegate conversion.
///
/// The target must resolve to a delegate with an invocation member. A
/// declared parameter list must match that member's parameter count with
/// each type exactly equal after the delegate's type arguments are
/// substituted in; an absent list is a wildcard. A known return type must
/// convert to the substituted delegate return type.
fn lambda_to_delegate(space: &SymbolSpace, lambda: &LambdaType, target: &TypeExpr) -> bool {
    let Some(class) = target.underlying_class(space) else {
        return false;
    };
    if class.kind() != ClassKind::Delegate {
        return false;
    }
    let Some(invoke) = class.invoke_member() else {
        return false;
    };
    let owner = class.param_owner();
    let args: &[TypeExpr] = target.as_constructed().map(|c| c.args.as_slice()).unwrap_or(&[]);

    if let Some(declared) = &lambda.params {
        if declared.len() != invoke.parameters.len() {
            return false;
        }
        for (given, formal) in declared.iter().zip(&invoke.parameters) {
            let expected = formal.param_type.substitute(&owner, args);
            if given.canonical_name() != expected.canonical_name() {
                return false;
            }
        }
    }
    match &lambda.return_type {
        None => true,
        Some(ret) => {
            let expected = invoke.return_type.substitute(&owner, args);
            conversion_exists(space, ret, &expected)
        }
    }
}

#[cfg(test)]
#[path = "tests/convert_tests.rs"]
mod convert_tests;
