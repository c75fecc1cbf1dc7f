use crate::convert::conversion_exists;
use std::sync::Arc;
use tydom_model::expr::TypeExpr;
use tydom_model::symbols::{ClassKind, ClassSymbol, TypeParam};
use tydom_model::unit::CompilationUnit;
use tydom_model::well_known as wk;
use tydom_space::well_known::{
    action_of, array_list_of, boolean_type, converter_of, enumerable_of, int32_type, list_of,
    object_type, predicate_of, string_type,
};
use tydom_space::{Registry, SymbolSpace};

fn ui_space(classes: Vec<ClassSymbol>) -> (Registry, Arc<SymbolSpace>) {
    let registry = Registry::new();
    let mut unit = CompilationUnit::new("ui");
    for class in classes {
        unit.add_class(class).unwrap();
    }
    unit.freeze();
    let space = Arc::new(SymbolSpace::from_source("ui", unit));
    space.add_reference(registry.core_space());
    (registry, space)
}

fn widget_fixture() -> (Registry, Arc<SymbolSpace>) {
    ui_space(vec![
        ClassSymbol::new("ui.Widget", ClassKind::Class)
            .with_bases(vec![object_type()]),
        ClassSymbol::new("ui.Button", ClassKind::Class)
            .with_bases(vec![TypeExpr::named("ui.Widget")]),
    ])
}

#[test]
fn test_identity_and_upcast() {
    let (_registry, space) = widget_fixture();
    let button = TypeExpr::named("ui.Button");
    let widget = TypeExpr::named("ui.Widget");

    assert!(conversion_exists(&space, &button, &button));
    assert!(conversion_exists(&space, &button, &widget));
    assert!(conversion_exists(&space, &button, &object_type()));
    assert!(!conversion_exists(&space, &widget, &button));
}

#[test]
fn test_null_converts_to_reference_types_only() {
    let (_registry, space) = widget_fixture();

    assert!(conversion_exists(&space, &TypeExpr::Null, &string_type()));
    assert!(conversion_exists(&space, &TypeExpr::Null, &TypeExpr::named("ui.Widget")));
    assert!(conversion_exists(&space, &TypeExpr::Null, &TypeExpr::array(int32_type())));
    assert!(conversion_exists(&space, &TypeExpr::Null, &list_of(string_type())));

    // Value types, unfixed parameters, unresolvable names: no.
    assert!(!conversion_exists(&space, &TypeExpr::Null, &int32_type()));
    assert!(!conversion_exists(&space, &TypeExpr::Null, &TypeExpr::named("ghost.Missing")));
}

#[test]
fn test_numeric_widening_is_directional() {
    let registry = Registry::new();
    let space = registry.core_space();

    assert!(conversion_exists(space, &int32_type(), &TypeExpr::named(wk::INT64)));
    assert!(conversion_exists(space, &int32_type(), &TypeExpr::named(wk::FLOAT64)));
    assert!(conversion_exists(space, &TypeExpr::named(wk::CHAR), &TypeExpr::named(wk::UINT16)));
    assert!(!conversion_exists(space, &TypeExpr::named(wk::INT64), &int32_type()));
    assert!(!conversion_exists(space, &TypeExpr::named(wk::FLOAT64), &int32_type()));
    // Numerics still upcast like any struct.
    assert!(conversion_exists(space, &int32_type(), &object_type()));
}

#[test]
fn test_conversion_into_type_parameter_always_fails() {
    let holder = ClassSymbol::new("ui.Holder", ClassKind::Class)
        .with_type_params(vec![
            TypeParam::new("T", 0).with_constraints(vec![object_type()]),
        ]);
    let t = holder.param_ref(0);
    let (_registry, space) = ui_space(vec![holder]);

    // Even a source satisfying the constraint is rejected.
    assert!(!conversion_exists(&space, &string_type(), &t));
    assert!(!conversion_exists(&space, &TypeExpr::Null, &t));
    assert!(!conversion_exists(&space, &t, &t));
}

#[test]
fn test_conversion_out_of_type_parameter_follows_constraints() {
    let sorter = ClassSymbol::new("ui.Sorter", ClassKind::Class)
        .with_type_params(vec![
            TypeParam::new("T", 0).with_constraints(vec![enumerable_of(string_type())]),
        ]);
    let t = sorter.param_ref(0);
    let (_registry, space) = ui_space(vec![sorter]);

    assert!(conversion_exists(&space, &t, &object_type()));
    assert!(conversion_exists(&space, &t, &enumerable_of(string_type())));
    // The constraint's own ancestors are reachable too.
    assert!(conversion_exists(&space, &t, &TypeExpr::named(wk::ENUMERABLE)));
    assert!(!conversion_exists(&space, &t, &string_type()));
}

#[test]
fn test_array_covariance_over_reference_elements() {
    let registry = Registry::new();
    let space = registry.core_space();
    let strings = TypeExpr::array(string_type());
    let objects = TypeExpr::array(object_type());

    assert!(conversion_exists(space, &strings, &objects));
    assert!(!conversion_exists(space, &objects, &strings));
    // Value-type elements are not covariant.
    assert!(!conversion_exists(space, &TypeExpr::array(int32_type()), &objects));
    // Rank must match.
    assert!(!conversion_exists(
        space,
        &TypeExpr::array_with_rank(string_type(), 2),
        &objects
    ));
}

#[test]
fn test_array_converts_to_element_interfaces() {
    let registry = Registry::new();
    let space = registry.core_space();
    let strings = TypeExpr::array(string_type());

    assert!(conversion_exists(space, &strings, &list_of(string_type())));
    assert!(conversion_exists(space, &strings, &enumerable_of(string_type())));
    assert!(conversion_exists(space, &strings, &TypeExpr::named(wk::LIST)));
    // Exact type arguments only.
    assert!(!conversion_exists(space, &strings, &list_of(object_type())));
}

#[test]
fn test_constructed_type_converts_to_exact_interface_instantiation() {
    let registry = Registry::new();
    let space = registry.core_space();
    let array_list = array_list_of(string_type());

    assert!(conversion_exists(space, &array_list, &list_of(string_type())));
    assert!(conversion_exists(space, &array_list, &enumerable_of(string_type())));
    assert!(conversion_exists(space, &array_list, &object_type()));
    assert!(!conversion_exists(space, &array_list, &list_of(object_type())));
    assert!(!conversion_exists(
        space,
        &predicate_of(string_type()),
        &predicate_of(object_type())
    ));
}

#[test]
fn test_wildcard_lambda_converts_to_any_matching_delegate() {
    let registry = Registry::new();
    let space = registry.core_space();

    let wildcard = TypeExpr::lambda(None, None);
    assert!(conversion_exists(space, &wildcard, &predicate_of(string_type())));
    assert!(conversion_exists(
        space,
        &wildcard,
        &converter_of(string_type(), int32_type())
    ));
    // Only delegates accept anonymous functions.
    assert!(!conversion_exists(space, &wildcard, &string_type()));
    assert!(!conversion_exists(space, &wildcard, &object_type()));
}

#[test]
fn test_lambda_parameter_list_must_match_exactly() {
    let registry = Registry::new();
    let space = registry.core_space();
    let target = predicate_of(string_type());

    let exact = TypeExpr::lambda(Some(boolean_type()), Some(vec![string_type()]));
    assert!(conversion_exists(space, &exact, &target));

    // An explicit empty list is not a wildcard.
    let empty = TypeExpr::lambda(Some(boolean_type()), Some(vec![]));
    assert!(!conversion_exists(space, &empty, &target));

    let wrong_type = TypeExpr::lambda(Some(boolean_type()), Some(vec![int32_type()]));
    assert!(!conversion_exists(space, &wrong_type, &target));

    let too_many = TypeExpr::lambda(
        Some(boolean_type()),
        Some(vec![string_type(), string_type()]),
    );
    assert!(!conversion_exists(space, &too_many, &target));
}

#[test]
fn test_lambda_return_type_converts_per_conversion_rules() {
    let registry = Registry::new();
    let space = registry.core_space();

    // Int32 widens to Float64, so the return side is compatible.
    let widened = TypeExpr::lambda(Some(int32_type()), Some(vec![string_type()]));
    assert!(conversion_exists(
        space,
        &widened,
        &converter_of(string_type(), TypeExpr::named(wk::FLOAT64))
    ));

    // Int32 never converts to Boolean.
    let mismatched = TypeExpr::lambda(Some(int32_type()), Some(vec![string_type()]));
    assert!(!conversion_exists(space, &mismatched, &predicate_of(string_type())));

    // An uninferred return type is treated as compatible.
    let open = TypeExpr::lambda(None, Some(vec![string_type()]));
    assert!(conversion_exists(space, &open, &predicate_of(string_type())));

    // A void delegate accepts an open body but not one known to yield a value.
    assert!(conversion_exists(space, &open, &action_of(string_type())));
    let value_body = TypeExpr::lambda(Some(int32_type()), Some(vec![string_type()]));
    assert!(!conversion_exists(space, &value_body, &action_of(string_type())));
}
