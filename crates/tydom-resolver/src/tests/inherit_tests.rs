use crate::inherit::{inheritance_tree, type_argument_to_ancestor};
use std::sync::Arc;
use tydom_common::limits::MAX_INHERITANCE_NODES;
use tydom_model::expr::TypeExpr;
use tydom_model::symbols::{ClassKind, ClassSymbol, Member, MemberKind, TypeParam};
use tydom_model::unit::CompilationUnit;
use tydom_model::well_known as wk;
use tydom_space::well_known::{
    array_list_of, dictionary_of, enumerable_of, int32_type, list_of, string_type,
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

fn names(tree: &crate::inherit::InheritanceTree) -> Vec<String> {
    let mut names: Vec<String> = tree.types().map(TypeExpr::canonical_name).collect();
    names.sort();
    names
}

#[test]
fn test_tree_of_class_deriving_generic_container_over_string() {
    let tags = ClassSymbol::new("ui.Tags", ClassKind::Class)
        .with_bases(vec![array_list_of(string_type())]);
    let (_registry, space) = ui_space(vec![tags]);

    let tree = inheritance_tree(&space, &TypeExpr::named("ui.Tags"));
    let mut expected = vec![
        "ui.Tags".to_string(),
        format!("{}{{{}}}", wk::ARRAY_LIST, wk::STRING),
        wk::OBJECT.to_string(),
        format!("{}{{{}}}", wk::LIST_G, wk::STRING),
        wk::LIST.to_string(),
        format!("{}{{{}}}", wk::READ_ONLY_LIST_G, wk::STRING),
        format!("{}{{{}}}", wk::COLLECTION_G, wk::STRING),
        wk::COLLECTION.to_string(),
        format!("{}{{{}}}", wk::READ_ONLY_COLLECTION_G, wk::STRING),
        format!("{}{{{}}}", wk::ENUMERABLE_G, wk::STRING),
        wk::ENUMERABLE.to_string(),
    ];
    expected.sort();
    assert_eq!(names(&tree), expected);

    // Breadth-first: the type itself first, its declared base next.
    assert_eq!(tree.nodes()[0].ty.canonical_name(), "ui.Tags");
    assert_eq!(tree.nodes()[0].depth, 0);
    assert_eq!(
        tree.nodes()[1].ty.canonical_name(),
        format!("{}{{{}}}", wk::ARRAY_LIST, wk::STRING)
    );
    assert_eq!(tree.nodes()[1].depth, 1);
}

#[test]
fn test_string_array_tree_has_no_read_only_interfaces() {
    let registry = Registry::new();
    let space = registry.core_space();

    let tree = inheritance_tree(space, &TypeExpr::array(string_type()));
    let mut expected = vec![
        format!("{}[]", wk::STRING),
        wk::OBJECT.to_string(),
        format!("{}{{{}}}", wk::LIST_G, wk::STRING),
        format!("{}{{{}}}", wk::COLLECTION_G, wk::STRING),
        format!("{}{{{}}}", wk::ENUMERABLE_G, wk::STRING),
        wk::LIST.to_string(),
        wk::COLLECTION.to_string(),
        wk::ENUMERABLE.to_string(),
    ];
    expected.sort();
    assert_eq!(names(&tree), expected);
}

#[test]
fn test_multi_dimensional_array_skips_generic_interfaces() {
    let registry = Registry::new();
    let tree = inheritance_tree(
        registry.core_space(),
        &TypeExpr::array_with_rank(string_type(), 2),
    );
    assert!(tree.contains(wk::LIST));
    assert!(tree.contains(wk::OBJECT));
    assert!(!tree.contains(&format!("{}{{{}}}", wk::LIST_G, wk::STRING)));
}

#[test]
fn test_unresolvable_base_is_emitted_but_not_expanded() {
    let broken = ClassSymbol::new("ui.Broken", ClassKind::Class)
        .with_bases(vec![TypeExpr::named("ghost.Missing")]);
    let (_registry, space) = ui_space(vec![broken]);

    let tree = inheritance_tree(&space, &TypeExpr::named("ui.Broken"));
    assert!(tree.contains("ghost.Missing"));
    // No resolvable declared base, so the implicit edge fills in.
    assert!(tree.contains(wk::OBJECT));
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_class_param_expands_constraints_member_param_does_not() {
    let sorter = ClassSymbol::new("ui.Sorter", ClassKind::Class)
        .with_type_params(vec![
            TypeParam::new("T", 0).with_constraints(vec![enumerable_of(string_type())]),
        ])
        .with_bases(vec![TypeExpr::named(wk::OBJECT)]);
    let (_registry, space) = ui_space(vec![sorter]);

    let class = space.local_class("ui.Sorter").unwrap();
    let tree = inheritance_tree(&space, &class.param_ref(0));
    assert!(tree.contains(&format!("{}{{{}}}", wk::ENUMERABLE_G, wk::STRING)));
    assert!(tree.contains(wk::ENUMERABLE));
    assert!(tree.contains(wk::OBJECT));
    assert_eq!(tree.len(), 4);

    // A member-owned parameter's declaration is unreachable from a space;
    // it widens straight to the universal base type.
    let pick = Member::new("pick", MemberKind::Method, "ui.Util", TypeExpr::Void)
        .with_type_params(vec![TypeParam::new("T", 0)]);
    let tree = inheritance_tree(&space, &pick.param_ref(0));
    assert_eq!(tree.len(), 2);
    assert!(tree.contains(wk::OBJECT));
}

#[test]
fn test_self_referential_base_terminates_by_dedup() {
    let cyclic = ClassSymbol::new("ui.Cyclic", ClassKind::Class)
        .with_bases(vec![list_of(TypeExpr::named("ui.Cyclic"))]);
    let (_registry, space) = ui_space(vec![cyclic]);

    let tree = inheritance_tree(&space, &TypeExpr::named("ui.Cyclic"));
    assert!(tree.len() < 10);
    assert!(tree.contains(&format!("{}{{ui.Cyclic}}", wk::LIST_G)));
    assert!(tree.contains(wk::OBJECT));
}

#[test]
fn test_growing_generic_base_stops_at_node_budget() {
    // Grow{T} : Grow{Grow{T}} deepens forever; only the budget ends it.
    let grow = ClassSymbol::new("ui.Grow", ClassKind::Class)
        .with_type_params(vec![TypeParam::new("T", 0)]);
    let t = grow.param_ref(0);
    let grow = grow.with_bases(vec![TypeExpr::constructed(
        TypeExpr::generic("ui.Grow", 1),
        [TypeExpr::constructed(TypeExpr::generic("ui.Grow", 1), [t])],
    )]);
    let (_registry, space) = ui_space(vec![grow]);

    let tree = inheritance_tree(
        &space,
        &TypeExpr::constructed(TypeExpr::generic("ui.Grow", 1), [int32_type()]),
    );
    assert_eq!(tree.len(), MAX_INHERITANCE_NODES);
}

#[test]
fn test_projection_through_declared_edges() {
    let registry = Registry::new();
    let space = registry.core_space();
    let pair_ancestor = space.local_class(wk::ENUMERABLE_G).unwrap();

    // Dictionary{String, Int32} enumerates KeyValuePair{String, Int32}.
    let dict = dictionary_of(string_type(), int32_type());
    let element = type_argument_to_ancestor(space, &dict, &pair_ancestor, 0).unwrap();
    assert_eq!(
        element.canonical_name(),
        format!("{}{{{},{}}}", wk::KEY_VALUE_PAIR, wk::STRING, wk::INT32)
    );
}

#[test]
fn test_projection_composes_through_derived_generics() {
    // Wrapper{T} : ArrayList{T}; Wrapper{String} passes String to List's
    // element parameter two hops down.
    let wrapper = ClassSymbol::new("ui.Wrapper", ClassKind::Class)
        .with_type_params(vec![TypeParam::new("T", 0)]);
    let wrapper_param = wrapper.param_ref(0);
    let wrapper = wrapper.with_bases(vec![array_list_of(wrapper_param)]);
    let (registry, space) = ui_space(vec![wrapper]);

    let list = registry.core_space().local_class(wk::LIST_G).unwrap();
    let instance =
        TypeExpr::constructed(TypeExpr::generic("ui.Wrapper", 1), [string_type()]);
    let element = type_argument_to_ancestor(&space, &instance, &list, 0).unwrap();
    assert_eq!(element.canonical_name(), wk::STRING);
}

#[test]
fn test_projection_special_cases_string_and_arrays() {
    let registry = Registry::new();
    let space = registry.core_space();

    let enumerable = space.local_class(wk::ENUMERABLE_G).unwrap();
    let via_string =
        type_argument_to_ancestor(space, &string_type(), &enumerable, 0).unwrap();
    assert_eq!(via_string.canonical_name(), wk::CHAR);

    let collection = space.local_class(wk::COLLECTION_G).unwrap();
    let via_array =
        type_argument_to_ancestor(space, &TypeExpr::array(string_type()), &collection, 0)
            .unwrap();
    assert_eq!(via_array.canonical_name(), wk::STRING);

    // Multi-dimensional arrays have no element-interface projection.
    let rank2 = TypeExpr::array_with_rank(string_type(), 2);
    assert!(type_argument_to_ancestor(space, &rank2, &collection, 0).is_none());
}

#[test]
fn test_projection_misses_yield_none() {
    let registry = Registry::new();
    let space = registry.core_space();

    // Not an ancestor at all.
    let dictionary = space.local_class(wk::DICTIONARY).unwrap();
    assert!(type_argument_to_ancestor(space, &string_type(), &dictionary, 0).is_none());

    // A raw reference reaches the target but binds nothing at it.
    let list = space.local_class(wk::LIST_G).unwrap();
    let raw = TypeExpr::generic(wk::LIST_G, 1);
    assert!(type_argument_to_ancestor(space, &raw, &list, 0).is_none());
}

#[test]
#[should_panic(expected = "type argument index")]
fn test_projection_index_beyond_arity_panics() {
    let registry = Registry::new();
    let space = registry.core_space();
    let list = space.local_class(wk::LIST_G).unwrap();
    let _ = type_argument_to_ancestor(space, &list_of(string_type()), &list, 1);
}
