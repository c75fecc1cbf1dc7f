//! Integration tests for the tydom semantic model.
//!
//! These tests verify end-to-end functionality of the pipeline:
//! - Importing module descriptors, built in code and parsed from JSON
//! - Registering spaces and resolving their references
//! - Asking resolution questions through the public facade

use std::sync::Arc;
use tydom::model::descriptor::{MemberRecord, ParamRecord, TypeRecord, TypeRef};
use tydom::model::well_known as wk;
use tydom::{
    ClassKind, MemberKind, ModuleDescriptor, ModuleIdentity, Registry, SymbolSpace, TypeExpr,
    common_type, conversion_exists,
};

/// Helper to parse a descriptor from its JSON exchange form and load it.
fn load_json(registry: &Registry, json: &str) -> Arc<SymbolSpace> {
    tydom::tracing_config::init_tracing();
    let descriptor: ModuleDescriptor =
        serde_json::from_str(json).expect("descriptor JSON must parse");
    registry.load(&descriptor).expect("descriptor must import")
}

/// Helper to build a small GUI module descriptor in code.
fn gui_descriptor() -> ModuleDescriptor {
    ModuleDescriptor::new(ModuleIdentity::new("gui").with_version("1.0.0"))
        .with_references(vec!["core".to_string()])
        .with_types(vec![
            TypeRecord::new("gui.View", ClassKind::Class)
                .with_bases(vec![TypeRef::named(wk::OBJECT)]),
            TypeRecord::new("gui.Label", ClassKind::Class)
                .with_bases(vec![TypeRef::named("gui.View")])
                .with_members(vec![
                    MemberRecord::new(
                        "text",
                        MemberKind::Property,
                        TypeRef::named(wk::STRING),
                    ),
                    MemberRecord::new("set_text", MemberKind::Method, TypeRef::named(wk::VOID))
                        .with_parameters(vec![ParamRecord::new(
                            "value",
                            TypeRef::named(wk::STRING),
                        )]),
                ]),
        ])
}

#[test]
fn test_json_descriptor_round_trips_through_import() {
    let json = r#"{
        "identity": { "name": "app", "version": "1.0.0" },
        "references": ["core"],
        "types": [
            {
                "name": "app.Greeter",
                "kind": "Class",
                "bases": [ { "Named": { "name": "core.Object" } } ],
                "members": [
                    {
                        "name": "greet",
                        "kind": "Method",
                        "return_type": { "Named": { "name": "core.String" } },
                        "parameters": [
                            { "name": "who", "param_type": { "Named": { "name": "core.String" } } }
                        ]
                    }
                ]
            }
        ]
    }"#;

    let registry = Registry::new();
    let space = load_json(&registry, json);

    assert_eq!(space.name(), "app");
    assert_eq!(space.pending_references(), vec!["core".to_string()]);

    // One space gains its `core` reference.
    assert_eq!(registry.resolve_all(), 1);
    assert!(space.pending_references().is_empty());

    let greeter = space.local_class("app.Greeter").expect("app.Greeter imported");
    let greet = greeter.find_member("greet").expect("member lowered from its record");
    assert_eq!(greet.return_type.canonical_name(), wk::STRING);
    assert_eq!(greet.parameters.len(), 1);

    // The resolved reference makes core types visible to lookups.
    assert!(space.lookup_class(wk::STRING).is_some());
}

#[test]
fn test_descriptor_built_in_code_answers_resolution_queries() {
    let registry = Registry::new();
    let space = registry.load(&gui_descriptor()).expect("gui module must import");
    registry.resolve_all();

    let view = TypeExpr::named("gui.View");
    let label = TypeExpr::named("gui.Label");

    assert!(conversion_exists(&space, &label, &view));
    assert!(!conversion_exists(&space, &view, &label));
    assert!(conversion_exists(&space, &label, &TypeExpr::named(wk::OBJECT)));

    let common = common_type(&space, &label, &view);
    assert_eq!(common.canonical_name(), "gui.View");
}

#[test]
fn test_well_known_handles_match_the_core_space() {
    let registry = Registry::new();
    let handles = registry.well_known();

    let core_string = registry
        .core_space()
        .local_class(wk::STRING)
        .expect("core declares String");
    assert!(Arc::ptr_eq(&handles.string, &core_string));
    assert_eq!(handles.object.qualified_name(), wk::OBJECT);
    assert!(handles.list_generic.arity() == 1);
}

#[test]
fn test_namespace_listing_spans_resolved_references() {
    let registry = Registry::new();
    let space = registry.load(&gui_descriptor()).expect("gui module must import");
    registry.resolve_all();

    // The root namespace merges local and referenced top-level names.
    let root = space.namespace_contents("");
    assert!(root.namespaces.contains(&"gui".to_string()));
    assert!(root.namespaces.contains(&"core".to_string()));

    let gui = space.namespace_contents("gui");
    let mut names: Vec<&str> = gui.classes.iter().map(|c| c.name()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Label", "View"]);

    assert!(space.namespace_exists("core.collections"));
    assert!(!space.namespace_exists("core.missing"));
}

#[test]
fn test_tracing_initialisation_is_idempotent() {
    // Gated on TYDOM_LOG / RUST_LOG; calling repeatedly must be safe
    // whether or not a subscriber was installed.
    tydom::tracing_config::init_tracing();
    tydom::tracing_config::init_tracing();
}
