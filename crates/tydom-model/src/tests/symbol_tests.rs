use crate::descriptor::{MemberRecord, ModuleDescriptor, ParamRecord, TypeRecord, TypeRef};
use crate::expr::TypeExpr;
use crate::identity::ModuleIdentity;
use crate::symbols::{ClassKind, ClassSymbol, Member, MemberId, MemberKind, ParamOwner};
use crate::unit::{Attribute, CompilationUnit, UnitError};
use crate::well_known;

#[test]
fn test_member_ids_are_unique() {
    let a = Member::new("x", MemberKind::Field, "m.C", TypeExpr::named(well_known::INT32));
    let b = Member::new("x", MemberKind::Field, "m.C", TypeExpr::named(well_known::INT32));
    assert_ne!(a.id(), b.id());
    assert!(a.id().is_valid());
    assert!(!MemberId::INVALID.is_valid());
}

#[test]
fn test_member_owns_its_params_only() {
    let member = Member::new("find", MemberKind::Method, "m.C", TypeExpr::named(well_known::BOOLEAN))
        .with_type_params(vec![crate::symbols::TypeParam::new("T", 0)]);
    let own = member.param_ref(0);
    let own_ref = own.as_param().expect("param expr");
    assert!(member.owns_param(own_ref));

    let other = Member::new("other", MemberKind::Method, "m.C", TypeExpr::Void);
    let foreign = other.param_ref(0);
    assert!(!member.owns_param(foreign.as_param().expect("param expr")));

    // Class-owned parameters are never member-owned.
    let class_param = TypeExpr::param(ParamOwner::Class("m.C".to_string()), 0, "T");
    assert!(!member.owns_param(class_param.as_param().expect("param expr")));
}

#[test]
fn test_unit_freeze_is_one_way() {
    let mut unit = CompilationUnit::new("m");
    unit.add_class(ClassSymbol::new("m.A", ClassKind::Class)).expect("add before freeze");
    assert!(!unit.is_frozen());

    unit.freeze();
    assert!(unit.is_frozen());

    let err = unit.add_class(ClassSymbol::new("m.B", ClassKind::Class)).unwrap_err();
    assert!(matches!(err, UnitError::Frozen { .. }));
    let err = unit.add_attribute(Attribute::new("m.Marker")).unwrap_err();
    assert!(matches!(err, UnitError::Frozen { .. }));

    // The pre-freeze class is still there.
    assert!(unit.class("m.A").is_some());
    assert_eq!(unit.class_count(), 1);
}

#[test]
fn test_unit_rejects_duplicate_names() {
    let mut unit = CompilationUnit::new("m");
    unit.add_class(ClassSymbol::new("m.A", ClassKind::Class)).expect("first");
    let err = unit.add_class(ClassSymbol::new("m.A", ClassKind::Interface)).unwrap_err();
    assert!(matches!(err, UnitError::DuplicateClass { name } if name == "m.A"));
}

#[test]
fn test_identity_display_and_parse() {
    let id = ModuleIdentity::new("core.ui").with_version("2.1.0");
    assert_eq!(id.to_string(), "core.ui, Version=2.1.0");

    let parsed = ModuleIdentity::parse("core.ui, Version=2.1.0, Culture=neutral");
    assert_eq!(parsed.name, "core.ui");
    assert_eq!(parsed.version.as_deref(), Some("2.1.0"));

    let bare = ModuleIdentity::parse("core.ui");
    assert_eq!(bare.name, "core.ui");
    assert!(bare.version.is_none());
}

fn widget_record() -> TypeRecord {
    TypeRecord::new("ui.Widget", ClassKind::Class)
        .with_bases(vec![TypeRef::named(well_known::OBJECT)])
        .with_members(vec![
            MemberRecord::new("close", MemberKind::Method, TypeRef::named(well_known::VOID)),
            MemberRecord::new(
                "tag",
                MemberKind::Property,
                TypeRef::named(well_known::STRING),
            )
            .with_parameters(vec![]),
        ])
}

#[test]
fn test_record_lowering_defers_members() {
    let class = widget_record().lower();
    assert_eq!(class.qualified_name(), "ui.Widget");
    assert_eq!(class.base_types().len(), 1);

    let members = class.members();
    assert_eq!(members.len(), 2);
    // The nothing-type reference lowered to the canonical singleton.
    assert!(members[0].return_type.is_void());
    assert_eq!(members[0].declaring_class, "ui.Widget");
    assert_eq!(members[1].kind, MemberKind::Property);

    // Second access hits the same materialized slice.
    let again = class.members();
    assert_eq!(again[0].id(), members[0].id());
}

#[test]
fn test_generic_record_lowering_binds_owners() {
    let record = TypeRecord::new("m.Box", ClassKind::Class)
        .with_type_params(&["T"])
        .with_bases(vec![TypeRef::constructed(
            well_known::ENUMERABLE_G,
            vec![TypeRef::class_param(0)],
        )])
        .with_members(vec![
            MemberRecord::new("value", MemberKind::Field, TypeRef::class_param(0)),
            MemberRecord::new("map", MemberKind::Method, TypeRef::method_param(0)),
        ]);
    let class = record.lower();

    assert_eq!(
        class.base_types()[0].canonical_name(),
        "core.collections.generic.Enumerable{T}"
    );
    let base_param = class.base_types()[0]
        .as_constructed()
        .and_then(|c| c.args[0].as_param().cloned())
        .expect("base arg is a param ref");
    assert_eq!(base_param.owner, ParamOwner::Class("m.Box".to_string()));

    let members = class.members();
    let field_param = members[0].return_type.as_param().expect("field type is a param ref");
    assert_eq!(field_param.owner, ParamOwner::Class("m.Box".to_string()));

    // A member-owned reference binds to that member's fresh id. The record
    // declared no member type parameters, so the display name falls back.
    let method_param = members[1].return_type.as_param().expect("return is a param ref");
    assert_eq!(method_param.owner, ParamOwner::Member(members[1].id()));
    assert_eq!(method_param.name, "T0");
}

#[test]
fn test_descriptor_json_round_trip() {
    let descriptor = ModuleDescriptor::new(
        ModuleIdentity::new("ui").with_version("1.0.0"),
    )
    .with_references(vec![well_known::CORE_MODULE.to_string()])
    .with_attributes(vec![Attribute::new("core.ModuleTitle").with_args(vec!["UI".into()])])
    .with_types(vec![widget_record().with_members(vec![MemberRecord::new(
        "resize",
        MemberKind::Method,
        TypeRef::named(well_known::VOID),
    )
    .with_parameters(vec![
        ParamRecord::new("width", TypeRef::named(well_known::INT32)),
    ])])]);

    let json = serde_json::to_string(&descriptor).expect("serialize");
    let back: ModuleDescriptor = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.identity.name, "ui");
    assert_eq!(back.references, vec!["core"]);
    assert_eq!(back.types.len(), 1);
    assert_eq!(back.types[0].members.len(), 1);
    assert_eq!(back.types[0].members[0].parameters[0].name, "width");
}
