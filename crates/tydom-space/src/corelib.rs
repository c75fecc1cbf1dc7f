//! Descriptor for the built-in `core` module.
//!
//! Every registry holds exactly one space imported from this descriptor.
//! It is the closed base library the resolution engine's special cases
//! name: the universal base type, void, string and char, the numeric
//! structs, the delegate family, and the collection interfaces arrays and
//! strings project through. Its shape is fixed; user modules reference it
//! by name like any other module.

use tydom_model::descriptor::{MemberRecord, ModuleDescriptor, ParamRecord, TypeRecord, TypeRef};
use tydom_model::identity::ModuleIdentity;
use tydom_model::symbols::{ClassKind, MemberKind, Modifiers};
use tydom_model::unit::Attribute;
use tydom_model::well_known as wk;

fn object_ref() -> TypeRef {
    TypeRef::named(wk::OBJECT)
}

fn property(name: &str, ty: TypeRef) -> MemberRecord {
    MemberRecord::new(name, MemberKind::Property, ty)
}

fn method(name: &str, ret: TypeRef, params: Vec<ParamRecord>) -> MemberRecord {
    MemberRecord::new(name, MemberKind::Method, ret).with_parameters(params)
}

fn numeric_struct(name: &str) -> TypeRecord {
    TypeRecord::new(name, ClassKind::Struct)
        .with_modifiers(Modifiers::PUBLIC | Modifiers::SEALED)
        .with_bases(vec![object_ref()])
}

/// Builds the `core` descriptor. Pure data; the registry imports it once.
pub fn descriptor() -> ModuleDescriptor {
    let int32 = || TypeRef::named(wk::INT32);
    let boolean = || TypeRef::named(wk::BOOLEAN);
    let void = || TypeRef::named(wk::VOID);
    let string = || TypeRef::named(wk::STRING);
    let chr = || TypeRef::named(wk::CHAR);

    let mut types = vec![
        TypeRecord::new(wk::OBJECT, ClassKind::Class).with_members(vec![
            method("describe", string(), vec![]),
            method("equals", boolean(), vec![ParamRecord::new("other", object_ref())]),
            method("hash_code", int32(), vec![]),
        ]),
        TypeRecord::new(wk::VOID, ClassKind::Struct)
            .with_modifiers(Modifiers::PUBLIC | Modifiers::SEALED)
            .with_bases(vec![object_ref()]),
        // String deliberately declares no collection interface; element
        // queries against it go through the char projection special case.
        TypeRecord::new(wk::STRING, ClassKind::Class)
            .with_modifiers(Modifiers::PUBLIC | Modifiers::SEALED)
            .with_bases(vec![object_ref()])
            .with_members(vec![
                property("length", int32()),
                method("char_at", chr(), vec![ParamRecord::new("index", int32())]),
                method("concat", string(), vec![ParamRecord::new("other", string())]),
                method(
                    "substring",
                    string(),
                    vec![
                        ParamRecord::new("start", int32()),
                        ParamRecord::new("length", int32()),
                    ],
                ),
                method("chars", TypeRef::named(wk::CHAR_CURSOR), vec![]),
            ]),
        numeric_struct(wk::CHAR),
        TypeRecord::new(wk::BOOLEAN, ClassKind::Struct)
            .with_modifiers(Modifiers::PUBLIC | Modifiers::SEALED)
            .with_bases(vec![object_ref()]),
    ];

    for name in [
        wk::INT8,
        wk::UINT8,
        wk::INT16,
        wk::UINT16,
        wk::INT32,
        wk::UINT32,
        wk::INT64,
        wk::UINT64,
        wk::FLOAT32,
        wk::FLOAT64,
        wk::DECIMAL,
    ] {
        types.push(numeric_struct(name));
    }

    // ---- delegate family -------------------------------------------------

    types.push(
        TypeRecord::new(wk::DELEGATE, ClassKind::Class)
            .with_modifiers(Modifiers::PUBLIC | Modifiers::ABSTRACT)
            .with_bases(vec![object_ref()]),
    );
    types.push(
        TypeRecord::new(wk::PREDICATE, ClassKind::Delegate)
            .with_modifiers(Modifiers::PUBLIC | Modifiers::SEALED)
            .with_type_params(&["T"])
            .with_bases(vec![TypeRef::named(wk::DELEGATE)])
            .with_members(vec![method(
                wk::INVOKE_MEMBER,
                boolean(),
                vec![ParamRecord::new("obj", TypeRef::class_param(0))],
            )]),
    );
    types.push(
        TypeRecord::new(wk::CONVERTER, ClassKind::Delegate)
            .with_modifiers(Modifiers::PUBLIC | Modifiers::SEALED)
            .with_type_params(&["TInput", "TOutput"])
            .with_bases(vec![TypeRef::named(wk::DELEGATE)])
            .with_members(vec![method(
                wk::INVOKE_MEMBER,
                TypeRef::class_param(1),
                vec![ParamRecord::new("input", TypeRef::class_param(0))],
            )]),
    );
    types.push(
        TypeRecord::new(wk::ACTION, ClassKind::Delegate)
            .with_modifiers(Modifiers::PUBLIC | Modifiers::SEALED)
            .with_type_params(&["T"])
            .with_bases(vec![TypeRef::named(wk::DELEGATE)])
            .with_members(vec![method(
                wk::INVOKE_MEMBER,
                void(),
                vec![ParamRecord::new("obj", TypeRef::class_param(0))],
            )]),
    );

    // ---- enumeration and disposal ----------------------------------------

    types.push(
        TypeRecord::new(wk::DISPOSABLE, ClassKind::Interface)
            .with_members(vec![method("dispose", void(), vec![])]),
    );
    types.push(
        TypeRecord::new(wk::ENUMERATOR, ClassKind::Interface).with_members(vec![
            property("current", object_ref()),
            method("move_next", boolean(), vec![]),
        ]),
    );
    types.push(
        TypeRecord::new(wk::ENUMERATOR_G, ClassKind::Interface)
            .with_type_params(&["T"])
            .with_bases(vec![
                TypeRef::named(wk::ENUMERATOR),
                TypeRef::named(wk::DISPOSABLE),
            ])
            .with_members(vec![property("current", TypeRef::class_param(0))]),
    );
    types.push(
        TypeRecord::new(wk::CHAR_CURSOR, ClassKind::Class)
            .with_modifiers(Modifiers::PUBLIC | Modifiers::SEALED)
            .with_bases(vec![
                object_ref(),
                TypeRef::constructed(wk::ENUMERATOR_G, vec![chr()]),
            ])
            .with_members(vec![
                property("current", chr()),
                method("move_next", boolean(), vec![]),
                method("dispose", void(), vec![]),
            ]),
    );

    // ---- collection interfaces, raw then generic -------------------------

    types.push(
        TypeRecord::new(wk::ENUMERABLE, ClassKind::Interface).with_members(vec![method(
            "enumerator",
            TypeRef::named(wk::ENUMERATOR),
            vec![],
        )]),
    );
    types.push(
        TypeRecord::new(wk::COLLECTION, ClassKind::Interface)
            .with_bases(vec![TypeRef::named(wk::ENUMERABLE)])
            .with_members(vec![property("count", int32())]),
    );
    types.push(
        TypeRecord::new(wk::LIST, ClassKind::Interface)
            .with_bases(vec![TypeRef::named(wk::COLLECTION)])
            .with_members(vec![method(
                "item_at",
                object_ref(),
                vec![ParamRecord::new("index", int32())],
            )]),
    );
    types.push(
        TypeRecord::new(wk::ENUMERABLE_G, ClassKind::Interface)
            .with_type_params(&["T"])
            .with_bases(vec![TypeRef::named(wk::ENUMERABLE)])
            .with_members(vec![method(
                "enumerator",
                TypeRef::constructed(wk::ENUMERATOR_G, vec![TypeRef::class_param(0)]),
                vec![],
            )]),
    );
    types.push(
        TypeRecord::new(wk::COLLECTION_G, ClassKind::Interface)
            .with_type_params(&["T"])
            .with_bases(vec![TypeRef::constructed(
                wk::ENUMERABLE_G,
                vec![TypeRef::class_param(0)],
            )])
            .with_members(vec![
                property("count", int32()),
                method(
                    "contains",
                    boolean(),
                    vec![ParamRecord::new("item", TypeRef::class_param(0))],
                ),
            ]),
    );
    types.push(
        TypeRecord::new(wk::LIST_G, ClassKind::Interface)
            .with_type_params(&["T"])
            .with_bases(vec![TypeRef::constructed(
                wk::COLLECTION_G,
                vec![TypeRef::class_param(0)],
            )])
            .with_members(vec![
                method(
                    "item_at",
                    TypeRef::class_param(0),
                    vec![ParamRecord::new("index", int32())],
                ),
                method(
                    "index_of",
                    int32(),
                    vec![ParamRecord::new("item", TypeRef::class_param(0))],
                ),
            ]),
    );
    types.push(
        TypeRecord::new(wk::READ_ONLY_COLLECTION_G, ClassKind::Interface)
            .with_type_params(&["T"])
            .with_bases(vec![TypeRef::constructed(
                wk::ENUMERABLE_G,
                vec![TypeRef::class_param(0)],
            )])
            .with_members(vec![property("count", int32())]),
    );
    types.push(
        TypeRecord::new(wk::READ_ONLY_LIST_G, ClassKind::Interface)
            .with_type_params(&["T"])
            .with_bases(vec![TypeRef::constructed(
                wk::READ_ONLY_COLLECTION_G,
                vec![TypeRef::class_param(0)],
            )])
            .with_members(vec![method(
                "item_at",
                TypeRef::class_param(0),
                vec![ParamRecord::new("index", int32())],
            )]),
    );

    // ---- containers ------------------------------------------------------

    types.push(
        TypeRecord::new(wk::ARRAY_LIST, ClassKind::Class)
            .with_type_params(&["T"])
            .with_bases(vec![
                object_ref(),
                TypeRef::constructed(wk::LIST_G, vec![TypeRef::class_param(0)]),
                TypeRef::named(wk::LIST),
                TypeRef::constructed(wk::READ_ONLY_LIST_G, vec![TypeRef::class_param(0)]),
            ])
            .with_members(vec![
                property("count", int32()),
                method("add", void(), vec![ParamRecord::new("item", TypeRef::class_param(0))]),
                method(
                    "item_at",
                    TypeRef::class_param(0),
                    vec![ParamRecord::new("index", int32())],
                ),
                method("clear", void(), vec![]),
            ]),
    );
    types.push(
        TypeRecord::new(wk::KEY_VALUE_PAIR, ClassKind::Struct)
            .with_modifiers(Modifiers::PUBLIC | Modifiers::SEALED)
            .with_type_params(&["TKey", "TValue"])
            .with_bases(vec![object_ref()])
            .with_members(vec![
                property("key", TypeRef::class_param(0)),
                property("value", TypeRef::class_param(1)),
            ]),
    );
    types.push(
        TypeRecord::new(wk::DICTIONARY, ClassKind::Class)
            .with_type_params(&["TKey", "TValue"])
            .with_bases(vec![
                object_ref(),
                TypeRef::constructed(
                    wk::ENUMERABLE_G,
                    vec![TypeRef::constructed(
                        wk::KEY_VALUE_PAIR,
                        vec![TypeRef::class_param(0), TypeRef::class_param(1)],
                    )],
                ),
            ])
            .with_members(vec![
                property("count", int32()),
                method(
                    "add",
                    void(),
                    vec![
                        ParamRecord::new("key", TypeRef::class_param(0)),
                        ParamRecord::new("value", TypeRef::class_param(1)),
                    ],
                ),
                method(
                    "contains_key",
                    boolean(),
                    vec![ParamRecord::new("key", TypeRef::class_param(0))],
                ),
                method(
                    "value_for",
                    TypeRef::class_param(1),
                    vec![ParamRecord::new("key", TypeRef::class_param(0))],
                ),
            ]),
    );

    ModuleDescriptor::new(
        ModuleIdentity::new(wk::CORE_MODULE).with_version("1.0.0"),
    )
    .with_attributes(vec![
        Attribute::new("core.ModuleVersion").with_args(vec!["1.0.0".to_string()]),
    ])
    .with_types(types)
}

#[cfg(test)]
#[path = "tests/corelib_tests.rs"]
mod corelib_tests;
