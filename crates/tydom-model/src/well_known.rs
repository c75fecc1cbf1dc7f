//! Qualified names of the built-in `core` module's special types.
//!
//! The resolution engine treats these names specially (universal base,
//! void canonicalization, numeric widening, array/string element
//! projection), so they live here as constants rather than as scattered
//! string literals.

/// Name of the built-in base-library module.
pub const CORE_MODULE: &str = "core";

/// Universal base type; every tree reaches it.
pub const OBJECT: &str = "core.Object";
pub const VOID: &str = "core.Void";
pub const STRING: &str = "core.String";
pub const CHAR: &str = "core.Char";
pub const BOOLEAN: &str = "core.Boolean";

pub const INT8: &str = "core.Int8";
pub const UINT8: &str = "core.UInt8";
pub const INT16: &str = "core.Int16";
pub const UINT16: &str = "core.UInt16";
pub const INT32: &str = "core.Int32";
pub const UINT32: &str = "core.UInt32";
pub const INT64: &str = "core.Int64";
pub const UINT64: &str = "core.UInt64";
pub const FLOAT32: &str = "core.Float32";
pub const FLOAT64: &str = "core.Float64";
pub const DECIMAL: &str = "core.Decimal";

pub const DELEGATE: &str = "core.Delegate";
pub const PREDICATE: &str = "core.Predicate";
pub const CONVERTER: &str = "core.Converter";
pub const ACTION: &str = "core.Action";
pub const DISPOSABLE: &str = "core.Disposable";
pub const CHAR_CURSOR: &str = "core.CharCursor";

// Non-generic collection interfaces.
pub const ENUMERABLE: &str = "core.collections.Enumerable";
pub const COLLECTION: &str = "core.collections.Collection";
pub const LIST: &str = "core.collections.List";
pub const ENUMERATOR: &str = "core.collections.Enumerator";

// Generic collection interfaces and containers.
pub const ENUMERABLE_G: &str = "core.collections.generic.Enumerable";
pub const COLLECTION_G: &str = "core.collections.generic.Collection";
pub const LIST_G: &str = "core.collections.generic.List";
pub const READ_ONLY_COLLECTION_G: &str = "core.collections.generic.ReadOnlyCollection";
pub const READ_ONLY_LIST_G: &str = "core.collections.generic.ReadOnlyList";
pub const ENUMERATOR_G: &str = "core.collections.generic.Enumerator";
pub const ARRAY_LIST: &str = "core.collections.generic.ArrayList";
pub const DICTIONARY: &str = "core.collections.generic.Dictionary";
pub const KEY_VALUE_PAIR: &str = "core.collections.generic.KeyValuePair";

/// Conventional name of a delegate class's synthesized invocation member.
pub const INVOKE_MEMBER: &str = "invoke";

/// Generic interfaces a single-dimension array `T[]` implements over its
/// element type. Base-type argument projection answers element queries
/// against any of these directly.
pub const ARRAY_ELEMENT_INTERFACES: [&str; 3] = [LIST_G, COLLECTION_G, ENUMERABLE_G];

/// True when `name` is one of the numeric struct types covered by the
/// implicit widening table (including `core.Char`).
pub fn is_numeric(name: &str) -> bool {
    matches!(
        name,
        INT8 | UINT8
            | INT16
            | UINT16
            | INT32
            | UINT32
            | INT64
            | UINT64
            | FLOAT32
            | FLOAT64
            | DECIMAL
            | CHAR
    )
}
