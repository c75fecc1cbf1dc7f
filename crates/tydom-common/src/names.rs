//! Qualified-name utilities.
//!
//! Class and namespace names are dot-separated (`core.collections.List`).
//! Binary metadata marks nested types with a `+` in the exported name
//! (`Outer+Inner`); the importer skips those, so the marker lives here next
//! to the splitting helpers.

/// Separator binary metadata uses for nested type names.
pub const NESTED_MARK: char = '+';

/// Returns true for exported names that denote a nested type.
pub fn is_nested(qualified: &str) -> bool {
    qualified.contains(NESTED_MARK)
}

/// Namespace portion of a qualified name, `""` for global names.
pub fn namespace_of(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(idx) => &qualified[..idx],
        None => "",
    }
}

/// Short (unqualified) portion of a qualified name.
pub fn short_name_of(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(idx) => &qualified[idx + 1..],
        None => qualified,
    }
}

/// Joins a namespace and a short name; the global namespace is `""`.
pub fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}

/// Every ancestor namespace of `namespace`, shortest first, including
/// `namespace` itself. `"a.b.c"` yields `["a", "a.b", "a.b.c"]`.
pub fn ancestor_namespaces(namespace: &str) -> Vec<&str> {
    if namespace.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    for (idx, ch) in namespace.char_indices() {
        if ch == '.' {
            out.push(&namespace[..idx]);
        }
    }
    out.push(namespace);
    out
}
