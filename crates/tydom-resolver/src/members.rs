//! Member shadowing comparison.

use tydom_model::symbols::{Member, MemberKind};

/// True when `a` and `b` declare "the same" member for shadowing and
/// duplicate detection: methods by name and pairwise parameter types,
/// fields/properties/events by name and declared type within one kind.
///
/// Local variables never participate. A local and a field sharing name and
/// type are distinct symbols; reporting them similar would make scope
/// resolution hide one behind the other.
pub fn is_similar_member(a: &Member, b: &Member) -> bool {
    if a.kind == MemberKind::LocalVariable || b.kind == MemberKind::LocalVariable {
        return false;
    }
    if a.kind != b.kind || a.name != b.name {
        return false;
    }
    match a.kind {
        MemberKind::Method => {
            a.parameters.len() == b.parameters.len()
                && a.parameters.iter().zip(&b.parameters).all(|(pa, pb)| {
                    pa.param_type.canonical_name() == pb.param_type.canonical_name()
                })
        }
        MemberKind::Field | MemberKind::Property | MemberKind::Event => {
            a.return_type.canonical_name() == b.return_type.canonical_name()
        }
        MemberKind::LocalVariable => false,
    }
}

#[cfg(test)]
#[path = "tests/members_tests.rs"]
mod members_tests;
