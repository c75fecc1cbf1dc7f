//! Least upper bound for type inference.

use crate::inherit::inheritance_tree;
use tydom_model::expr::TypeExpr;
use tydom_model::well_known;
use tydom_space::SymbolSpace;

/// Nearest common ancestor of `a` and `b`.
///
/// The null type is absorbed: the other operand comes back unchanged,
/// whichever side it is on. Otherwise both inheritance trees are
/// intersected by canonical name and the member with the smallest combined
/// breadth-first distance wins; ties prefer a class over an interface,
/// then the node encountered first in `a`'s walk. A query that intersects
/// nowhere richer answers the universal base type, never a failure.
pub fn common_type(space: &SymbolSpace, a: &TypeExpr, b: &TypeExpr) -> TypeExpr {
    if a.is_null() {
        return b.clone();
    }
    if b.is_null() {
        return a.clone();
    }

    let tree_a = inheritance_tree(space, a);
    let tree_b = inheritance_tree(space, b);

    let mut best: Option<(usize, u32, bool)> = None;
    for (position, node) in tree_a.nodes().iter().enumerate() {
        let Some(depth_b) = tree_b.depth_of(&node.ty.canonical_name()) else {
            continue;
        };
        let combined = node.depth + depth_b;
        let is_class = node
            .ty
            .underlying_class(space)
            .is_some_and(|class| !class.is_interface());
        let better = match best {
            None => true,
            Some((_, best_combined, best_is_class)) => {
                combined < best_combined || (combined == best_combined && is_class && !best_is_class)
            }
        };
        if better {
            best = Some((position, combined, is_class));
        }
    }

    match best {
        Some((position, _, _)) => tree_a.nodes()[position].ty.clone(),
        None => TypeExpr::named(well_known::OBJECT),
    }
}

#[cfg(test)]
#[path = "tests/common_type_tests.rs"]
mod common_type_tests;
