//! Inheritance trees and base-type argument projection.
//!
//! [`inheritance_tree`] is the engine's workhorse: a bounded breadth-first
//! walk over base-class and interface edges with type arguments substituted
//! along each edge. Conversion, applicability, and common-type queries are
//! all phrased over it. [`type_argument_to_ancestor`] answers the dual
//! question: not "what are the ancestors" but "what did this type bind to
//! a given ancestor's type parameter".

use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use tracing::warn;
use tydom_common::limits::{MAX_INHERITANCE_NODES, MAX_PROJECTION_DEPTH};
use tydom_model::expr::{ArrayType, ParamRef, TypeExpr};
use tydom_model::symbols::{ClassSymbol, ParamOwner};
use tydom_model::well_known;
use tydom_space::SymbolSpace;

/// One emitted tree node: the ancestor expression and its breadth-first
/// distance from the root.
#[derive(Clone, Debug)]
pub struct TreeNode {
    pub ty: TypeExpr,
    pub depth: u32,
}

/// Result of an inheritance walk: nodes in breadth-first encounter order,
/// each distinct canonical name exactly once.
#[derive(Default)]
pub struct InheritanceTree {
    nodes: Vec<TreeNode>,
    by_name: FxHashMap<String, usize>,
}

impl InheritanceTree {
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeExpr> {
        self.nodes.iter().map(|n| &n.ty)
    }

    pub fn into_types(self) -> Vec<TypeExpr> {
        self.nodes.into_iter().map(|n| n.ty).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Membership by canonical name. This is the upcast test.
    pub fn contains(&self, canonical_name: &str) -> bool {
        self.by_name.contains_key(canonical_name)
    }

    /// Breadth-first distance of the named node from the root.
    pub fn depth_of(&self, canonical_name: &str) -> Option<u32> {
        self.by_name.get(canonical_name).map(|&i| self.nodes[i].depth)
    }

    fn push(&mut self, ty: TypeExpr, depth: u32) -> bool {
        let canonical = ty.canonical_name();
        if self.by_name.contains_key(&canonical) {
            return false;
        }
        self.by_name.insert(canonical, self.nodes.len());
        self.nodes.push(TreeNode { ty, depth });
        true
    }
}

/// Breadth-first inheritance tree of `ty`, starting at `ty` itself.
///
/// Edges follow declared bases with the node's type arguments substituted
/// in, so `Stack{core.Int32}` deriving from `List{T}` contributes
/// `List{core.Int32}`. Nodes whose class does not resolve in `space` are
/// emitted but not expanded. The walk stops at a node budget; trees over
/// self-referential generic bases stay finite.
pub fn inheritance_tree(space: &SymbolSpace, ty: &TypeExpr) -> InheritanceTree {
    let mut tree = InheritanceTree::default();
    let mut queue: VecDeque<(TypeExpr, u32)> = VecDeque::new();
    queue.push_back((ty.clone(), 0));

    while let Some((node, depth)) = queue.pop_front() {
        if tree.len() >= MAX_INHERITANCE_NODES {
            warn!(
                root = %ty.canonical_name(),
                budget = MAX_INHERITANCE_NODES,
                "inheritance walk hit the node budget"
            );
            break;
        }
        if !tree.push(node.clone(), depth) {
            continue;
        }
        for edge in expand(space, &node) {
            queue.push_back((edge, depth + 1));
        }
    }
    tree
}

fn expand(space: &SymbolSpace, node: &TypeExpr) -> Vec<TypeExpr> {
    match node {
        TypeExpr::Named(_) | TypeExpr::Constructed(_) => class_edges(space, node),
        TypeExpr::Array(array) => array_edges(array),
        TypeExpr::Param(param) => param_edges(space, param),
        TypeExpr::Lambda(_) | TypeExpr::Null | TypeExpr::Void => Vec::new(),
    }
}

/// Declared bases of a class-backed node, type arguments threaded through.
/// A node with no resolvable base gets the implicit edge to the universal
/// base type.
fn class_edges(space: &SymbolSpace, node: &TypeExpr) -> Vec<TypeExpr> {
    let Some(class) = node.underlying_class(space) else {
        return Vec::new();
    };
    let args: &[TypeExpr] = node.as_constructed().map(|c| c.args.as_slice()).unwrap_or(&[]);
    let owner = class.param_owner();

    let mut edges = Vec::with_capacity(class.base_types().len());
    let mut any_resolved = false;
    for base in class.base_types() {
        let bound = base.substitute(&owner, args);
        if bound.underlying_class(space).is_some() {
            any_resolved = true;
        }
        edges.push(bound);
    }
    if !any_resolved && class.qualified_name() != well_known::OBJECT {
        edges.push(TypeExpr::named(well_known::OBJECT));
    }
    edges
}

/// Synthesized bases of an array type: the element-conversion interfaces
/// over the element (single-dimension only), the raw counterparts, and the
/// universal base type.
fn array_edges(array: &ArrayType) -> Vec<TypeExpr> {
    let mut edges = vec![TypeExpr::named(well_known::OBJECT)];
    if array.rank == 1 {
        for definition in well_known::ARRAY_ELEMENT_INTERFACES {
            edges.push(TypeExpr::constructed(
                TypeExpr::generic(definition, 1),
                [(*array.element).clone()],
            ));
        }
    }
    edges.push(TypeExpr::named(well_known::LIST));
    edges.push(TypeExpr::named(well_known::COLLECTION));
    edges.push(TypeExpr::named(well_known::ENUMERABLE));
    edges
}

/// A type parameter expands into its declared constraints; unconstrained
/// (or member-owned, whose declaration is not reachable from a space) means
/// just the universal base type.
fn param_edges(space: &SymbolSpace, param: &ParamRef) -> Vec<TypeExpr> {
    let constraints = match &param.owner {
        ParamOwner::Class(owner) => space
            .lookup_class(owner)
            .and_then(|class| {
                class.type_params().get(param.index as usize).map(|p| p.constraints.clone())
            })
            .unwrap_or_default(),
        ParamOwner::Member(_) => Vec::new(),
    };
    if constraints.is_empty() {
        vec![TypeExpr::named(well_known::OBJECT)]
    } else {
        constraints
    }
}

// =============================================================================
// Base-type argument projection
// =============================================================================

/// The type argument `ty` binds at position `index` of the ancestor class
/// `target`, composing substitutions along the derivation chain.
///
/// Special cases: `core.String` projects `core.Char` onto the generic
/// enumerable interface without a declared edge, and a single-dimension
/// array projects its element onto any of its element-conversion
/// interfaces.
///
/// `None` means `target` is not an ancestor (or the chain exceeded the
/// depth bound).
///
/// # Panics
///
/// Panics when `index` is at or beyond `target`'s declared arity; asking
/// for a type argument the ancestor does not declare is a caller defect,
/// not a narrow result.
pub fn type_argument_to_ancestor(
    space: &SymbolSpace,
    ty: &TypeExpr,
    target: &ClassSymbol,
    index: u32,
) -> Option<TypeExpr> {
    assert!(
        index < target.arity(),
        "type argument index {index} out of range for {} (arity {})",
        target.qualified_name(),
        target.arity()
    );
    project(space, ty, target, index, 0)
}

fn project(
    space: &SymbolSpace,
    ty: &TypeExpr,
    target: &ClassSymbol,
    index: u32,
    depth: u32,
) -> Option<TypeExpr> {
    if depth > MAX_PROJECTION_DEPTH {
        return None;
    }

    match ty {
        TypeExpr::Named(named)
            if named.name == well_known::STRING
                && target.qualified_name() == well_known::ENUMERABLE_G =>
        {
            return Some(TypeExpr::named(well_known::CHAR));
        }
        TypeExpr::Array(array)
            if array.rank == 1
                && well_known::ARRAY_ELEMENT_INTERFACES.contains(&target.qualified_name()) =>
        {
            return Some((*array.element).clone());
        }
        _ => {}
    }

    if ty.class_name() == Some(target.qualified_name()) {
        // Reached the target. A raw (unparameterized) reference carries no
        // argument to hand back.
        return ty.as_constructed().and_then(|c| c.args.get(index as usize).cloned());
    }

    let class = ty.underlying_class(space)?;
    let args: &[TypeExpr] = ty.as_constructed().map(|c| c.args.as_slice()).unwrap_or(&[]);
    let owner = class.param_owner();
    for base in class.base_types() {
        let bound = base.substitute(&owner, args);
        if let Some(found) = project(space, &bound, target, index, depth + 1) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
#[path = "tests/inherit_tests.rs"]
mod inherit_tests;
