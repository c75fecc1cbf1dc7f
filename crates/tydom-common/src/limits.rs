//! Centralized limits and thresholds for the semantic model.
//!
//! This module provides shared constants for the bounded graph walks in the
//! resolution engine. Centralizing these values:
//! - Prevents duplicate definitions with inconsistent values
//! - Documents the rationale for each limit
//!
//! Every engine query must terminate even over malformed symbol graphs
//! (cyclic base-type declarations, self-referential generic bases), so each
//! walk carries one of these bounds instead of trusting the input.

// =============================================================================
// Graph Traversal Limits (Resolution Engine)
// =============================================================================

/// Maximum number of nodes emitted by one inheritance-tree walk.
///
/// The breadth-first walk deduplicates by canonical name, which bounds it on
/// well-formed graphs. A self-referential generic base such as
/// `class A<T> : A<A<T>>` produces a fresh canonical name at every level, so
/// the walk also stops after this many emitted nodes and returns the partial
/// tree. Real inheritance trees stay under a few dozen nodes; 4096 leaves
/// room for machine-generated hierarchies without letting a degenerate one
/// spin.
pub const MAX_INHERITANCE_NODES: usize = 4096;

/// Maximum derivation-chain depth for base-type argument projection.
///
/// Projection recurses along declared base edges without global
/// deduplication, so a base-type cycle (`class A : B`, `class B : A`) would
/// otherwise recurse forever. Declared derivation chains in practice stay
/// under a dozen levels.
pub const MAX_PROJECTION_DEPTH: u32 = 64;
