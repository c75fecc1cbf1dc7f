//! Shared foundations for the tydom semantic model.
//!
//! This crate provides the pieces every other tydom crate needs:
//! - Qualified-name utilities (`names`)
//! - Centralized traversal limits and thresholds (`limits`)

// Centralized limits and thresholds
pub mod limits;

// Qualified-name splitting and joining
pub mod names;
pub use names::{namespace_of, qualify, short_name_of};
