//! Relexpr - relational expression resolution for SQL generation
//!
//! This crate navigates and relocates nodes of an algebraic query tree:
//! - Resolving the column, schema property or query source a node denotes
//! - Classifying nodes that can be embedded without re-aliasing
//! - Lifting nodes across a subquery boundary as column references
//! - Flattening a subquery's projection into the enclosing query

pub mod config;
pub mod relational_expr;
pub mod utils;
