//! Unwrap-and-extract resolution
//!
//! Three parallel descents that differ in which wrappers they cross:
//!
//! | wrapper           | `try_get_column` | `try_get_property` | `try_get_query_source` |
//! |-------------------|------------------|--------------------|------------------------|
//! | `Alias`           | crosses          | crosses            | crosses                |
//! | `Nullable`        | crosses          | stops              | stops                  |
//! | `ColumnReference` | stops            | crosses            | answers with its table |
//!
//! A lifted reference is a new column identity one level removed, but it keeps
//! the schema property and belongs to the outer scope.

use super::expr::{ColumnExpr, Expr, QuerySourceId, SchemaProperty};

impl Expr {
    /// The column this node denotes, looking through aliases and nullable markers.
    pub fn try_get_column(&self) -> Option<&ColumnExpr> {
        match self {
            Expr::Column(col) => Some(col),
            Expr::Alias(alias) => alias.expr.try_get_column(),
            Expr::Nullable(nullable) => nullable.operand.try_get_column(),
            _ => None,
        }
    }

    /// The schema property this node maps to, preserved across lifts.
    pub fn try_get_property(&self) -> Option<&SchemaProperty> {
        match self {
            Expr::Column(col) => Some(&col.property),
            Expr::Alias(alias) => alias.expr.try_get_property(),
            Expr::ColumnReference(reference) => reference.expr().try_get_property(),
            _ => None,
        }
    }

    /// The query source owning this node. For a column reference that is the
    /// source of the table it was lifted to, not of its inner node.
    pub fn try_get_query_source(&self) -> Option<QuerySourceId> {
        match self {
            Expr::Column(col) => Some(col.table.query_source),
            Expr::Alias(alias) => alias.expr.try_get_query_source(),
            Expr::ColumnReference(reference) => Some(reference.table().query_source),
            _ => None,
        }
    }
}
