//! Lifting expressions across a subquery boundary
//!
//! When a subquery is pushed down, its projected expressions have to be
//! re-expressed as references that the enclosing query can address through
//! the subquery's alias.

use super::expr::{ColumnReference, Expr, TableExpr};

/// Re-express `expr` so it can be read from outside the scope `table` exposes.
///
/// Columns and aliases become the referenceable unit themselves; an existing
/// reference is wrapped again (re-lift) so lifting composes across several
/// nesting levels. Anything else is not liftable and the caller must inline it.
pub fn lift_from_subquery(expr: &Expr, table: &TableExpr) -> Option<ColumnReference> {
    match expr {
        Expr::Column(_) | Expr::Alias(_) | Expr::ColumnReference(_) => {
            log::debug!("Lifting {} into scope '{}'", expr, table.alias);
            Some(ColumnReference::new(expr.clone(), table.clone()))
        }
        _ => {
            log::trace!("Not liftable, caller must inline: {}", expr);
            None
        }
    }
}

/// Number of stacked column references starting at `expr`.
pub fn reference_depth(expr: &Expr) -> usize {
    let mut depth = 0;
    let mut current = expr;
    while let Expr::ColumnReference(reference) = current {
        depth += 1;
        current = reference.expr();
    }
    depth
}
