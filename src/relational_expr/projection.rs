//! Flattening a subquery's projection into the enclosing query
//!
//! Every projected expression ends up in the outer column list either as a
//! reference through the subquery alias or inlined verbatim. Expressions that
//! are neither liftable nor simple get a generated alias inside the subquery
//! first, which makes them liftable.

use std::collections::HashSet;

use super::errors::FlattenError;
use super::expr::{ColumnReference, Expr, SelectExpr};
use super::lifter::{lift_from_subquery, reference_depth};
use crate::config::ResolverConfig;
use crate::utils::alias_naming::unique_alias;

#[derive(Debug, PartialEq, Clone)]
pub struct FlattenedSubquery {
    /// The subquery with generated aliases applied to its projection
    pub subquery: SelectExpr,
    /// One entry per subquery projection, addressable from the outer scope
    pub outer_projection: Vec<Expr>,
}

pub struct SubqueryFlattener {
    alias_prefix: String,
    max_lift_depth: u32,
}

impl SubqueryFlattener {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            alias_prefix: config.alias_prefix.clone(),
            max_lift_depth: config.max_lift_depth,
        }
    }

    pub fn flatten(&self, subquery: &SelectExpr) -> Result<FlattenedSubquery, FlattenError> {
        let scope = &subquery.table;
        if subquery.projection.is_empty() {
            return Err(FlattenError::EmptyProjection(scope.alias.clone()));
        }

        let mut taken: HashSet<String> = subquery
            .projection
            .iter()
            .filter_map(outer_name)
            .map(str::to_string)
            .collect();

        let mut inner_projection = Vec::with_capacity(subquery.projection.len());
        let mut outer_projection = Vec::with_capacity(subquery.projection.len());

        for expr in &subquery.projection {
            if let Some(reference) = lift_from_subquery(expr, scope) {
                inner_projection.push(expr.clone());
                outer_projection.push(self.checked(reference.into(), &scope.alias)?);
            } else if expr.is_simple_expression() {
                log::trace!("Inlining simple projection {} from '{}'", expr, scope.alias);
                inner_projection.push(expr.clone());
                outer_projection.push(expr.clone());
            } else {
                let name = unique_alias(&self.alias_prefix, &taken);
                log::debug!("Aliasing {} as '{}' inside '{}'", expr, name, scope.alias);
                taken.insert(name.clone());

                let aliased = Expr::alias(expr.clone(), name);
                let reference: Expr = ColumnReference::new(aliased.clone(), scope.clone()).into();
                inner_projection.push(aliased);
                outer_projection.push(self.checked(reference, &scope.alias)?);
            }
        }

        Ok(FlattenedSubquery {
            subquery: SelectExpr {
                table: scope.clone(),
                projection: inner_projection,
            },
            outer_projection,
        })
    }

    fn checked(&self, reference: Expr, alias: &str) -> Result<Expr, FlattenError> {
        let depth = reference_depth(&reference);
        if depth > self.max_lift_depth as usize {
            return Err(FlattenError::LiftDepthExceeded {
                alias: alias.to_string(),
                depth,
                max: self.max_lift_depth,
            });
        }
        Ok(reference)
    }
}

/// Name the enclosing query sees for a projection entry, if it has one.
fn outer_name(expr: &Expr) -> Option<&str> {
    match expr {
        Expr::Alias(alias) => Some(&alias.alias),
        Expr::Column(col) => Some(col.name()),
        Expr::ColumnReference(reference) => Some(reference.name()),
        _ => None,
    }
}
