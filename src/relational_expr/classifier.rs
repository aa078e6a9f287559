//! Shape probes over expression nodes
//!
//! Pure predicates the SQL generator uses to decide whether a node can be
//! embedded as-is or needs parenthesizing and re-aliasing first.

use super::expr::{AliasExpr, ColumnExpr, Expr};

/// Strip one wrapping conversion, if present.
pub fn remove_convert(expr: &Expr) -> &Expr {
    match expr {
        Expr::Convert(convert) => &convert.operand,
        _ => expr,
    }
}

impl Expr {
    /// True when the node, once a wrapping conversion is removed, can be inlined
    /// into a larger expression without extra parentheses or a new alias.
    pub fn is_simple_expression(&self) -> bool {
        matches!(
            remove_convert(self),
            Expr::Constant(_)
                | Expr::Column(_)
                | Expr::Parameter(_)
                | Expr::ColumnReference(_)
                | Expr::Alias(_)
        )
    }

    pub fn is_alias_wrapping_column(&self) -> bool {
        match self {
            Expr::Alias(alias) => alias_has_column(Some(alias)),
            _ => false,
        }
    }

    pub fn is_alias_wrapping_select(&self) -> bool {
        match self {
            Expr::Alias(alias) => matches!(alias.expr.as_ref(), Expr::Select(_)),
            _ => false,
        }
    }
}

impl AliasExpr {
    /// The aliased column, only when it is the immediate inner node.
    pub fn try_get_column(&self) -> Option<&ColumnExpr> {
        match self.expr.as_ref() {
            Expr::Column(col) => Some(col),
            _ => None,
        }
    }
}

/// Null-safe variant for callers holding a possibly absent alias.
pub fn alias_has_column(alias: Option<&AliasExpr>) -> bool {
    alias.is_some_and(|alias| alias.try_get_column().is_some())
}
