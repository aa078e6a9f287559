//! Generated aliases for subquery projections.
//!
//! Expressions that cannot be lifted as-is are aliased inside the subquery so the
//! outer query has a name to reference. Names are `{prefix}{n}`, with `n` the
//! smallest index not already taken by the projection.
//!
//! ## Examples
//! - prefix `c`, taken `{}` → `"c0"`
//! - prefix `c`, taken `{"c0", "c1"}` → `"c2"`

use std::collections::HashSet;

/// Generate a projection alias from a prefix and an index.
///
/// # Examples
/// ```
/// use relexpr::utils::alias_naming::projection_alias;
///
/// assert_eq!(projection_alias("c", 0), "c0");
/// assert_eq!(projection_alias("expr_", 12), "expr_12");
/// ```
pub fn projection_alias(prefix: &str, index: usize) -> String {
    format!("{prefix}{index}")
}

/// First `{prefix}{n}` name not in `taken`.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use relexpr::utils::alias_naming::unique_alias;
///
/// let taken: HashSet<String> = ["c0".to_string(), "c2".to_string()].into_iter().collect();
/// assert_eq!(unique_alias("c", &taken), "c1");
/// ```
pub fn unique_alias(prefix: &str, taken: &HashSet<String>) -> String {
    (0..)
        .map(|index| projection_alias(prefix, index))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| prefix.to_string())
}
