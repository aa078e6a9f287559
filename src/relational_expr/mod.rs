pub mod classifier;
pub mod errors;
pub mod expr;
pub mod lifter;
pub mod projection;

mod resolver;

pub use classifier::{alias_has_column, remove_convert};
pub use errors::FlattenError;
pub use expr::{
    AliasExpr, ColumnExpr, ColumnReference, ConvertExpr, Expr, Literal, NullableExpr,
    QuerySourceId, SchemaProperty, SelectExpr, TableExpr, TableKind,
};
pub use lifter::{lift_from_subquery, reference_depth};
pub use projection::{FlattenedSubquery, SubqueryFlattener};
