//! Expression node model
//!
//! The tree the resolver, classifier and lifter navigate. Nodes are immutable
//! once built: wrapper variants own their inner node through a `Box`, and
//! relocating a node always constructs a new one.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of the clause or table that introduced an expression into the query.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct QuerySourceId(Uuid);

impl QuerySourceId {
    /// Allocate a fresh, unique identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for QuerySourceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuerySourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Model property and the physical column it maps to.
///
/// Opaque to this crate: the mapping is attached upstream and never looked up here.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct SchemaProperty {
    pub name: String,
    pub column_name: String,
}

impl SchemaProperty {
    pub fn new(name: impl Into<String>, column_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_name: column_name.into(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum TableKind {
    /// Physical table, optionally schema-qualified
    Table { name: String, schema: Option<String> },
    /// Nested query exposed under an alias
    Subquery,
}

/// Scope marker for a physical table or a nested query.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct TableExpr {
    pub kind: TableKind,
    pub alias: String,
    pub query_source: QuerySourceId,
}

impl TableExpr {
    pub fn table(name: impl Into<String>, alias: impl Into<String>, query_source: QuerySourceId) -> Self {
        Self {
            kind: TableKind::Table {
                name: name.into(),
                schema: None,
            },
            alias: alias.into(),
            query_source,
        }
    }

    pub fn subquery(alias: impl Into<String>, query_source: QuerySourceId) -> Self {
        Self {
            kind: TableKind::Subquery,
            alias: alias.into(),
            query_source,
        }
    }

    pub fn is_subquery(&self) -> bool {
        matches!(self.kind, TableKind::Subquery)
    }
}

/// Direct reference to a physical column exposed by `table`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ColumnExpr {
    pub property: SchemaProperty,
    pub table: TableExpr,
}

impl ColumnExpr {
    pub fn new(property: SchemaProperty, table: TableExpr) -> Self {
        Self { property, table }
    }

    pub fn name(&self) -> &str {
        &self.property.column_name
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AliasExpr {
    pub expr: Box<Expr>,
    pub alias: String,
}

impl AliasExpr {
    pub fn new(expr: Expr, alias: impl Into<String>) -> Self {
        Self {
            expr: Box::new(expr),
            alias: alias.into(),
        }
    }
}

/// A node living in a nested scope, seen from `table`, one level further out.
///
/// Only built by the lifter; always exactly one level of indirection over `expr`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(try_from = "ColumnReferenceRepr")]
pub struct ColumnReference {
    expr: Box<Expr>,
    table: TableExpr,
}

#[derive(Deserialize)]
struct ColumnReferenceRepr {
    expr: Box<Expr>,
    table: TableExpr,
}

impl TryFrom<ColumnReferenceRepr> for ColumnReference {
    type Error = String;

    fn try_from(repr: ColumnReferenceRepr) -> Result<Self, Self::Error> {
        let liftable = matches!(
            repr.expr.as_ref(),
            Expr::Column(_) | Expr::Alias(_) | Expr::ColumnReference(_)
        );
        if !liftable {
            return Err(format!(
                "column reference into '{}' cannot wrap {}",
                repr.table.alias, repr.expr
            ));
        }
        Ok(Self {
            expr: repr.expr,
            table: repr.table,
        })
    }
}

impl ColumnReference {
    pub(crate) fn new(expr: Expr, table: TableExpr) -> Self {
        Self {
            expr: Box::new(expr),
            table,
        }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn table(&self) -> &TableExpr {
        &self.table
    }

    /// Name the outer scope addresses this reference by.
    pub fn name(&self) -> &str {
        match self.expr.as_ref() {
            Expr::Column(col) => col.name(),
            Expr::Alias(alias) => &alias.alias,
            Expr::ColumnReference(inner) => inner.name(),
            // construction and deserialization only admit the three variants above
            _ => "",
        }
    }
}

/// Marks the operand as possibly null, e.g. the right side of an outer join.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct NullableExpr {
    pub operand: Box<Expr>,
}

/// Numeric or reference conversion wrapping an operand.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ConvertExpr {
    pub operand: Box<Expr>,
    pub target_type: String,
}

/// Nested query: its own scope marker plus the expressions it projects.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SelectExpr {
    pub table: TableExpr,
    pub projection: Vec<Expr>,
}

impl SelectExpr {
    pub fn new(alias: impl Into<String>, query_source: QuerySourceId, projection: Vec<Expr>) -> Self {
        Self {
            table: TableExpr::subquery(alias, query_source),
            projection,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    Null,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Expr {
    Column(ColumnExpr),

    Alias(AliasExpr),

    ColumnReference(ColumnReference),

    Nullable(NullableExpr),

    Convert(ConvertExpr),

    Table(TableExpr),

    Select(Box<SelectExpr>),

    Constant(Literal),

    Parameter(String),

    /// Any node this layer does not look into (compound operators, function
    /// calls, ...), carried as its rendered text
    Other(String),
}

impl Expr {
    pub fn column(property: SchemaProperty, table: TableExpr) -> Self {
        Expr::Column(ColumnExpr::new(property, table))
    }

    pub fn alias(expr: Expr, alias: impl Into<String>) -> Self {
        Expr::Alias(AliasExpr::new(expr, alias))
    }

    pub fn nullable(operand: Expr) -> Self {
        Expr::Nullable(NullableExpr {
            operand: Box::new(operand),
        })
    }

    pub fn convert(operand: Expr, target_type: impl Into<String>) -> Self {
        Expr::Convert(ConvertExpr {
            operand: Box::new(operand),
            target_type: target_type.into(),
        })
    }

    pub fn constant(literal: Literal) -> Self {
        Expr::Constant(literal)
    }

    pub fn parameter(name: impl Into<String>) -> Self {
        Expr::Parameter(name.into())
    }

    pub fn other(text: impl Into<String>) -> Self {
        Expr::Other(text.into())
    }
}

impl From<ColumnExpr> for Expr {
    fn from(col: ColumnExpr) -> Self {
        Expr::Column(col)
    }
}

impl From<AliasExpr> for Expr {
    fn from(alias: AliasExpr) -> Self {
        Expr::Alias(alias)
    }
}

impl From<ColumnReference> for Expr {
    fn from(reference: ColumnReference) -> Self {
        Expr::ColumnReference(reference)
    }
}

impl From<TableExpr> for Expr {
    fn from(table: TableExpr) -> Self {
        Expr::Table(table)
    }
}

impl From<SelectExpr> for Expr {
    fn from(select: SelectExpr) -> Self {
        Expr::Select(Box::new(select))
    }
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Expr::Constant(literal)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(i) => write!(f, "{}", i),
            Literal::Float(v) => write!(f, "{}", v),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Literal::Null => write!(f, "NULL"),
        }
    }
}

impl fmt::Display for TableExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TableKind::Table { name, schema: Some(schema) } => {
                write!(f, "{}.{} AS {}", schema, name, self.alias)
            }
            TableKind::Table { name, schema: None } => write!(f, "{} AS {}", name, self.alias),
            TableKind::Subquery => write!(f, "(subquery) AS {}", self.alias),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Column(col) => write!(f, "{}.{}", col.table.alias, col.name()),
            Expr::Alias(alias) => write!(f, "{} AS {}", alias.expr, alias.alias),
            Expr::ColumnReference(reference) => {
                write!(f, "ref({} -> {})", reference.table.alias, reference.expr)
            }
            Expr::Nullable(nullable) => write!(f, "nullable({})", nullable.operand),
            Expr::Convert(convert) => {
                write!(f, "convert({} as {})", convert.operand, convert.target_type)
            }
            Expr::Table(table) => write!(f, "{}", table),
            Expr::Select(select) => {
                let items: Vec<String> = select.projection.iter().map(|e| e.to_string()).collect();
                write!(f, "(SELECT {}) AS {}", items.join(", "), select.table.alias)
            }
            Expr::Constant(literal) => write!(f, "{}", literal),
            Expr::Parameter(name) => write!(f, "@{}", name),
            Expr::Other(text) => write!(f, "{}", text),
        }
    }
}
