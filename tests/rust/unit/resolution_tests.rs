//! Resolution properties over every node shape
//!
//! Alias is transparent to all three resolvers, and a column resolves to itself,
//! its own property and its table's query source.

#[cfg(test)]
mod resolution_tests {
    use relexpr::relational_expr::{Expr, Literal, QuerySourceId, SchemaProperty, SelectExpr, TableExpr};

    fn orders() -> TableExpr {
        TableExpr::table("Orders", "o", QuerySourceId::new())
    }

    fn sample_nodes() -> Vec<Expr> {
        let table = orders();
        let total = Expr::column(SchemaProperty::new("Total", "total"), table.clone());
        vec![
            total.clone(),
            Expr::alias(total.clone(), "t"),
            Expr::nullable(total.clone()),
            Expr::convert(total.clone(), "decimal"),
            Expr::constant(Literal::Float(1.5)),
            Expr::parameter("p0"),
            Expr::other("sum(o.total)"),
            Expr::Table(table.clone()),
            SelectExpr::new("t0", QuerySourceId::new(), vec![total]).into(),
        ]
    }

    #[test]
    fn test_column_resolves_to_itself() {
        let table = orders();
        let property = SchemaProperty::new("Total", "total");
        let expr = Expr::column(property.clone(), table.clone());

        let Expr::Column(col) = &expr else {
            panic!("expected a column");
        };
        assert_eq!(expr.try_get_column(), Some(col));
        assert_eq!(expr.try_get_property(), Some(&property));
        assert_eq!(expr.try_get_query_source(), Some(table.query_source));
    }

    #[test]
    fn test_alias_is_transparent_to_property_and_query_source() {
        for node in sample_nodes() {
            let aliased = Expr::alias(node.clone(), "x");
            assert_eq!(aliased.try_get_property(), node.try_get_property(), "property of {}", node);
            assert_eq!(
                aliased.try_get_query_source(),
                node.try_get_query_source(),
                "query source of {}",
                node
            );
            assert_eq!(aliased.try_get_column(), node.try_get_column(), "column of {}", node);
        }
    }

    #[test]
    fn test_alias_over_nullable_column() {
        let table = orders();
        let col = Expr::column(SchemaProperty::new("Name", "name"), table);
        let expr = Expr::alias(Expr::nullable(col.clone()), "n");

        let Expr::Column(inner) = &col else {
            panic!("expected a column");
        };
        assert_eq!(expr.try_get_column(), Some(inner));
        // Nullable is only crossed by column extraction
        assert_eq!(expr.try_get_property(), None);
        assert_eq!(expr.try_get_query_source(), None);
    }

    #[test]
    fn test_alias_chain_over_column() {
        let table = orders();
        let expr = Expr::alias(
            Expr::alias(Expr::column(SchemaProperty::new("Name", "name"), table.clone()), "inner"),
            "outer",
        );

        assert_eq!(expr.try_get_property().map(|p| p.name.as_str()), Some("Name"));
        assert_eq!(expr.try_get_query_source(), Some(table.query_source));
        assert_eq!(expr.try_get_column().map(|c| c.name()), Some("name"));
    }
}
