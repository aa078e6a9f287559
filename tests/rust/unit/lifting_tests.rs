//! Lifting across subquery boundaries
//!
//! A lifted column is opaque to column extraction but keeps its schema property,
//! and reports the query source of the scope it was lifted into.

#[cfg(test)]
mod lifting_tests {
    use relexpr::config::ResolverConfig;
    use relexpr::relational_expr::{
        lift_from_subquery, reference_depth, Expr, Literal, QuerySourceId, SchemaProperty,
        SelectExpr, SubqueryFlattener, TableExpr,
    };

    fn name_column(table: &TableExpr) -> Expr {
        Expr::column(SchemaProperty::new("Name", "name"), table.clone())
    }

    #[test]
    fn test_lifted_column_resolution() {
        let customers = TableExpr::table("Customers", "c", QuerySourceId::new());
        let target = TableExpr::subquery("t0", QuerySourceId::new());

        let lifted: Expr = lift_from_subquery(&name_column(&customers), &target)
            .expect("column is liftable")
            .into();

        assert_eq!(lifted.try_get_column(), None);
        assert_eq!(
            lifted.try_get_property(),
            Some(&SchemaProperty::new("Name", "name"))
        );
        assert_eq!(lifted.try_get_query_source(), Some(target.query_source));
        assert_ne!(lifted.try_get_query_source(), Some(customers.query_source));
        assert!(lifted.is_simple_expression());
    }

    #[test]
    fn test_relift_through_two_levels() {
        let customers = TableExpr::table("Customers", "c", QuerySourceId::new());
        let t1 = TableExpr::subquery("t1", QuerySourceId::new());
        let t2 = TableExpr::subquery("t2", QuerySourceId::new());

        let once: Expr = lift_from_subquery(&name_column(&customers), &t1)
            .expect("liftable")
            .into();
        let twice = lift_from_subquery(&once, &t2).expect("liftable");

        assert_eq!(twice.table(), &t2);
        assert_eq!(twice.name(), "name");

        let twice: Expr = twice.into();
        assert_eq!(reference_depth(&twice), 2);
        assert_eq!(twice.try_get_property().map(|p| p.name.as_str()), Some("Name"));
        assert_eq!(twice.try_get_query_source(), Some(t2.query_source));
    }

    #[test]
    fn test_lifted_alias_reports_outer_scope() {
        let customers = TableExpr::table("Customers", "c", QuerySourceId::new());
        let target = TableExpr::subquery("t0", QuerySourceId::new());
        let alias = Expr::alias(name_column(&customers), "n");

        let lifted: Expr = lift_from_subquery(&alias, &target).expect("liftable").into();
        assert_eq!(lifted.try_get_query_source(), Some(target.query_source));
        assert_eq!(lifted.try_get_property(), alias.try_get_property());
    }

    #[test]
    fn test_select_is_not_liftable() {
        let customers = TableExpr::table("Customers", "c", QuerySourceId::new());
        let select: Expr =
            SelectExpr::new("s", QuerySourceId::new(), vec![name_column(&customers)]).into();
        let target = TableExpr::subquery("t0", QuerySourceId::new());

        assert!(lift_from_subquery(&select, &target).is_none());
        assert!(lift_from_subquery(&Expr::constant(Literal::Boolean(true)), &target).is_none());
    }

    #[test]
    fn test_lifted_reference_serialized_shape() {
        let customers = TableExpr::table("Customers", "c", QuerySourceId::new());
        let target = TableExpr::subquery("t0", QuerySourceId::new());
        let lifted: Expr = lift_from_subquery(&name_column(&customers), &target)
            .expect("liftable")
            .into();

        let json = serde_json::to_value(&lifted).expect("serialize");
        assert_eq!(json["ColumnReference"]["table"]["alias"], "t0");
        assert_eq!(json["ColumnReference"]["expr"]["Column"]["property"]["name"], "Name");

        let back: Expr = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, lifted);
    }

    #[test]
    fn test_flatten_nested_subqueries() {
        let customers = TableExpr::table("Customers", "c", QuerySourceId::new());
        let flattener = SubqueryFlattener::new(&ResolverConfig::default());

        let inner = SelectExpr::new(
            "t0",
            QuerySourceId::new(),
            vec![name_column(&customers), Expr::other("upper(c.city)")],
        );
        let first = flattener.flatten(&inner).expect("inner level");

        let outer = SelectExpr::new("t1", QuerySourceId::new(), first.outer_projection);
        let second = flattener.flatten(&outer).expect("outer level");

        assert_eq!(
            second.outer_projection.iter().map(reference_depth).collect::<Vec<_>>(),
            vec![2, 2]
        );
        assert_eq!(
            second.outer_projection[1].to_string(),
            "ref(t1 -> ref(t0 -> upper(c.city) AS c0))"
        );
        assert_eq!(
            second.outer_projection[0].try_get_property().map(|p| p.name.as_str()),
            Some("Name")
        );
    }
}
