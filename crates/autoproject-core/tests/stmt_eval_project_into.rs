use autoproject_core::{
    schema::{ModelBuilder, ModelId},
    stmt::{Expr, Type},
    Schema,
};

const ITEM: ModelId = ModelId(0);

fn schema() -> Schema {
    Schema::builder()
        .model(ModelBuilder::new("Item").property("Foo", Type::I32))
        .build()
        .unwrap()
}

fn marker(source: Expr) -> Expr {
    Expr::project_into(source, Expr::lambda([], Expr::new_object(ITEM)))
}

#[test]
fn evaluating_a_marker_fails() {
    let schema = schema();

    let err = marker(Expr::new_object(ITEM)).eval(&schema).unwrap_err();
    assert!(err.is_not_activated());
    assert!(err.to_string().contains("project_into"), "{err}");
    assert!(err.to_string().contains("activate_auto_projects"), "{err}");
}

#[test]
fn evaluating_a_marker_fails_for_any_source() {
    let schema = schema();

    for source in [Expr::from(1i64), Expr::from("text"), Expr::null(), Expr::range(1, 1)] {
        assert!(marker(source).eval(&schema).unwrap_err().is_not_activated());
    }
}

#[test]
fn evaluating_a_nested_marker_fails() {
    let schema = schema();

    let expr = Expr::map(
        Expr::range(1, 3),
        Expr::lambda([Type::I64], marker(Expr::arg(0))),
    );
    assert!(expr.eval(&schema).unwrap_err().is_not_activated());
    assert!(expr.contains_project_into());
}
