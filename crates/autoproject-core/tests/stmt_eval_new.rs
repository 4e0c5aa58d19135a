use autoproject_core::{
    schema::{ModelBuilder, ModelId, PropertyId, Visibility},
    stmt::{Expr, ExprNew, Type, Value},
    Schema,
};

const POINT: ModelId = ModelId(0);
const POINT_X: PropertyId = POINT.property(0);
const POINT_Y: PropertyId = POINT.property(1);
const POINT_LABEL: PropertyId = POINT.property(2);
const POINT_SECRET: PropertyId = POINT.property(3);

const TAGGED: ModelId = ModelId(1);
const TAGGED_ID: PropertyId = TAGGED.property(0);
const TAGGED_POINT: PropertyId = TAGGED.property(1);

fn schema() -> Schema {
    Schema::builder()
        .model(
            ModelBuilder::new("Point")
                .property("X", Type::I32)
                .property("Y", Type::I32)
                .property("Label", Type::String)
                .property_with("Secret", Type::I32, Some(Visibility::Private), None)
                .constructor([("x", Type::I32)], [("X", Expr::arg(0))])
                .constructor(
                    [("x", Type::I32), ("y", Type::I32)],
                    [
                        ("X", Expr::arg(0)),
                        ("Y", Expr::arg(1)),
                        ("Secret", Expr::arg(1)),
                    ],
                ),
        )
        .model(
            ModelBuilder::new("Tagged")
                .property_with(
                    "Id",
                    Type::I64,
                    Some(Visibility::Public),
                    Some(Visibility::Private),
                )
                .property("Point", Type::Model(POINT)),
        )
        .build()
        .unwrap()
}

#[test]
fn fields_start_at_their_defaults() {
    let schema = schema();
    let value = Expr::new_object(TAGGED).eval(&schema).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.model(), TAGGED);
    assert_eq!(object.get(TAGGED_ID), &Value::I64(0));
    assert_eq!(object.get(TAGGED_POINT), &Value::Null);
}

#[test]
fn constructor_body_runs_before_bindings() {
    let schema = schema();

    let value = Expr::from(ExprNew::new(POINT).arg(5i32))
        .eval(&schema)
        .unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.get(POINT_X), &Value::I32(5));
    assert_eq!(object.get(POINT_Y), &Value::I32(0));
    assert_eq!(object.get(POINT_LABEL), &Value::Null);

    let value = Expr::from(ExprNew::new(POINT).arg(5i32).bind(POINT_X, 10i32))
        .eval(&schema)
        .unwrap();
    assert_eq!(value.as_object().unwrap().get(POINT_X), &Value::I32(10));
}

#[test]
fn constructor_may_assign_through_private_setter() {
    let schema = schema();

    let value = Expr::from(ExprNew::new(POINT).arg(1i32).arg(2i32))
        .eval(&schema)
        .unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.get(POINT_Y), &Value::I32(2));
    assert_eq!(object.get(POINT_SECRET), &Value::I32(2));
}

#[test]
fn missing_constructor_overload_fails() {
    let schema = schema();

    let err = Expr::new_object(POINT).eval(&schema).unwrap_err();
    assert!(err.is_expression_evaluation_failed());

    let err = Expr::from(ExprNew::new(TAGGED).arg(1i64))
        .eval(&schema)
        .unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}

#[test]
fn constructor_argument_type_is_checked() {
    let schema = schema();

    let err = Expr::from(ExprNew::new(POINT).arg(5i64))
        .eval(&schema)
        .unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}

#[test]
fn binding_private_setter_fails() {
    let schema = schema();

    let err = Expr::from(ExprNew::new(TAGGED).bind(TAGGED_ID, 1i64))
        .eval(&schema)
        .unwrap_err();
    assert!(err.is_expression_evaluation_failed());
    assert!(err.to_string().contains("setter"), "{err}");
}

#[test]
fn binding_wrong_type_fails() {
    let schema = schema();

    let err = Expr::from(ExprNew::new(TAGGED).bind(TAGGED_ID, 1i32))
        .eval(&schema)
        .unwrap_err();
    assert!(err.is_expression_evaluation_failed());

    let err = Expr::from(ExprNew::new(POINT).arg(1i32).bind(POINT_LABEL, 1i32))
        .eval(&schema)
        .unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}

#[test]
fn binding_null_to_reference_property() {
    let schema = schema();

    let value = Expr::from(ExprNew::new(TAGGED).bind(TAGGED_POINT, Expr::null()))
        .eval(&schema)
        .unwrap();
    assert!(value.as_object().unwrap().get(TAGGED_POINT).is_null());
}

#[test]
fn member_reads_nested_objects() {
    let schema = schema();

    let point = ExprNew::new(POINT).arg(3i32).bind(POINT_LABEL, "p");
    let tagged = ExprNew::new(TAGGED).bind(TAGGED_POINT, point);

    let label = Expr::member(Expr::member(Expr::from(tagged), TAGGED_POINT), POINT_LABEL);
    assert_eq!(label.eval(&schema).unwrap(), Value::from("p"));
}

#[test]
fn member_of_null_fails() {
    let schema = schema();

    let expr = Expr::member(
        Expr::member(Expr::new_object(TAGGED), TAGGED_POINT),
        POINT_X,
    );
    let err = expr.eval(&schema).unwrap_err();
    assert!(err.is_expression_evaluation_failed());
    assert!(err.to_string().contains("null reference"), "{err}");
}

#[test]
fn member_private_getter_fails() {
    let schema = schema();

    let expr = Expr::member(Expr::from(ExprNew::new(POINT).arg(1i32)), POINT_SECRET);
    let err = expr.eval(&schema).unwrap_err();
    assert!(err.is_expression_evaluation_failed());
    assert!(err.to_string().contains("getter"), "{err}");
}

#[test]
fn member_of_another_model_fails() {
    let schema = schema();

    let expr = Expr::member(Expr::new_object(TAGGED), POINT_X);
    assert!(expr.eval(&schema).unwrap_err().is_expression_evaluation_failed());
}

#[test]
fn member_of_undeclared_property_fails() {
    let schema = schema();

    let expr = Expr::member(Expr::new_object(TAGGED), TAGGED.property(9));
    let err = expr.eval(&schema).unwrap_err();
    assert!(err.is_expression_evaluation_failed());
    assert!(err.to_string().contains("unknown property"), "{err}");

    let expr = Expr::member(Expr::new_object(TAGGED), ModelId(7).property(0));
    assert!(expr.eval(&schema).unwrap_err().is_expression_evaluation_failed());
}

#[test]
fn binding_undeclared_property_fails() {
    let schema = schema();

    let err = Expr::from(ExprNew::new(TAGGED).bind(TAGGED.property(9), 1i64))
        .eval(&schema)
        .unwrap_err();
    assert!(err.is_expression_evaluation_failed());
    assert!(err.to_string().contains("unknown property"), "{err}");
}

#[test]
fn shared_objects_keep_identity() {
    let schema = schema();

    let point = Expr::from(ExprNew::new(POINT).arg(3i32)).eval(&schema).unwrap();
    let tagged = Expr::from(ExprNew::new(TAGGED).bind(TAGGED_POINT, point.clone()))
        .eval(&schema)
        .unwrap();

    let read = tagged.as_object().unwrap().get(TAGGED_POINT);
    assert!(read.as_object().unwrap().ptr_eq(point.as_object().unwrap()));
}
