mod common;
use common::*;

use autoproject::{stmt::ExprNew, Expr, Type, Value};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn projects_with_explicit_bindings() {
    let db = db();

    let query = db
        .range(1, 1)
        .select(|_| test_type(7, 9))
        .auto_project(|_| ExprNew::new(TEST_TYPE).bind(TEST_TYPE_BAR, 10).into())
        .unwrap();

    // No activation needed
    assert!(!query.expr().contains_project_into());

    let item = db.single(&query).await.unwrap();
    assert_eq!(field(&item, TEST_TYPE_FOO), Value::I32(7));
    assert_eq!(field(&item, TEST_TYPE_BAR), Value::I32(10));
}

#[tokio::test]
async fn works_without_bindings() {
    let db = db();

    let query = db
        .range(1, 1)
        .select(|_| Expr::new_object(EMPTY))
        .auto_project(|_| Expr::new_object(EMPTY))
        .unwrap();

    assert_eq!(db.exec(&query).await.unwrap().len(), 1);
    assert_eq!(query.item_ty(), &Type::Model(EMPTY));
}

#[tokio::test]
async fn projects_untouched_properties() {
    let db = db();

    let query = db
        .range(1, 1)
        .select(|_| test_type(7, 9))
        .auto_project(|_| Expr::new_object(TEST_TYPE))
        .unwrap();

    let item = db.single(&query).await.unwrap();
    assert_eq!(field(&item, TEST_TYPE_FOO), Value::I32(7));
    assert_eq!(field(&item, TEST_TYPE_BAR), Value::I32(9));
}

#[tokio::test]
async fn only_projects_matching_types() {
    let db = db();

    let query = db
        .range(1, 1)
        .select(|_| ExprNew::new(MISMATCH_SOURCE).bind(MISMATCH_SOURCE_FOO, 1).into())
        .auto_project(|_| Expr::new_object(MISMATCH_TARGET))
        .unwrap();

    let item = db.single(&query).await.unwrap();
    assert_eq!(field(&item, MISMATCH_TARGET_FOO), Value::Null);
}

#[tokio::test]
async fn only_projects_public_getter_to_public_setter() {
    let db = db();

    let query = db
        .range(1, 1)
        .select(|_| {
            ExprNew::new(ACCESSOR_SOURCE)
                .bind(ACCESSOR_SOURCE_PROJECTED, 5)
                .bind(ACCESSOR_SOURCE_PRIVATE_SET_IN_TARGET, 6)
                .bind(ACCESSOR_SOURCE_PRIVATE_GET_IN_SOURCE, 7)
                .into()
        })
        .auto_project(|_| Expr::new_object(ACCESSOR_TARGET))
        .unwrap();

    let item = db.single(&query).await.unwrap();
    assert_eq!(field(&item, ACCESSOR_TARGET_PROJECTED), Value::I32(5));
    assert_eq!(
        field(&item, ACCESSOR_TARGET_PRIVATE_SET_IN_TARGET),
        Value::I32(0)
    );
    assert_eq!(
        field(&item, ACCESSOR_TARGET_PRIVATE_GET_IN_SOURCE),
        Value::I32(0)
    );
}

#[tokio::test]
async fn preserves_complex_bindings() {
    let db = db();

    let query = db
        .range(1, 1)
        .select(|_| Expr::new_object(EMPTY))
        .auto_project(|_| {
            ExprNew::new(AGGREGATE)
                .bind(AGGREGATE_FOO, Expr::max(Expr::range(11, 5)))
                .into()
        })
        .unwrap();

    let item = db.single(&query).await.unwrap();
    assert_eq!(field(&item, AGGREGATE_FOO), Value::I64(15));
}

#[tokio::test]
async fn preserves_constructor_invocation() {
    let db = db();

    let source = db.range(1, 1).select(|_| {
        ExprNew::new(CTOR_SOURCE)
            .bind(CTOR_SOURCE_BAR, 6)
            .bind(CTOR_SOURCE_BAZ, 7)
            .into()
    });

    let query = source
        .auto_project(|_| ExprNew::new(CTOR_TARGET).arg(5).into())
        .unwrap();
    let item = db.single(&query).await.unwrap();

    assert_eq!(field(&item, CTOR_TARGET_FOO), Value::I32(5));
    assert_eq!(field(&item, CTOR_TARGET_BAR), Value::I32(6));
    assert_eq!(field(&item, CTOR_TARGET_BAZ), Value::I32(7));

    let query = source
        .auto_project(|_| {
            ExprNew::new(CTOR_TARGET)
                .arg(5)
                .bind(CTOR_TARGET_BAR, 10)
                .into()
        })
        .unwrap();
    let item = db.single(&query).await.unwrap();

    assert_eq!(field(&item, CTOR_TARGET_FOO), Value::I32(5));
    assert_eq!(field(&item, CTOR_TARGET_BAR), Value::I32(10));
    assert_eq!(field(&item, CTOR_TARGET_BAZ), Value::I32(7));
}

#[tokio::test]
async fn projects_complex_type_properties() {
    let db = db();

    let query = db
        .range(1, 1)
        .select(|_| {
            let token = ExprNew::new(TOKEN).bind(TOKEN_FOO, 5);
            ExprNew::new(COMPLEX_SOURCE)
                .bind(COMPLEX_SOURCE_TOKEN, token)
                .into()
        })
        .auto_project(|_| Expr::new_object(COMPLEX_TARGET))
        .unwrap();

    let item = db.single(&query).await.unwrap();
    let token = field(&item, COMPLEX_TARGET_TOKEN);
    assert_eq!(field(&token, TOKEN_FOO), Value::I32(5));
}

#[tokio::test]
async fn explicit_bindings_may_read_the_item() {
    let db = db();

    let query = db
        .range(1, 3)
        .select(|x| ExprNew::new(WIDE).bind(WIDE_FOO, x).into())
        .auto_project(|x| {
            ExprNew::new(WIDE)
                .bind(WIDE_BAR, Expr::member(x, WIDE_FOO))
                .into()
        })
        .unwrap();

    let items = db.exec(&query).await.unwrap();
    let pairs: Vec<_> = items
        .iter()
        .map(|item| (field(item, WIDE_FOO), field(item, WIDE_BAR)))
        .collect();

    assert_eq!(
        pairs,
        [
            (Value::I64(1), Value::I64(1)),
            (Value::I64(2), Value::I64(2)),
            (Value::I64(3), Value::I64(3)),
        ]
    );
}

#[tokio::test]
async fn does_not_interfere_with_activation() {
    let db = db();

    let query = db
        .range(1, 1)
        .select(|_| test_type(7, 9))
        .auto_project(|_| Expr::new_object(TEST_TYPE))
        .unwrap();

    let activated = query.activate_auto_projects().unwrap();
    assert!(activated.ptr_eq(&query));

    let item = db.single(&activated).await.unwrap();
    assert_eq!(field(&item, TEST_TYPE_FOO), Value::I32(7));
    assert_eq!(field(&item, TEST_TYPE_BAR), Value::I32(9));
}

#[tokio::test]
async fn combines_with_project_into() {
    let db = db();

    let query = db
        .range(1, 1)
        .select(|_| test_type(7, 9))
        .auto_project(|_| Expr::new_object(TEST_TYPE))
        .unwrap()
        .select(|x| project_into(x, Expr::new_object(TEST_TYPE)))
        .auto_project(|_| Expr::new_object(TEST_TYPE))
        .unwrap()
        .select(|x| project_into(x, Expr::new_object(TEST_TYPE)));

    let item = db
        .single(&query.activate_auto_projects().unwrap())
        .await
        .unwrap();

    assert_eq!(field(&item, TEST_TYPE_FOO), Value::I32(7));
    assert_eq!(field(&item, TEST_TYPE_BAR), Value::I32(9));
}

#[tokio::test]
async fn rejects_non_construction() {
    let db = db();

    let err = db
        .range(1, 1)
        .select(|_| test_type(7, 9))
        .auto_project(|x| x)
        .unwrap_err();

    assert!(err.is_unsupported_target_shape(), "{err}");
}
