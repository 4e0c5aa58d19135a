#![allow(dead_code)]

use autoproject::{
    stmt::{ExprNew, Type},
    Db, Expr, ModelBuilder, ModelId, PropertyId, Value, Visibility,
};

pub const EMPTY: ModelId = ModelId(0);

pub const TEST_TYPE: ModelId = ModelId(1);
pub const TEST_TYPE_FOO: PropertyId = TEST_TYPE.property(0);
pub const TEST_TYPE_BAR: PropertyId = TEST_TYPE.property(1);

pub const TOKEN: ModelId = ModelId(2);
pub const TOKEN_FOO: PropertyId = TOKEN.property(0);

pub const COMPLEX_SOURCE: ModelId = ModelId(3);
pub const COMPLEX_SOURCE_TOKEN: PropertyId = COMPLEX_SOURCE.property(0);

pub const COMPLEX_TARGET: ModelId = ModelId(4);
pub const COMPLEX_TARGET_TOKEN: PropertyId = COMPLEX_TARGET.property(0);

pub const MISMATCH_SOURCE: ModelId = ModelId(5);
pub const MISMATCH_SOURCE_FOO: PropertyId = MISMATCH_SOURCE.property(0);

pub const MISMATCH_TARGET: ModelId = ModelId(6);
pub const MISMATCH_TARGET_FOO: PropertyId = MISMATCH_TARGET.property(0);

pub const ACCESSOR_SOURCE: ModelId = ModelId(7);
pub const ACCESSOR_SOURCE_PROJECTED: PropertyId = ACCESSOR_SOURCE.property(0);
pub const ACCESSOR_SOURCE_PRIVATE_SET_IN_TARGET: PropertyId = ACCESSOR_SOURCE.property(1);
pub const ACCESSOR_SOURCE_PRIVATE_GET_IN_SOURCE: PropertyId = ACCESSOR_SOURCE.property(2);

pub const ACCESSOR_TARGET: ModelId = ModelId(8);
pub const ACCESSOR_TARGET_PROJECTED: PropertyId = ACCESSOR_TARGET.property(0);
pub const ACCESSOR_TARGET_PRIVATE_SET_IN_TARGET: PropertyId = ACCESSOR_TARGET.property(1);
pub const ACCESSOR_TARGET_PRIVATE_GET_IN_SOURCE: PropertyId = ACCESSOR_TARGET.property(2);

pub const CTOR_SOURCE: ModelId = ModelId(9);
pub const CTOR_SOURCE_BAR: PropertyId = CTOR_SOURCE.property(0);
pub const CTOR_SOURCE_BAZ: PropertyId = CTOR_SOURCE.property(1);

pub const CTOR_TARGET: ModelId = ModelId(10);
pub const CTOR_TARGET_FOO: PropertyId = CTOR_TARGET.property(0);
pub const CTOR_TARGET_BAR: PropertyId = CTOR_TARGET.property(1);
pub const CTOR_TARGET_BAZ: PropertyId = CTOR_TARGET.property(2);

pub const AGGREGATE: ModelId = ModelId(11);
pub const AGGREGATE_FOO: PropertyId = AGGREGATE.property(0);

/// `TestType` with 64-bit properties
pub const WIDE: ModelId = ModelId(12);
pub const WIDE_FOO: PropertyId = WIDE.property(0);
pub const WIDE_BAR: PropertyId = WIDE.property(1);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn db() -> Db {
    init_logging();

    Db::builder()
        .model(ModelBuilder::new("Empty"))
        .model(
            ModelBuilder::new("TestType")
                .property("Foo", Type::I32)
                .property("Bar", Type::I32),
        )
        .model(ModelBuilder::new("Token").property("Foo", Type::I32))
        .model(ModelBuilder::new("ComplexSource").property("Token", TOKEN))
        .model(ModelBuilder::new("ComplexTarget").property("Token", TOKEN))
        .model(ModelBuilder::new("MismatchSource").property("Foo", Type::I32))
        .model(ModelBuilder::new("MismatchTarget").property("Foo", Type::String))
        .model(
            ModelBuilder::new("AccessorSource")
                .property("Projected", Type::I32)
                .property("IgnoredPrivateSetInTarget", Type::I32)
                .property_with(
                    "IgnoredPrivateGetInSource",
                    Type::I32,
                    Some(Visibility::Private),
                    Some(Visibility::Public),
                ),
        )
        .model(
            ModelBuilder::new("AccessorTarget")
                .property("Projected", Type::I32)
                .property_with(
                    "IgnoredPrivateSetInTarget",
                    Type::I32,
                    Some(Visibility::Public),
                    Some(Visibility::Private),
                )
                .property("IgnoredPrivateGetInSource", Type::I32),
        )
        .model(
            ModelBuilder::new("CtorSource")
                .property("Bar", Type::I32)
                .property("Baz", Type::I32),
        )
        .model(
            ModelBuilder::new("CtorTarget")
                .property("Foo", Type::I32)
                .property("Bar", Type::I32)
                .property("Baz", Type::I32)
                .constructor([("foo", Type::I32)], [("Foo", Expr::arg(0))]),
        )
        .model(ModelBuilder::new("Aggregate").property("Foo", Type::I64))
        .model(
            ModelBuilder::new("Wide")
                .property("Foo", Type::I64)
                .property("Bar", Type::I64),
        )
        .build()
        .unwrap()
}

/// `project_into(source, || target)`
pub fn project_into(source: Expr, target: impl Into<Expr>) -> Expr {
    Expr::project_into(source, Expr::lambda([], target))
}

/// `new TestType { Foo = foo, Bar = bar }`
pub fn test_type(foo: i32, bar: i32) -> Expr {
    ExprNew::new(TEST_TYPE)
        .bind(TEST_TYPE_FOO, foo)
        .bind(TEST_TYPE_BAR, bar)
        .into()
}

/// Read `property` from an object value.
#[track_caller]
pub fn field(value: &Value, property: PropertyId) -> Value {
    value
        .as_object()
        .expect("expected an object")
        .get(property)
        .clone()
}
