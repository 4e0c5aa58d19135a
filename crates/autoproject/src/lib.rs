pub mod db;
pub use db::Db;

mod engine;
pub use engine::activate;

pub mod provider;
pub use provider::Provider;

mod query;
pub use query::Query;

pub use autoproject_core::{
    async_trait, bail, err,
    schema::{self, ModelBuilder, ModelId, PropertyId, Schema, Visibility},
    stmt::{self, Expr, ExprNew, Type, Value, ValueObject},
    Error, Result,
};
