mod builder;
pub use builder::Builder;

use crate::{Provider, Query};

use autoproject_core::{
    stmt::{Expr, Type, Value},
    Error, Result, Schema,
};

use std::sync::Arc;

/// A schema paired with the provider that executes queries over it.
///
/// Cloning is cheap; clones share the schema and the provider.
#[derive(Debug, Clone)]
pub struct Db {
    schema: Arc<Schema>,
    provider: Arc<dyn Provider>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// A pipeline over `count` consecutive integers starting at `start`.
    pub fn range(&self, start: i64, count: i64) -> Query {
        Query::new(self.schema.clone(), Expr::range(start, count), Type::I64)
    }

    /// A pipeline over constant `values`, each of type `item_ty`.
    pub fn values<T>(&self, item_ty: impl Into<Type>, values: impl IntoIterator<Item = T>) -> Query
    where
        T: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect();
        Query::new(self.schema.clone(), Value::List(values), item_ty.into())
    }

    /// A pipeline over an arbitrary list expression. The item type is
    /// inferred.
    pub fn query(&self, expr: impl Into<Expr>) -> Query {
        Query::from_expr(self.schema.clone(), Arc::new(expr.into()))
    }

    /// Execute a query, returning every item.
    ///
    /// The query is handed to the provider as is. Call
    /// [`Query::activate_auto_projects`] first if it contains
    /// `project_into` markers.
    pub async fn exec(&self, query: &Query) -> Result<Vec<Value>> {
        log::debug!("exec query; item_ty={:?}", query.item_ty());

        match self.provider.exec(&self.schema, query.expr().clone()).await? {
            Value::List(items) => Ok(items),
            value => Err(Error::invalid_result(format!(
                "expected a list of items; value={value:?}"
            ))),
        }
    }

    /// Execute a query that must produce exactly one item.
    pub async fn single(&self, query: &Query) -> Result<Value> {
        let mut items = self.exec(query).await?;

        if items.len() != 1 {
            return Err(Error::invalid_result(format!(
                "expected exactly one item, found {}",
                items.len()
            )));
        }

        Ok(items.remove(0))
    }
}
