use crate::{
    async_trait,
    stmt::{Expr, Value},
    Schema,
};

use std::{fmt::Debug, sync::Arc};

/// Executes query graphs.
///
/// A provider receives a graph that has already been activated. It must not
/// contain `project_into` markers; a provider that evaluates one reports
/// [`Error::not_activated`](crate::Error::not_activated).
#[async_trait]
pub trait Provider: Debug + Send + Sync + 'static {
    /// Evaluate `expr` and return the materialized result. Pipelines evaluate
    /// to [`Value::List`].
    async fn exec(&self, schema: &Arc<Schema>, expr: Arc<Expr>) -> crate::Result<Value>;
}
