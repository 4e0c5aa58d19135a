use autoproject_core::{
    async_trait,
    stmt::{Expr, Value},
    Provider, Result, Schema,
};

use std::sync::Arc;

/// Evaluates queries in process with the reference evaluator.
#[derive(Debug, Default, Clone)]
pub struct Memory;

impl Memory {
    pub fn new() -> Memory {
        Memory
    }
}

#[async_trait]
impl Provider for Memory {
    async fn exec(&self, schema: &Arc<Schema>, expr: Arc<Expr>) -> Result<Value> {
        expr.eval(schema)
    }
}
