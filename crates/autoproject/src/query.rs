use crate::engine;

use autoproject_core::{
    stmt::{Expr, ExprContext, ExprLambda, Type},
    Result, Schema,
};

use std::sync::Arc;

/// A deferred pipeline: a computation graph evaluating to a list of items.
///
/// Queries are immutable. Every operator returns a new query that shares
/// the graph it was built from.
#[derive(Debug, Clone)]
pub struct Query {
    schema: Arc<Schema>,

    /// Root of the computation graph
    expr: Arc<Expr>,

    /// Type of each item the pipeline produces
    item_ty: Type,
}

impl Query {
    pub(crate) fn new(schema: Arc<Schema>, expr: impl Into<Expr>, item_ty: Type) -> Query {
        Query {
            schema,
            expr: Arc::new(expr.into()),
            item_ty,
        }
    }

    pub(crate) fn from_expr(schema: Arc<Schema>, expr: Arc<Expr>) -> Query {
        let item_ty = match ExprContext::new(&schema).infer_expr_ty(&expr) {
            Type::List(item) => *item,
            _ => Type::Unknown,
        };

        Query {
            schema,
            expr,
            item_ty,
        }
    }

    pub fn expr(&self) -> &Arc<Expr> {
        &self.expr
    }

    pub fn item_ty(&self) -> &Type {
        &self.item_ty
    }

    /// Returns `true` if both queries share the same graph.
    pub fn ptr_eq(&self, other: &Query) -> bool {
        Arc::ptr_eq(&self.expr, &other.expr)
    }

    /// Map every item through `f`.
    ///
    /// `f` receives the argument expression standing for the current item
    /// and returns the expression computing the new item.
    pub fn select(&self, f: impl FnOnce(Expr) -> Expr) -> Query {
        let map = ExprLambda::new([self.item_ty.clone()], f(Expr::arg(0)));
        self.map(map)
    }

    /// Project every item into the object constructed by `f`, immediately.
    ///
    /// `f` must return an object construction. Every public property of the
    /// target that `f` leaves unbound receives the item's property of the
    /// same name and type. Unlike `project_into`, no activation pass is
    /// needed.
    pub fn auto_project(&self, f: impl FnOnce(Expr) -> Expr) -> Result<Query> {
        let map = ExprLambda::new([self.item_ty.clone()], f(Expr::arg(0)));
        let map = engine::auto_project(&self.schema, &map)?;
        Ok(self.map(map))
    }

    /// Replace every `project_into` marker in the graph with the object
    /// construction it stands for.
    ///
    /// When the graph holds no marker, the returned query shares this
    /// query's graph; see [`Query::ptr_eq`].
    pub fn activate_auto_projects(&self) -> Result<Query> {
        let expr = engine::activate(&self.schema, &self.expr)?;

        Ok(Query {
            schema: self.schema.clone(),
            expr,
            item_ty: self.item_ty.clone(),
        })
    }

    fn map(&self, map: ExprLambda) -> Query {
        let item_ty = ExprContext::new(&self.schema).infer_lambda_ty(&map);

        Query {
            schema: self.schema.clone(),
            expr: Arc::new(Expr::map(self.expr.clone(), Expr::from(map))),
            item_ty,
        }
    }
}
