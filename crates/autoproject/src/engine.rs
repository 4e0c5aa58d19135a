mod resolve;
use resolve::Activate;

use autoproject_core::{
    stmt::{Expr, ExprLambda, Fold},
    Result, Schema,
};

use std::sync::Arc;

/// Replace every `project_into` marker in `expr` with the object
/// construction it stands for.
///
/// Returns `expr` itself, not a copy, when the graph holds no marker.
/// Activating an activated graph is therefore free and keeps identity.
pub fn activate(schema: &Schema, expr: &Arc<Expr>) -> Result<Arc<Expr>> {
    let mut activate = Activate::new(schema);

    match activate.fold_expr(expr)? {
        Some(activated) => {
            log::debug!(
                "activated graph; project_into markers resolved={}",
                activate.resolved()
            );
            Ok(Arc::new(activated))
        }
        None => {
            log::debug!("no project_into markers found; graph unchanged");
            Ok(expr.clone())
        }
    }
}

/// Rewrite a one-parameter lambda constructing the target object so it also
/// binds every matching property of its argument.
pub(crate) fn auto_project(schema: &Schema, lambda: &ExprLambda) -> Result<ExprLambda> {
    resolve::auto_project(schema, lambda)
}
