mod bindings;
mod matcher;
mod target;

use target::TargetInit;

use autoproject_core::{
    stmt::{fold, Expr, ExprContext, ExprLambda, ExprProjectInto, Fold},
    Result, Schema,
};

use std::sync::Arc;

/// Resolves `project_into` markers while rebuilding only the ancestors of
/// the nodes it replaces.
pub(super) struct Activate<'a> {
    /// Types lambda arguments so marker sources can be typed
    cx: ExprContext<'a>,

    /// Number of markers replaced so far
    resolved: usize,
}

impl<'a> Activate<'a> {
    pub(super) fn new(schema: &'a Schema) -> Activate<'a> {
        Activate {
            cx: ExprContext::new(schema),
            resolved: 0,
        }
    }

    pub(super) fn resolved(&self) -> usize {
        self.resolved
    }
}

impl Fold for Activate<'_> {
    fn fold_expr_lambda(&mut self, i: &ExprLambda) -> Result<Option<Expr>> {
        let mut scoped = Activate {
            cx: self.cx.scope(&i.params),
            resolved: 0,
        };

        let ret = fold::fold_expr_lambda(&mut scoped, i)?;
        let resolved = scoped.resolved;

        self.resolved += resolved;
        Ok(ret)
    }

    fn fold_expr_project_into(&mut self, i: &ExprProjectInto) -> Result<Option<Expr>> {
        // Markers feeding this one resolve first, so the source type is the
        // type of the constructed object.
        let source = fold::fold_arc(self, &i.source)?.unwrap_or_else(|| i.source.clone());
        let source_ty = self.cx.infer_expr_ty(&source);

        let target = TargetInit::from_marker_target(&i.target)?;
        let matches = matcher::match_properties(self.cx.schema(), &source_ty, &target);

        log::trace!(
            "resolved project_into; target={:?} explicit={} auto={}",
            target.model,
            target.bindings.len(),
            matches.len()
        );

        self.resolved += 1;
        Ok(Some(bindings::combine(&source, target, &matches)))
    }
}

pub(super) fn auto_project(schema: &Schema, lambda: &ExprLambda) -> Result<ExprLambda> {
    let target = TargetInit::from_item_lambda(lambda)?;
    let source = Arc::new(Expr::arg(0));
    let source_ty = &lambda.params[0];

    let matches = matcher::match_properties(schema, source_ty, &target);

    log::trace!(
        "auto_project; target={:?} explicit={} auto={}",
        target.model,
        target.bindings.len(),
        matches.len()
    );

    Ok(ExprLambda {
        params: lambda.params.clone(),
        body: Arc::new(bindings::combine(&source, target, &matches)),
    })
}
