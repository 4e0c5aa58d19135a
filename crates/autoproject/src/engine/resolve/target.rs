use autoproject_core::{
    schema::{ModelId, PropertyId},
    stmt::{fold, Binding, Expr, ExprArg, ExprLambda, ExprNew, Fold},
    Error, Result,
};

/// The construction a marker's target lambda describes.
#[derive(Debug)]
pub(super) struct TargetInit {
    pub(super) model: ModelId,

    /// Constructor arguments, kept verbatim
    pub(super) args: Vec<Expr>,

    /// Bindings written by the caller
    pub(super) bindings: Vec<Binding>,
}

impl TargetInit {
    /// Extract the construction from a `project_into` target.
    ///
    /// The target must be a parameterless lambda whose body is an object
    /// construction. The body is lifted out of the lambda, so arguments
    /// reaching past it are re-pointed one scope closer.
    pub(super) fn from_marker_target(target: &Expr) -> Result<TargetInit> {
        let Expr::Lambda(lambda) = target else {
            return Err(Error::unsupported_target_shape(format!(
                "a non-lambda target {target:?}"
            )));
        };

        if lambda.arity() != 0 {
            return Err(Error::unsupported_target_shape(format!(
                "a target lambda taking {} parameters",
                lambda.arity()
            )));
        }

        if !lambda.body.is_new() {
            return Err(Error::unsupported_target_shape(format!(
                "a target lambda returning {:?}",
                lambda.body
            )));
        }

        // There is no defined order for resolving a marker inside the target
        // of another.
        if lambda.body.contains_project_into() {
            return Err(Error::unsupported_target_shape(
                "a project_into marker inside the target construction",
            ));
        }

        let body = match Unnest::default().fold_expr(&lambda.body)? {
            Some(body) => body,
            None => (*lambda.body).clone(),
        };

        match body {
            Expr::New(expr_new) => Ok(TargetInit::from(expr_new)),
            _ => unreachable!("unnesting preserves the root node kind"),
        }
    }

    /// Extract the construction from the one-parameter lambda given to
    /// `auto_project`. The lambda stays in place, so its body is kept as is.
    pub(super) fn from_item_lambda(lambda: &ExprLambda) -> Result<TargetInit> {
        if lambda.arity() != 1 {
            return Err(Error::unsupported_target_shape(format!(
                "an item lambda taking {} parameters",
                lambda.arity()
            )));
        }

        match &*lambda.body {
            Expr::New(expr_new) => Ok(TargetInit::from(expr_new.clone())),
            body => Err(Error::unsupported_target_shape(format!(
                "an item lambda returning {body:?}"
            ))),
        }
    }

    pub(super) fn is_bound(&self, property: PropertyId) -> bool {
        self.bindings
            .iter()
            .any(|binding| binding.property == property)
    }
}

impl From<ExprNew> for TargetInit {
    fn from(expr_new: ExprNew) -> Self {
        TargetInit {
            model: expr_new.model,
            args: expr_new.args,
            bindings: expr_new.bindings,
        }
    }
}

/// Removes one lambda scope from every argument that reaches past it.
#[derive(Default)]
struct Unnest {
    /// Lambdas entered inside the lifted body
    depth: usize,
}

impl Fold for Unnest {
    fn fold_expr_arg(&mut self, i: &ExprArg) -> Result<Option<Expr>> {
        if i.nesting < self.depth {
            return Ok(None);
        }

        if i.nesting == self.depth {
            return Err(Error::unsupported_target_shape(format!(
                "a target construction reading {i:?}, a parameter of the target lambda"
            )));
        }

        Ok(Some(Expr::arg(ExprArg::nested(i.nesting - 1, i.position))))
    }

    fn fold_expr_lambda(&mut self, i: &ExprLambda) -> Result<Option<Expr>> {
        self.depth += 1;
        let ret = fold::fold_expr_lambda(self, i);
        self.depth -= 1;
        ret
    }
}
