use super::{Expr, ExprContext, ExprFunc, ExprLambda, Type};

impl ExprContext<'_> {
    /// Computes the static type of `expr` in this context.
    ///
    /// Unresolvable parts (an argument out of scope, an empty list, a member
    /// the schema does not declare) infer as [`Type::Unknown`].
    pub fn infer_expr_ty(&self, expr: &Expr) -> Type {
        match expr {
            Expr::Arg(expr_arg) => self
                .resolve_arg_ty(expr_arg)
                .cloned()
                .unwrap_or(Type::Unknown),
            Expr::Func(ExprFunc::Range { .. }) => Type::list(Type::I64),
            Expr::Func(ExprFunc::Count(_)) => Type::I64,
            Expr::Func(ExprFunc::Max(list) | ExprFunc::Min(list)) => self
                .infer_expr_ty(list)
                .list_item()
                .cloned()
                .unwrap_or(Type::Unknown),
            Expr::Lambda(expr_lambda) => self.infer_lambda_ty(expr_lambda),
            Expr::List(expr_list) => match expr_list.items.first() {
                Some(first) => Type::list(self.infer_expr_ty(first)),
                None => Type::list(Type::Unknown),
            },
            Expr::Map(expr_map) => Type::list(self.infer_expr_ty(&expr_map.map)),
            Expr::Member(expr_member) => match self.property(expr_member) {
                Some(property) => property.ty.clone(),
                None => Type::Unknown,
            },
            Expr::New(expr_new) => Type::Model(expr_new.model),
            Expr::ProjectInto(expr_project_into) => self.infer_expr_ty(&expr_project_into.target),
            Expr::Value(value) => value.infer_ty(),
        }
    }

    /// The type a lambda produces when applied.
    pub fn infer_lambda_ty(&self, expr_lambda: &ExprLambda) -> Type {
        self.scope(&expr_lambda.params)
            .infer_expr_ty(&expr_lambda.body)
    }
}
