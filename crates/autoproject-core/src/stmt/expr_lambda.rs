use super::*;

/// An anonymous function.
///
/// Parameters are typed so that expressions in the body can be typed without
/// evaluating anything. The body reads them with [`Expr::arg`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExprLambda {
    pub params: Vec<Type>,
    pub body: Arc<Expr>,
}

impl Expr {
    pub fn lambda(params: impl IntoIterator<Item = Type>, body: impl Into<Expr>) -> Self {
        ExprLambda::new(params, body).into()
    }

    pub fn as_lambda(&self) -> Option<&ExprLambda> {
        match self {
            Self::Lambda(expr) => Some(expr),
            _ => None,
        }
    }
}

impl ExprLambda {
    pub fn new(params: impl IntoIterator<Item = Type>, body: impl Into<Expr>) -> ExprLambda {
        ExprLambda {
            params: params.into_iter().collect(),
            body: Arc::new(body.into()),
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl From<ExprLambda> for Expr {
    fn from(value: ExprLambda) -> Self {
        Self::Lambda(value)
    }
}
