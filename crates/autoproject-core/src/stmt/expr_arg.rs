use super::Expr;

/// A reference to a lambda parameter.
///
/// `nesting` counts how many enclosing lambdas to skip: `0` is the innermost
/// lambda around the expression, `1` its parent, and so on. `position`
/// selects the parameter within that lambda.
///
/// # Examples
///
/// ```text
/// arg(0)      // first parameter of the innermost lambda
/// arg(1, 0)   // first parameter of the lambda one level up
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ExprArg {
    pub nesting: usize,

    /// The zero-based position of the argument.
    pub position: usize,
}

impl Expr {
    pub fn arg(expr_arg: impl Into<ExprArg>) -> Self {
        Self::Arg(expr_arg.into())
    }
}

impl ExprArg {
    pub fn new(position: usize) -> ExprArg {
        ExprArg {
            nesting: 0,
            position,
        }
    }

    pub fn nested(nesting: usize, position: usize) -> ExprArg {
        ExprArg { nesting, position }
    }
}

impl From<usize> for ExprArg {
    fn from(value: usize) -> Self {
        ExprArg::new(value)
    }
}

impl From<ExprArg> for Expr {
    fn from(value: ExprArg) -> Self {
        Self::Arg(value)
    }
}
