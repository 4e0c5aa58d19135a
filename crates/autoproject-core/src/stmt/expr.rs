use super::*;

/// A node of a query's computation graph.
///
/// Graphs are immutable. Rewrites produce new nodes and share every
/// unchanged subtree through `Arc`.
#[derive(Clone, PartialEq)]
pub enum Expr {
    /// A parameter of an enclosing lambda
    Arg(ExprArg),

    /// Built-in function call
    Func(ExprFunc),

    /// Anonymous function
    Lambda(ExprLambda),

    /// A list of expressions of the same type
    List(ExprList),

    /// Apply a lambda to each item in a list
    Map(ExprMap),

    /// Read a property of an object
    Member(ExprMember),

    /// Construct an object, then assign property bindings
    New(ExprNew),

    /// Deferred auto-projection. Replaced by an object construction when
    /// the graph is activated; evaluating it fails.
    ProjectInto(ExprProjectInto),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Is a value that evaluates to null
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Returns true if the expression is a constant value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    pub fn is_arg(&self) -> bool {
        matches!(self, Self::Arg(_))
    }

    pub fn is_lambda(&self) -> bool {
        matches!(self, Self::Lambda(_))
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Self::New(_))
    }

    /// Returns `true` if the expression is a constant expression.
    pub fn is_const(&self) -> bool {
        match self {
            Self::Value(_) => true,
            Self::List(expr_list) => expr_list.items.iter().all(|expr| expr.is_const()),
            _ => false,
        }
    }

    /// Returns `true` if a `project_into` marker appears anywhere in the
    /// expression.
    pub fn contains_project_into(&self) -> bool {
        struct Contains(bool);

        impl Visit for Contains {
            fn visit_expr(&mut self, i: &Expr) {
                if self.0 {
                    return;
                }

                match i.as_project_into() {
                    Some(_) => self.0 = true,
                    None => visit::visit_expr(self, i),
                }
            }
        }

        let mut contains = Contains(false);
        contains.visit_expr(self);
        contains.0
    }
}

impl Default for Expr {
    fn default() -> Self {
        Self::Value(Value::default())
    }
}

// === Conversions ===

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&Arc<Expr>> for Expr {
    fn from(value: &Arc<Expr>) -> Self {
        (**value).clone()
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arg(e) => e.fmt(f),
            Self::Func(e) => e.fmt(f),
            Self::Lambda(e) => e.fmt(f),
            Self::List(e) => e.fmt(f),
            Self::Map(e) => e.fmt(f),
            Self::Member(e) => e.fmt(f),
            Self::New(e) => e.fmt(f),
            Self::ProjectInto(e) => e.fmt(f),
            Self::Value(e) => e.fmt(f),
        }
    }
}
