use super::*;

/// A built-in function call.
///
/// # Examples
///
/// ```text
/// range(11, 5)    // [11, 12, 13, 14, 15]
/// max(list)       // largest item
/// count(list)     // number of items
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ExprFunc {
    /// `count` consecutive integers starting at `start`
    Range { start: i64, count: i64 },

    /// Number of items in a list
    Count(Arc<Expr>),

    /// Largest item of a non-empty list
    Max(Arc<Expr>),

    /// Smallest item of a non-empty list
    Min(Arc<Expr>),
}

impl Expr {
    pub fn range(start: i64, count: i64) -> Self {
        ExprFunc::Range { start, count }.into()
    }

    pub fn count(list: impl Into<Arc<Expr>>) -> Self {
        ExprFunc::Count(list.into()).into()
    }

    pub fn max(list: impl Into<Arc<Expr>>) -> Self {
        ExprFunc::Max(list.into()).into()
    }

    pub fn min(list: impl Into<Arc<Expr>>) -> Self {
        ExprFunc::Min(list.into()).into()
    }
}

impl ExprFunc {
    /// The list operand, if the function takes one.
    pub fn operand(&self) -> Option<&Arc<Expr>> {
        match self {
            Self::Range { .. } => None,
            Self::Count(list) | Self::Max(list) | Self::Min(list) => Some(list),
        }
    }

    /// Rebuild the function with a different list operand.
    pub(crate) fn with_operand(&self, operand: Arc<Expr>) -> ExprFunc {
        match self {
            Self::Range { .. } => self.clone(),
            Self::Count(_) => Self::Count(operand),
            Self::Max(_) => Self::Max(operand),
            Self::Min(_) => Self::Min(operand),
        }
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
