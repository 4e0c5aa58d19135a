use super::*;

/// The pipeline `select` step.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprMap {
    /// Expression to map, evaluates to a list
    pub base: Arc<Expr>,

    /// A single-parameter lambda applied to each item of `base`
    pub map: Arc<Expr>,
}

impl Expr {
    pub fn map(base: impl Into<Arc<Expr>>, map: impl Into<Arc<Expr>>) -> Self {
        ExprMap {
            base: base.into(),
            map: map.into(),
        }
        .into()
    }

    pub fn as_map(&self) -> Option<&ExprMap> {
        match self {
            Self::Map(expr) => Some(expr),
            _ => None,
        }
    }
}

impl From<ExprMap> for Expr {
    fn from(value: ExprMap) -> Self {
        Self::Map(value)
    }
}
