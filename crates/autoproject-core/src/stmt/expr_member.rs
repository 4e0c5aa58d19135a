use super::*;
use crate::schema::PropertyId;

/// Property read, `base.property`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprMember {
    /// Evaluates to the object to read from
    pub base: Arc<Expr>,

    pub property: PropertyId,
}

impl Expr {
    pub fn member(base: impl Into<Arc<Expr>>, property: impl Into<PropertyId>) -> Self {
        ExprMember {
            base: base.into(),
            property: property.into(),
        }
        .into()
    }

    pub fn is_member(&self) -> bool {
        matches!(self, Self::Member(_))
    }
}

impl From<ExprMember> for Expr {
    fn from(value: ExprMember) -> Self {
        Self::Member(value)
    }
}
