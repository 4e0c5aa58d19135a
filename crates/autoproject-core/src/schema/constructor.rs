use super::PropertyId;
use crate::stmt::{Expr, Type};

/// A constructor overload.
///
/// The body runs before any binding of an object construction expression. It
/// reads its parameters with `Expr::arg(position)` and may assign any
/// property of the model, whatever the setter's visibility.
#[derive(Debug, Clone)]
pub struct Constructor {
    pub params: Vec<Param>,
    pub body: Vec<ConstructorAssignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone)]
pub struct ConstructorAssignment {
    pub property: PropertyId,
    pub expr: Expr,
}

impl Constructor {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn param_tys(&self) -> Vec<Type> {
        self.params.iter().map(|param| param.ty.clone()).collect()
    }
}
