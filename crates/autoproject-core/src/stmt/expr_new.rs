use super::*;
use crate::schema::{ModelId, PropertyId};

/// Object construction: a constructor call followed by property bindings.
///
/// With no bindings this is a bare constructor call. Bindings are applied in
/// order, after the constructor body has run.
///
/// # Examples
///
/// ```text
/// new Target(5)                 // ExprNew::new(TARGET).arg(5)
/// new Target { Bar = 10 }       // ExprNew::new(TARGET).bind(BAR, 10)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNew {
    /// The model to construct
    pub model: ModelId,

    /// Constructor arguments. The overload is selected by arity.
    pub args: Vec<Expr>,

    /// Property assignments. Each property appears at most once.
    pub bindings: Vec<Binding>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub property: PropertyId,
    pub expr: Expr,
}

impl Expr {
    pub fn new_object(model: impl Into<ModelId>) -> Self {
        ExprNew::new(model).into()
    }

    pub fn as_new(&self) -> Option<&ExprNew> {
        match self {
            Self::New(expr) => Some(expr),
            _ => None,
        }
    }
}

impl ExprNew {
    pub fn new(model: impl Into<ModelId>) -> ExprNew {
        ExprNew {
            model: model.into(),
            args: vec![],
            bindings: vec![],
        }
    }

    /// Append a constructor argument.
    pub fn arg(mut self, expr: impl Into<Expr>) -> Self {
        self.args.push(expr.into());
        self
    }

    /// Bind `property`, replacing any existing binding for it.
    pub fn bind(mut self, property: impl Into<PropertyId>, expr: impl Into<Expr>) -> Self {
        let property = property.into();
        assert_eq!(
            self.model, property.model,
            "binding a property of a different model"
        );

        let expr = expr.into();

        match self
            .bindings
            .iter_mut()
            .find(|binding| binding.property == property)
        {
            Some(binding) => binding.expr = expr,
            None => self.bindings.push(Binding { property, expr }),
        }

        self
    }

    pub fn binding(&self, property: impl Into<PropertyId>) -> Option<&Binding> {
        let property = property.into();
        self.bindings
            .iter()
            .find(|binding| binding.property == property)
    }

    pub fn is_bound(&self, property: impl Into<PropertyId>) -> bool {
        self.binding(property).is_some()
    }
}

impl From<ExprNew> for Expr {
    fn from(value: ExprNew) -> Self {
        Self::New(value)
    }
}
