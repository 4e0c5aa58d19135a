use super::*;

/// Declares the intent to project `source` into a newly constructed object.
///
/// `target` is a parameterless lambda whose body constructs the target
/// object, optionally binding some of its properties. Activation replaces
/// the marker with that construction, adding a binding
/// `target.P = source.P` for every other public property `P` the two types
/// share by name and type.
///
/// The marker has the target's type, but evaluating it fails: the graph
/// must be activated first.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprProjectInto {
    pub source: Arc<Expr>,
    pub target: Arc<Expr>,
}

impl Expr {
    pub fn project_into(source: impl Into<Arc<Expr>>, target: impl Into<Arc<Expr>>) -> Self {
        ExprProjectInto {
            source: source.into(),
            target: target.into(),
        }
        .into()
    }

    pub fn is_project_into(&self) -> bool {
        matches!(self, Self::ProjectInto(_))
    }

    pub fn as_project_into(&self) -> Option<&ExprProjectInto> {
        match self {
            Self::ProjectInto(expr) => Some(expr),
            _ => None,
        }
    }
}

impl From<ExprProjectInto> for Expr {
    fn from(value: ExprProjectInto) -> Self {
        Self::ProjectInto(value)
    }
}
