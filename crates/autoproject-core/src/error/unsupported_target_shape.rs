use super::Error;

/// Error when the target of a `project_into` marker (or the body of an
/// `auto_project` lambda) is not an object construction.
///
/// The only accepted target is a lambda whose body is a constructor call,
/// optionally followed by property bindings.
#[derive(Debug)]
pub(super) struct UnsupportedTargetShape {
    found: Box<str>,
}

impl std::error::Error for UnsupportedTargetShape {}

impl core::fmt::Display for UnsupportedTargetShape {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "`project_into` has an invalid target: the argument must be a lambda consisting \
             solely of a constructor call for the object to project into, \
             e.g. `Expr::project_into(source, Expr::lambda([], ExprNew::new(TARGET).bind(BAR, 5)))`; \
             found {}",
            self.found
        )
    }
}

impl Error {
    /// Creates an unsupported target shape error. `found` describes the
    /// offending expression.
    pub fn unsupported_target_shape(found: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedTargetShape(
            UnsupportedTargetShape {
                found: found.into().into(),
            },
        ))
    }

    /// Returns `true` if this error, or its cause, is an unsupported target
    /// shape error.
    pub fn is_unsupported_target_shape(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::UnsupportedTargetShape(_)))
    }
}
