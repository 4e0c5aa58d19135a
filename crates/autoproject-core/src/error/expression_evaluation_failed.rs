use super::Error;

/// Error when expression evaluation fails.
///
/// This occurs when:
/// - Required data is missing (unresolved arguments, null member access)
/// - Type mismatches during evaluation (binding a text value to an integer property)
/// - A property is read or written through an accessor that is not public
/// - Evaluation is attempted on non-evaluable constructs (a bare lambda)
#[derive(Debug)]
pub(super) struct ExpressionEvaluationFailed {
    message: Box<str>,
}

impl std::error::Error for ExpressionEvaluationFailed {}

impl core::fmt::Display for ExpressionEvaluationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "expression evaluation failed: {}", self.message)
    }
}

impl Error {
    /// Creates an expression evaluation failed error.
    pub fn expression_evaluation_failed(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ExpressionEvaluationFailed(
            ExpressionEvaluationFailed {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an expression evaluation failure.
    pub fn is_expression_evaluation_failed(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::ExpressionEvaluationFailed(_)))
    }
}
