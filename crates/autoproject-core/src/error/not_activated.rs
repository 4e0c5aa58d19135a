use super::Error;

/// Error when a `project_into` marker is evaluated before the query was
/// activated.
///
/// Markers only declare projection intent. They are replaced by object
/// construction during activation and have no meaning of their own.
#[derive(Debug)]
pub(super) struct NotActivated;

impl std::error::Error for NotActivated {}

impl core::fmt::Display for NotActivated {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(
            "`project_into` was not activated: call `Query::activate_auto_projects` \
             (or `autoproject::activate`) on the query before evaluating it",
        )
    }
}

impl Error {
    /// Creates a not-activated error.
    pub fn not_activated() -> Error {
        Error::from(super::ErrorKind::NotActivated(NotActivated))
    }

    /// Returns `true` if this error, or its cause, is a not-activated error.
    pub fn is_not_activated(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::NotActivated(_)))
    }
}
