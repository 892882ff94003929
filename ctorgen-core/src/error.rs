use thiserror::Error;

use crate::Visibility;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{visibility} method '{method}' called for an instance of {class}")]
    AccessDenied {
        class: String,
        method: String,
        visibility: Visibility,
    },

    #[error("undefined method '{method}' for an instance of {class}")]
    UndefinedMethod { class: String, method: String },

    /// The call convention does not fit the installed constructor.
    ///
    /// Count and key mismatches never produce this error; they are absorbed by
    /// the binding policy.
    #[error("{class}::new expects {expected}, got {given}")]
    ArgumentMismatch {
        class: String,
        expected: &'static str,
        given: &'static str,
    },
}

impl Error {
    /// Whether the error is a failed reader lookup, either because the reader
    /// does not exist or because the caller is not allowed to see it.
    pub fn is_no_method(&self) -> bool {
        matches!(self, Self::AccessDenied { .. } | Self::UndefinedMethod { .. })
    }
}
