use thiserror::Error;

/// Errors raised while binding the controller to a host.
///
/// All of them are fatal at startup: a missing element is a configuration
/// mistake, not something to recover from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("Display element '{id}' not found")]
    MissingDisplay { id: String },

    #[error("Control element '{id}' not found")]
    MissingControl { id: String },

    #[error("Control element '{id}' already has a handler")]
    DuplicateControl { id: String },
}
