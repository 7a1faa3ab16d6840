//! Cascade error types.

use domain::{LookupStage, SelectionError};
use thiserror::Error;

/// Failure returned by a commerce service implementation.
///
/// The commerce backend is opaque to this crate; implementations reduce
/// transport and service failures to a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct BackendError(String);

impl BackendError {
    /// Creates a backend error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors that can occur while driving the selection cascade.
#[derive(Debug, Error)]
pub enum CascadeError {
    /// A backend lookup failed at the given stage.
    ///
    /// Form state is left at its last-known-good value and no retry is
    /// attempted; retrying is the caller's choice.
    #[error("Lookup failed at {stage}: {reason}")]
    LookupFailed { stage: LookupStage, reason: String },

    /// A user selection was rejected by the form.
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),
}

/// Convenience type alias for cascade results.
pub type Result<T> = std::result::Result<T, CascadeError>;
