use thiserror::Error;

/// Failures surfaced by the remote API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server refused the request because it clashes with existing
    /// state, e.g. a duplicate course id or an already-registered user.
    #[error("conflict: {message}")]
    Conflict { message: String },
    /// Any other non-success response from the server.
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// The server could not be reached, or its response was not the
    /// documented JSON shape.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Shown for any transport-level failure; the underlying detail goes to the
/// log, not the user.
pub(crate) const CONNECTIVITY_MESSAGE: &str =
    "Connection error. Check that the server is reachable.";

/// Fallback when the server rejects a request without saying why.
pub(crate) const REJECTED_FALLBACK: &str = "The request was rejected by the server.";

impl ApiError {
    /// Message suitable for direct display. Server-provided texts are shown
    /// verbatim; transport problems collapse to a generic connectivity hint.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Conflict { message } | ApiError::Rejected { message, .. } => message.clone(),
            ApiError::Transport(_) => CONNECTIVITY_MESSAGE.to_string(),
        }
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}
