//! Error taxonomy for calls against the backend.
//!
//! [`ApiError`] is what the endpoint functions return. It keeps the three kinds
//! of failure apart: the transport failed ([`ApiError::Network`]), the backend
//! answered with an error status ([`ApiError::Status`], [`ApiError::Unauthorized`]),
//! or it answered `success: false` ([`ApiError::Rejected`]).
//!
//! Views never see an `ApiError`. The session and task layers turn it into an
//! [`ActionError`] with [`ApiError::into_action`], which picks the message a
//! person should read.

/// Failure of a single backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    Status { status: u16, message: Option<String> },

    /// The backend answered 401. The stored session has already been cleared.
    #[error("Request failed with status code 401")]
    Unauthorized { message: Option<String> },

    #[error("{0}")]
    Rejected(String),

    #[error("Response did not contain any data")]
    MissingData,
}

impl ApiError {
    /// Message supplied by the backend, if any.
    pub fn backend_message(&self) -> Option<&str> {
        let message = match self {
            ApiError::Status {
                message: Some(message),
                ..
            }
            | ApiError::Unauthorized {
                message: Some(message),
            }
            | ApiError::Rejected(message) => message.as_str(),
            _ => return None,
        };
        Some(message).filter(|m| !m.trim().is_empty())
    }

    /// HTTP status of the response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Normalize into a user-facing error.
    ///
    /// Prefers the backend's message, then this error's own text, then `fallback`.
    pub fn into_action(self, fallback: &str) -> ActionError {
        if let Some(message) = self.backend_message() {
            return ActionError::new(message);
        }
        let text = self.to_string();
        if text.trim().is_empty() {
            ActionError::new(fallback)
        } else {
            ActionError::new(text)
        }
    }
}

/// A failed user action, carrying the message to show.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ActionError {
    pub message: String,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
