//! `TvmazeError` - error type shared by the client and all endpoints.

use thiserror::Error;

/// Errors returned by the TVmaze client.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum TvmazeError {
    /// A required argument was absent or empty.
    #[error("No {param} provided to {method}.")]
    MissingArgument {
        /// Name of the missing parameter.
        param: &'static str,
        /// Name of the method or constructor that required it.
        method: &'static str,
    },

    /// An argument was present but outside its accepted range.
    #[error("Invalid {param} provided to {method}: {reason}")]
    InvalidArgument {
        /// Name of the rejected parameter.
        param: &'static str,
        /// Name of the method that rejected it.
        method: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The remote service reported a non-200 status.
    #[error("{status}: {message}")]
    Api {
        /// Status code reported by the service.
        status: u16,
        /// Remote-supplied message (or error name).
        message: String,
    },

    /// The HTTP transport failed.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The endpoint URL could not be composed.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// A request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A response body could not be decoded.
    #[error("failed to decode JSON response from {path}: {source}")]
    Decode {
        /// Request path the response belongs to.
        path: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

impl TvmazeError {
    /// Returns `true` for errors raised before any network call.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument { .. } | Self::InvalidArgument { .. }
        )
    }

    /// Returns the remote status code for [`TvmazeError::Api`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias for TVmaze operations.
pub type Result<T> = std::result::Result<T, TvmazeError>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_missing_argument_message() {
        // Arrange
        let err = TvmazeError::MissingArgument {
            param: "episode_id",
            method: "mark_episode",
        };

        // Act
        let message = err.to_string();

        // Assert
        assert_eq!(message, "No episode_id provided to mark_episode.");
        assert!(err.is_usage_error());
    }

    #[test]
    fn test_api_error_message() {
        // Arrange
        let err = TvmazeError::Api {
            status: 404,
            message: String::from("Page not found."),
        };

        // Act & Assert
        assert_eq!(err.to_string(), "404: Page not found.");
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_usage_error());
    }

    #[test]
    fn test_invalid_argument_is_usage_error() {
        // Arrange
        let err = TvmazeError::InvalidArgument {
            param: "vote",
            method: "vote_show",
            reason: String::from("must be between 1 and 10"),
        };

        // Act & Assert
        assert!(err.is_usage_error());
        assert_eq!(err.status(), None);
        assert_eq!(
            err.to_string(),
            "Invalid vote provided to vote_show: must be between 1 and 10"
        );
    }

    #[test]
    fn test_decode_error_names_path() {
        // Arrange
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = TvmazeError::Decode {
            path: String::from("user/tags/"),
            source,
        };

        // Act
        let message = err.to_string();

        // Assert
        assert!(message.starts_with("failed to decode JSON response from user/tags/"));
    }
}
