//! Basic authentication credentials.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::error::{Result, TvmazeError};

/// Name reported in constructor usage errors.
const CONSTRUCTOR: &str = "TvmazeClient";

/// Encodes `username:access_key` as a Basic authentication token.
#[must_use]
pub fn encode_basic(username: &str, access_key: &str) -> String {
    STANDARD.encode(format!("{username}:{access_key}"))
}

/// TVmaze account credentials with the derived Basic token.
///
/// The token is computed once and reused for every request.
#[derive(Clone)]
pub struct Credentials {
    /// Account username.
    username: String,
    /// Personal API access key.
    access_key: String,
    /// `base64(username:access_key)`.
    authorization: String,
}

impl Credentials {
    /// Validates the pair and derives the Basic token.
    ///
    /// # Errors
    ///
    /// Returns [`TvmazeError::MissingArgument`] if either value is empty.
    pub fn new(username: impl Into<String>, access_key: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let access_key = access_key.into();

        if username.is_empty() {
            return Err(TvmazeError::MissingArgument {
                param: "username",
                method: CONSTRUCTOR,
            });
        }
        if access_key.is_empty() {
            return Err(TvmazeError::MissingArgument {
                param: "access_key",
                method: CONSTRUCTOR,
            });
        }

        let authorization = encode_basic(&username, &access_key);
        Ok(Self {
            username,
            access_key,
            authorization,
        })
    }

    /// Account username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Personal API access key.
    #[must_use]
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Base64 token (without the `Basic ` prefix).
    #[must_use]
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Value for the `Authorization` header.
    pub(crate) fn header_value(&self) -> String {
        format!("Basic {}", self.authorization)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("access_key", &"<redacted>")
            .field("authorization", &"<redacted>")
            .finish()
    }
}
