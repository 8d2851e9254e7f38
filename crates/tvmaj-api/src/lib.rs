//! API client library for the TVmaze personal-account endpoints.
//!
//! Provides an authenticated client for marked episodes, follows,
//! tags and votes under `https://api.tvmaze.com/v1/user/`.

/// TVmaze user API client.
pub mod tvmaze;
