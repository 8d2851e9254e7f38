//! TVmaze user API client module.
//!
//! Sends Basic-authenticated requests to the TVmaze `user/*` endpoints
//! and returns the decoded JSON payloads.

mod api;
mod auth;
mod client;
mod error;
mod params;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTvmazeApi, TvmazeApi};
pub use auth::{Credentials, encode_basic};
#[allow(clippy::module_name_repetitions)]
pub use client::{TvmazeClient, TvmazeClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::{Result, TvmazeError};
pub use params::{ApiRequest, FollowKind, MarkedEpisodesParams};
pub use types::{
    FollowedNetwork, FollowedPerson, FollowedShow, FollowedWebchannel, MarkType, MarkedEpisode,
    ShowVote, Tag, TaggedShow,
};
