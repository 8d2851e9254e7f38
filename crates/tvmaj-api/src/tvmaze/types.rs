//! TVmaze user API response records and request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload of delete-style calls: an empty object.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct EmptyPayload {}

// --- Marked episodes ---

/// How an episode is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MarkType {
    /// Watched (`0`).
    Watched,
    /// Acquired (`1`).
    Acquired,
    /// Skipped (`2`).
    Skipped,
}

impl From<MarkType> for u8 {
    fn from(mark: MarkType) -> Self {
        match mark {
            MarkType::Watched => 0,
            MarkType::Acquired => 1,
            MarkType::Skipped => 2,
        }
    }
}

impl TryFrom<u8> for MarkType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Watched),
            1 => Ok(Self::Acquired),
            2 => Ok(Self::Skipped),
            other => Err(format!("unknown mark type: {other}")),
        }
    }
}

/// Response item from `user/episodes`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarkedEpisode {
    /// TVmaze episode ID.
    pub episode_id: u64,
    /// When the episode was marked (unix seconds on the wire).
    #[serde(with = "chrono::serde::ts_seconds")]
    pub marked_at: DateTime<Utc>,
    /// Mark type.
    #[serde(rename = "type")]
    pub mark_type: MarkType,
    /// Embedded resources (`embed=episode`).
    #[serde(rename = "_embedded")]
    pub embedded: Option<Value>,
}

/// Body for `PUT user/episodes/{id}`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MarkEpisodeBody {
    pub episode_id: u64,
    #[serde(rename = "type")]
    pub mark_type: MarkType,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub marked_at: Option<DateTime<Utc>>,
}

// --- Follows ---

/// Response item from `user/follows/shows`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FollowedShow {
    /// TVmaze show ID.
    pub show_id: u64,
    /// Embedded resources.
    #[serde(rename = "_embedded")]
    pub embedded: Option<Value>,
}

/// Response item from `user/follows/people`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FollowedPerson {
    /// TVmaze person ID.
    pub person_id: u64,
    /// Embedded resources.
    #[serde(rename = "_embedded")]
    pub embedded: Option<Value>,
}

/// Response item from `user/follows/networks`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FollowedNetwork {
    /// TVmaze network ID.
    pub network_id: u64,
    /// Embedded resources.
    #[serde(rename = "_embedded")]
    pub embedded: Option<Value>,
}

/// Response item from `user/follows/webchannels`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FollowedWebchannel {
    /// TVmaze web channel ID.
    pub webchannel_id: u64,
    /// Embedded resources.
    #[serde(rename = "_embedded")]
    pub embedded: Option<Value>,
}

// --- Tags ---

/// A user-defined tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    /// Tag ID.
    pub id: u64,
    /// Tag name.
    pub name: String,
}

/// Body for `POST user/tags/` and `PATCH user/tags/{id}`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TagBody<'a> {
    pub name: &'a str,
}

/// Response item from `user/tags/{id}/shows`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaggedShow {
    /// TVmaze show ID.
    pub show_id: u64,
    /// Embedded resources.
    #[serde(rename = "_embedded")]
    pub embedded: Option<Value>,
}

// --- Votes ---

/// Response item from `user/votes/shows`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShowVote {
    /// TVmaze show ID.
    pub show_id: u64,
    /// When the vote was cast (unix seconds on the wire).
    #[serde(with = "chrono::serde::ts_seconds")]
    pub voted_at: DateTime<Utc>,
    /// Vote (1-10).
    pub vote: u8,
    /// Embedded resources.
    #[serde(rename = "_embedded")]
    pub embedded: Option<Value>,
}

/// Body for `PUT user/votes/shows/{id}`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct VoteBody {
    pub vote: u8,
}
