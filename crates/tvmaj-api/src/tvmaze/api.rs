//! `TvmazeApi` trait definition.
#![allow(clippy::future_not_send)]

use chrono::{DateTime, Utc};

use super::error::Result;
use super::params::MarkedEpisodesParams;
use super::types::{
    FollowedNetwork, FollowedPerson, FollowedShow, FollowedWebchannel, MarkType, MarkedEpisode,
    ShowVote, Tag, TaggedShow,
};

/// TVmaze user API trait.
///
/// One method per `user/*` endpoint. Abstracts API operations for mock
/// substitution in tests. Uses `trait_variant::make` to generate a
/// `Send`-bound async trait.
///
/// Methods taking an identifier fail with
/// [`TvmazeError::MissingArgument`](super::TvmazeError::MissingArgument)
/// when it is `0`, without sending a request.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TvmazeApi: Send)]
pub trait LocalTvmazeApi {
    // --- Marked episodes ---

    /// Lists marked episodes (`GET user/episodes`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the service reports an error.
    async fn marked_episodes(&self, params: &MarkedEpisodesParams) -> Result<Vec<MarkedEpisode>>;

    /// Fetches a single marked episode (`GET user/episodes/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `episode_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn marked_episode(&self, episode_id: u64) -> Result<MarkedEpisode>;

    /// Marks an episode (`PUT user/episodes/{id}`).
    ///
    /// `marked_at` defaults to the time of the request on the server side.
    ///
    /// # Errors
    ///
    /// Returns an error if `episode_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn mark_episode(
        &self,
        episode_id: u64,
        mark_type: MarkType,
        marked_at: Option<DateTime<Utc>>,
    ) -> Result<MarkedEpisode>;

    /// Removes an episode mark (`DELETE user/episodes/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `episode_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn unmark_episode(&self, episode_id: u64) -> Result<()>;

    // --- Followed shows ---

    /// Lists followed shows (`GET user/follows/shows`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the service reports an error.
    async fn followed_shows(&self) -> Result<Vec<FollowedShow>>;

    /// Fetches a followed show (`GET user/follows/shows/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `show_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn followed_show(&self, show_id: u64) -> Result<FollowedShow>;

    /// Follows a show (`PUT user/follows/shows/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `show_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn follow_show(&self, show_id: u64) -> Result<FollowedShow>;

    /// Unfollows a show (`DELETE user/follows/shows/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `show_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn unfollow_show(&self, show_id: u64) -> Result<()>;

    // --- Followed people ---

    /// Lists followed people (`GET user/follows/people`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the service reports an error.
    async fn followed_people(&self) -> Result<Vec<FollowedPerson>>;

    /// Fetches a followed person (`GET user/follows/people/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `person_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn followed_person(&self, person_id: u64) -> Result<FollowedPerson>;

    /// Follows a person (`PUT user/follows/people/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `person_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn follow_person(&self, person_id: u64) -> Result<FollowedPerson>;

    /// Unfollows a person (`DELETE user/follows/people/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `person_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn unfollow_person(&self, person_id: u64) -> Result<()>;

    // --- Followed networks ---

    /// Lists followed networks (`GET user/follows/networks`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the service reports an error.
    async fn followed_networks(&self) -> Result<Vec<FollowedNetwork>>;

    /// Fetches a followed network (`GET user/follows/networks/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `network_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn followed_network(&self, network_id: u64) -> Result<FollowedNetwork>;

    /// Follows a network (`PUT user/follows/networks/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `network_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn follow_network(&self, network_id: u64) -> Result<FollowedNetwork>;

    /// Unfollows a network (`DELETE user/follows/networks/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `network_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn unfollow_network(&self, network_id: u64) -> Result<()>;

    // --- Followed web channels ---

    /// Lists followed web channels (`GET user/follows/webchannels`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the service reports an error.
    async fn followed_webchannels(&self) -> Result<Vec<FollowedWebchannel>>;

    /// Fetches a followed web channel (`GET user/follows/webchannels/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `webchannel_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn followed_webchannel(&self, webchannel_id: u64) -> Result<FollowedWebchannel>;

    /// Follows a web channel (`PUT user/follows/webchannels/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `webchannel_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn follow_webchannel(&self, webchannel_id: u64) -> Result<FollowedWebchannel>;

    /// Unfollows a web channel (`DELETE user/follows/webchannels/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `webchannel_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn unfollow_webchannel(&self, webchannel_id: u64) -> Result<()>;

    // --- Tags ---

    /// Lists tags (`GET user/tags/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the service reports an error.
    async fn tags(&self) -> Result<Vec<Tag>>;

    /// Creates a tag (`POST user/tags/`).
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty, the HTTP request fails,
    /// or the service reports an error.
    async fn create_tag(&self, name: &str) -> Result<Tag>;

    /// Renames a tag (`PATCH user/tags/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `tag_id` or `name` is missing, the HTTP request
    /// fails, or the service reports an error.
    async fn update_tag(&self, tag_id: u64, name: &str) -> Result<Tag>;

    /// Deletes a tag (`DELETE user/tags/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `tag_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn delete_tag(&self, tag_id: u64) -> Result<()>;

    /// Lists shows under a tag (`GET user/tags/{id}/shows`).
    ///
    /// # Errors
    ///
    /// Returns an error if `tag_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn tagged_shows(&self, tag_id: u64) -> Result<Vec<TaggedShow>>;

    /// Tags a show (`PUT user/tags/{id}/shows/{show_id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `tag_id` or `show_id` is missing, the HTTP
    /// request fails, or the service reports an error.
    async fn tag_show(&self, tag_id: u64, show_id: u64) -> Result<TaggedShow>;

    /// Untags a show (`DELETE user/tags/{id}/shows/{show_id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `tag_id` or `show_id` is missing, the HTTP
    /// request fails, or the service reports an error.
    async fn untag_show(&self, tag_id: u64, show_id: u64) -> Result<()>;

    // --- Show votes ---

    /// Lists show votes (`GET user/votes/shows`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the service reports an error.
    async fn show_votes(&self) -> Result<Vec<ShowVote>>;

    /// Fetches the vote for a show (`GET user/votes/shows/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `show_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn show_vote(&self, show_id: u64) -> Result<ShowVote>;

    /// Votes for a show (`PUT user/votes/shows/{id}`), `vote` in `1..=10`.
    ///
    /// # Errors
    ///
    /// Returns an error if `show_id` is missing, `vote` is out of range,
    /// the HTTP request fails, or the service reports an error.
    async fn vote_show(&self, show_id: u64, vote: u8) -> Result<ShowVote>;

    /// Removes the vote for a show (`DELETE user/votes/shows/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error if `show_id` is missing, the HTTP request fails,
    /// or the service reports an error.
    async fn remove_show_vote(&self, show_id: u64) -> Result<()>;
}
