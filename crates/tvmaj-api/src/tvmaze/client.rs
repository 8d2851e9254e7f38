//! `TvmazeClient` - TVmaze user API client implementation.

use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::instrument;
use url::Url;

use super::api::LocalTvmazeApi;
use super::auth::Credentials;
use super::error::{Result, TvmazeError};
use super::params::{ApiRequest, DEFAULT_API_VERSION, FollowKind, MarkedEpisodesParams};
use super::types::{
    EmptyPayload, FollowedNetwork, FollowedPerson, FollowedShow, FollowedWebchannel,
    MarkEpisodeBody, MarkType, MarkedEpisode, ShowVote, Tag, TagBody, TaggedShow, VoteBody,
};

/// Default base URL for the TVmaze API.
const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com/";

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// JSON media type.
const APPLICATION_JSON: &str = "application/json";

/// Lowest accepted show vote.
const MIN_VOTE: u8 = 1;

/// Highest accepted show vote.
const MAX_VOTE: u8 = 10;

/// TVmaze user API client.
///
/// Holds only immutable state, so a single instance can be shared
/// between concurrent callers.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TvmazeClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests (always ends with `/`).
    base_url: Url,
    /// Default API version segment.
    api_version: String,
    /// Account credentials and derived Basic token.
    credentials: Credentials,
}

/// Builder for `TvmazeClient`.
#[derive(Debug, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct TvmazeClientBuilder {
    username: Option<String>,
    access_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    api_version: Option<String>,
}

impl TvmazeClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            username: None,
            access_key: None,
            base_url: None,
            user_agent: None,
            api_version: None,
        }
    }

    /// Sets the account username (required).
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the personal API access key (required).
    #[must_use]
    pub fn access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (default: `tvmaj-api/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the default API version segment (default: `v1`).
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `username` or `access_key` is not set or empty.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TvmazeClient> {
        let credentials = Credentials::new(
            self.username.unwrap_or_default(),
            self.access_key.unwrap_or_default(),
        )?;

        let base_url = match self.base_url {
            Some(url) => with_trailing_slash(url),
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let api_version = self
            .api_version
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_API_VERSION));

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()?;

        tracing::debug!(
            base_url = %base_url,
            api_version = %api_version,
            username = %credentials.username(),
            "TVmaze client configured"
        );

        Ok(TvmazeClient {
            http_client,
            base_url,
            api_version,
            credentials,
        })
    }
}

/// Normalises the base URL so its path ends with `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

impl TvmazeClient {
    /// Creates a client against the public TVmaze API.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is empty or the HTTP client fails to build.
    pub fn new(username: impl Into<String>, access_key: impl Into<String>) -> Result<Self> {
        Self::builder()
            .username(username)
            .access_key(access_key)
            .build()
    }

    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TvmazeClientBuilder {
        TvmazeClientBuilder::new()
    }

    /// Base64 Basic-auth token derived from the credentials.
    #[must_use]
    pub fn authorization(&self) -> &str {
        self.credentials.authorization()
    }

    /// Account username.
    #[must_use]
    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Default API version segment.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Composes `{base_url}{version}/{path}`.
    ///
    /// Segments are appended below the base path, so the result never
    /// leaves `{base_url}{version}/`.
    fn endpoint_url(&self, version: &str, path: &str) -> Result<Url> {
        let invalid_path = |reason: &str| TvmazeError::InvalidArgument {
            param: "path",
            method: "request",
            reason: format!("{reason}: {path:?}"),
        };
        if path.starts_with('/') {
            return Err(invalid_path("must be relative"));
        }
        if path.split('/').any(|segment| matches!(segment, "." | "..")) {
            return Err(invalid_path("must not contain dot segments"));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TvmazeError::InvalidArgument {
                param: "base_url",
                method: "request",
                reason: format!("cannot be a base: {}", self.base_url),
            })?
            .pop_if_empty()
            .push(version)
            .extend(path.split('/'));
        Ok(url)
    }

    /// Sends a request and returns the parsed JSON payload unmodified.
    ///
    /// An empty body yields an empty object. A payload whose `status`
    /// field is present and not 200 becomes [`TvmazeError::Api`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be composed, the HTTP request
    /// fails, the body is not JSON, or the service reports an error.
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    pub async fn request(&self, request: ApiRequest) -> Result<Value> {
        let version = request
            .version
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(self.api_version.as_str());
        let url = self.endpoint_url(version, &request.path)?;

        tracing::debug!(method = %request.method, url = %url, "TVmaze API request");

        let mut builder = self
            .http_client
            .request(request.method.clone(), url)
            .header(AUTHORIZATION, self.credentials.header_value())
            .header(ACCEPT, APPLICATION_JSON);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(ref body) = request.body {
            // `json` also sets `Content-Type: application/json`.
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(%status, body_len = text.len(), "TVmaze API response");

        let payload = Self::parse_payload(&request.path, status, &text)?;
        if let Err(e) = Self::check_status(status, &payload) {
            tracing::warn!(path = %request.path, error = %e, "TVmaze API error");
            return Err(e);
        }
        Ok(payload)
    }

    /// Parses a response body. Empty bodies become `{}`.
    pub(crate) fn parse_payload(path: &str, status: StatusCode, text: &str) -> Result<Value> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        match serde_json::from_str(trimmed) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(TvmazeError::Api {
                status: status.as_u16(),
                message: canonical_reason(status.as_u16()),
            }),
            Err(source) => Err(TvmazeError::Decode {
                path: String::from(path),
                source,
            }),
        }
    }

    /// Checks the payload `status` field, falling back to the HTTP status
    /// when the payload carries none.
    pub(crate) fn check_status(http_status: StatusCode, payload: &Value) -> Result<()> {
        let reported = payload.get("status").and_then(status_code);

        match reported {
            Some(200) => Ok(()),
            Some(code) => Err(TvmazeError::Api {
                status: code,
                message: remote_message(payload, code),
            }),
            None if !http_status.is_success() => Err(TvmazeError::Api {
                status: http_status.as_u16(),
                message: remote_message(payload, http_status.as_u16()),
            }),
            None => Ok(()),
        }
    }

    /// Sends a request and decodes the payload into `T`.
    async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let path = request.path.clone();
        let payload = self.request(request).await?;
        serde_json::from_value(payload).map_err(|source| TvmazeError::Decode { path, source })
    }

    /// Sends a delete-style request whose payload must be empty.
    async fn send_empty(&self, request: ApiRequest) -> Result<()> {
        self.send::<EmptyPayload>(request).await.map(|_| ())
    }

    /// Lists follows of the given kind.
    async fn list_follows<T: DeserializeOwned>(&self, kind: FollowKind) -> Result<Vec<T>> {
        self.send(ApiRequest::new(kind.path(None))).await
    }

    /// Sends `method` to `user/follows/{kind}/{id}` and decodes the payload.
    async fn follow_request<T: DeserializeOwned>(
        &self,
        method: Method,
        kind: FollowKind,
        id: u64,
        caller: &'static str,
    ) -> Result<T> {
        let id = require_id(id, kind.id_param(), caller)?;
        self.send(ApiRequest::with_method(method, kind.path(Some(id))))
            .await
    }

    /// Sends `DELETE user/follows/{kind}/{id}`.
    async fn unfollow(&self, kind: FollowKind, id: u64, caller: &'static str) -> Result<()> {
        let id = require_id(id, kind.id_param(), caller)?;
        self.send_empty(ApiRequest::with_method(Method::DELETE, kind.path(Some(id))))
            .await
    }
}

/// Reads a `status` field given as a number or a numeric string.
///
/// Zero is treated as absent.
fn status_code(value: &Value) -> Option<u16> {
    let code = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    code.filter(|c| *c != 0)
}

/// Picks the remote `message`, then `name`, then the canonical reason.
fn remote_message(payload: &Value, code: u16) -> String {
    ["message", "name"]
        .iter()
        .find_map(|key| {
            payload
                .get(*key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        })
        .map_or_else(|| canonical_reason(code), String::from)
}

/// Canonical HTTP reason phrase for `code`.
fn canonical_reason(code: u16) -> String {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map_or_else(|| String::from("Unknown error"), String::from)
}

/// Rejects a zero identifier.
const fn require_id(id: u64, param: &'static str, method: &'static str) -> Result<u64> {
    if id == 0 {
        Err(TvmazeError::MissingArgument { param, method })
    } else {
        Ok(id)
    }
}

/// Rejects an empty (or whitespace-only) name.
fn require_name<'a>(name: &'a str, method: &'static str) -> Result<&'a str> {
    if name.trim().is_empty() {
        Err(TvmazeError::MissingArgument {
            param: "name",
            method,
        })
    } else {
        Ok(name)
    }
}

/// Serializes a request body.
fn encode_body<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(TvmazeError::Encode)
}

impl LocalTvmazeApi for TvmazeClient {
    // --- Marked episodes ---

    #[instrument(skip_all)]
    async fn marked_episodes(&self, params: &MarkedEpisodesParams) -> Result<Vec<MarkedEpisode>> {
        let request = params
            .to_query()
            .into_iter()
            .fold(ApiRequest::new("user/episodes"), |req, (key, value)| {
                req.query(key, value)
            });
        self.send(request).await
    }

    #[instrument(skip_all)]
    async fn marked_episode(&self, episode_id: u64) -> Result<MarkedEpisode> {
        let episode_id = require_id(episode_id, "episode_id", "marked_episode")?;
        self.send(ApiRequest::new(format!("user/episodes/{episode_id}")))
            .await
    }

    #[instrument(skip_all)]
    async fn mark_episode(
        &self,
        episode_id: u64,
        mark_type: MarkType,
        marked_at: Option<DateTime<Utc>>,
    ) -> Result<MarkedEpisode> {
        let episode_id = require_id(episode_id, "episode_id", "mark_episode")?;
        let body = encode_body(&MarkEpisodeBody {
            episode_id,
            mark_type,
            marked_at,
        })?;
        self.send(
            ApiRequest::with_method(Method::PUT, format!("user/episodes/{episode_id}")).body(body),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn unmark_episode(&self, episode_id: u64) -> Result<()> {
        let episode_id = require_id(episode_id, "episode_id", "unmark_episode")?;
        self.send_empty(ApiRequest::with_method(
            Method::DELETE,
            format!("user/episodes/{episode_id}"),
        ))
        .await
    }

    // --- Followed shows ---

    #[instrument(skip_all)]
    async fn followed_shows(&self) -> Result<Vec<FollowedShow>> {
        self.list_follows(FollowKind::Shows).await
    }

    #[instrument(skip_all)]
    async fn followed_show(&self, show_id: u64) -> Result<FollowedShow> {
        self.follow_request(Method::GET, FollowKind::Shows, show_id, "followed_show")
            .await
    }

    #[instrument(skip_all)]
    async fn follow_show(&self, show_id: u64) -> Result<FollowedShow> {
        self.follow_request(Method::PUT, FollowKind::Shows, show_id, "follow_show")
            .await
    }

    #[instrument(skip_all)]
    async fn unfollow_show(&self, show_id: u64) -> Result<()> {
        self.unfollow(FollowKind::Shows, show_id, "unfollow_show")
            .await
    }

    // --- Followed people ---

    #[instrument(skip_all)]
    async fn followed_people(&self) -> Result<Vec<FollowedPerson>> {
        self.list_follows(FollowKind::People).await
    }

    #[instrument(skip_all)]
    async fn followed_person(&self, person_id: u64) -> Result<FollowedPerson> {
        self.follow_request(Method::GET, FollowKind::People, person_id, "followed_person")
            .await
    }

    #[instrument(skip_all)]
    async fn follow_person(&self, person_id: u64) -> Result<FollowedPerson> {
        self.follow_request(Method::PUT, FollowKind::People, person_id, "follow_person")
            .await
    }

    #[instrument(skip_all)]
    async fn unfollow_person(&self, person_id: u64) -> Result<()> {
        self.unfollow(FollowKind::People, person_id, "unfollow_person")
            .await
    }

    // --- Followed networks ---

    #[instrument(skip_all)]
    async fn followed_networks(&self) -> Result<Vec<FollowedNetwork>> {
        self.list_follows(FollowKind::Networks).await
    }

    #[instrument(skip_all)]
    async fn followed_network(&self, network_id: u64) -> Result<FollowedNetwork> {
        self.follow_request(
            Method::GET,
            FollowKind::Networks,
            network_id,
            "followed_network",
        )
        .await
    }

    #[instrument(skip_all)]
    async fn follow_network(&self, network_id: u64) -> Result<FollowedNetwork> {
        self.follow_request(Method::PUT, FollowKind::Networks, network_id, "follow_network")
            .await
    }

    #[instrument(skip_all)]
    async fn unfollow_network(&self, network_id: u64) -> Result<()> {
        self.unfollow(FollowKind::Networks, network_id, "unfollow_network")
            .await
    }

    // --- Followed web channels ---

    #[instrument(skip_all)]
    async fn followed_webchannels(&self) -> Result<Vec<FollowedWebchannel>> {
        self.list_follows(FollowKind::Webchannels).await
    }

    #[instrument(skip_all)]
    async fn followed_webchannel(&self, webchannel_id: u64) -> Result<FollowedWebchannel> {
        self.follow_request(
            Method::GET,
            FollowKind::Webchannels,
            webchannel_id,
            "followed_webchannel",
        )
        .await
    }

    #[instrument(skip_all)]
    async fn follow_webchannel(&self, webchannel_id: u64) -> Result<FollowedWebchannel> {
        self.follow_request(
            Method::PUT,
            FollowKind::Webchannels,
            webchannel_id,
            "follow_webchannel",
        )
        .await
    }

    #[instrument(skip_all)]
    async fn unfollow_webchannel(&self, webchannel_id: u64) -> Result<()> {
        self.unfollow(FollowKind::Webchannels, webchannel_id, "unfollow_webchannel")
            .await
    }

    // --- Tags ---

    #[instrument(skip_all)]
    async fn tags(&self) -> Result<Vec<Tag>> {
        self.send(ApiRequest::new("user/tags/")).await
    }

    #[instrument(skip_all)]
    async fn create_tag(&self, name: &str) -> Result<Tag> {
        let name = require_name(name, "create_tag")?;
        let body = encode_body(&TagBody { name })?;
        self.send(ApiRequest::with_method(Method::POST, "user/tags/").body(body))
            .await
    }

    #[instrument(skip_all)]
    async fn update_tag(&self, tag_id: u64, name: &str) -> Result<Tag> {
        let tag_id = require_id(tag_id, "tag_id", "update_tag")?;
        let name = require_name(name, "update_tag")?;
        let body = encode_body(&TagBody { name })?;
        self.send(ApiRequest::with_method(Method::PATCH, format!("user/tags/{tag_id}")).body(body))
            .await
    }

    #[instrument(skip_all)]
    async fn delete_tag(&self, tag_id: u64) -> Result<()> {
        let tag_id = require_id(tag_id, "tag_id", "delete_tag")?;
        self.send_empty(ApiRequest::with_method(
            Method::DELETE,
            format!("user/tags/{tag_id}"),
        ))
        .await
    }

    #[instrument(skip_all)]
    async fn tagged_shows(&self, tag_id: u64) -> Result<Vec<TaggedShow>> {
        let tag_id = require_id(tag_id, "tag_id", "tagged_shows")?;
        self.send(ApiRequest::new(format!("user/tags/{tag_id}/shows")))
            .await
    }

    #[instrument(skip_all)]
    async fn tag_show(&self, tag_id: u64, show_id: u64) -> Result<TaggedShow> {
        let tag_id = require_id(tag_id, "tag_id", "tag_show")?;
        let show_id = require_id(show_id, "show_id", "tag_show")?;
        self.send(ApiRequest::with_method(
            Method::PUT,
            format!("user/tags/{tag_id}/shows/{show_id}"),
        ))
        .await
    }

    #[instrument(skip_all)]
    async fn untag_show(&self, tag_id: u64, show_id: u64) -> Result<()> {
        let tag_id = require_id(tag_id, "tag_id", "untag_show")?;
        let show_id = require_id(show_id, "show_id", "untag_show")?;
        self.send_empty(ApiRequest::with_method(
            Method::DELETE,
            format!("user/tags/{tag_id}/shows/{show_id}"),
        ))
        .await
    }

    // --- Show votes ---

    #[instrument(skip_all)]
    async fn show_votes(&self) -> Result<Vec<ShowVote>> {
        self.send(ApiRequest::new("user/votes/shows")).await
    }

    #[instrument(skip_all)]
    async fn show_vote(&self, show_id: u64) -> Result<ShowVote> {
        let show_id = require_id(show_id, "show_id", "show_vote")?;
        self.send(ApiRequest::new(format!("user/votes/shows/{show_id}")))
            .await
    }

    #[instrument(skip_all)]
    async fn vote_show(&self, show_id: u64, vote: u8) -> Result<ShowVote> {
        let show_id = require_id(show_id, "show_id", "vote_show")?;
        if !(MIN_VOTE..=MAX_VOTE).contains(&vote) {
            return Err(TvmazeError::InvalidArgument {
                param: "vote",
                method: "vote_show",
                reason: format!("must be between {MIN_VOTE} and {MAX_VOTE}, got {vote}"),
            });
        }
        let body = encode_body(&VoteBody { vote })?;
        self.send(
            ApiRequest::with_method(Method::PUT, format!("user/votes/shows/{show_id}")).body(body),
        )
        .await
    }

    #[instrument(skip_all)]
    async fn remove_show_vote(&self, show_id: u64) -> Result<()> {
        let show_id = require_id(show_id, "show_id", "remove_show_vote")?;
        self.send_empty(ApiRequest::with_method(
            Method::DELETE,
            format!("user/votes/shows/{show_id}"),
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]
    #![allow(clippy::panic)]

    use super::*;

    /// Builds a client pointed at the mock server.
    fn client_for(server: &wiremock::MockServer) -> TvmazeClient {
        TvmazeClient::builder()
            .base_url(format!("{}/", server.uri()).parse().unwrap())
            .username("test")
            .access_key("testKey")
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_requires_username() {
        // Arrange & Act
        let result = TvmazeClient::new("", "testKey");

        // Assert
        assert_eq!(
            result.unwrap_err().to_string(),
            "No username provided to TvmazeClient."
        );
    }

    #[test]
    fn test_builder_requires_access_key() {
        // Arrange & Act
        let result = TvmazeClient::builder().username("test").build();

        // Assert
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "No access_key provided to TvmazeClient."
        );
    }

    #[test]
    fn test_builder_without_credentials_fails() {
        // Arrange & Act
        let result = TvmazeClient::builder().build();

        // Assert
        assert!(result.unwrap_err().is_usage_error());
    }

    #[test]
    fn test_builder_defaults() {
        // Arrange & Act
        let client = TvmazeClient::new("test", "testKey").unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), "https://api.tvmaze.com/");
        assert_eq!(client.api_version(), "v1");
        assert_eq!(client.username(), "test");
        assert_eq!(client.authorization(), "dGVzdDp0ZXN0S2V5");
    }

    #[test]
    fn test_builder_with_custom_base_url_adds_trailing_slash() {
        // Arrange
        let custom_url = Url::parse("http://localhost:8080/proxy").unwrap();

        // Act
        let client = TvmazeClient::builder()
            .base_url(custom_url)
            .username("test")
            .access_key("testKey")
            .api_version("v2")
            .build()
            .unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/proxy/");
        assert_eq!(client.api_version(), "v2");
    }

    #[test]
    fn test_endpoint_url_composition() {
        // Arrange
        let client = TvmazeClient::new("test", "testKey").unwrap();

        // Act
        let url = client.endpoint_url("v1", "user/follows/shows").unwrap();

        // Assert
        assert_eq!(url.as_str(), "https://api.tvmaze.com/v1/user/follows/shows");
    }

    #[test]
    fn test_endpoint_url_keeps_base_prefix() {
        // Arrange
        let client = TvmazeClient::builder()
            .base_url(Url::parse("http://localhost:8080/proxy/").unwrap())
            .username("test")
            .access_key("testKey")
            .build()
            .unwrap();

        // Act
        let tags = client.endpoint_url("v1", "user/tags/").unwrap();
        let encoded = client.endpoint_url("v1", "user/tags/a?b#c").unwrap();

        // Assert
        assert_eq!(tags.as_str(), "http://localhost:8080/proxy/v1/user/tags/");
        assert_eq!(
            encoded.as_str(),
            "http://localhost:8080/proxy/v1/user/tags/a%3Fb%23c"
        );
    }

    #[test]
    fn test_endpoint_url_rejects_escaping_paths() {
        // Arrange
        let client = TvmazeClient::new("test", "testKey").unwrap();

        // Act
        let absolute = client.endpoint_url("v1", "/user/tags/");
        let parent = client.endpoint_url("v1", "user/../../admin");
        let current = client.endpoint_url("v1", "./user/tags/");

        // Assert
        assert!(matches!(
            absolute,
            Err(TvmazeError::InvalidArgument { param: "path", .. })
        ));
        assert!(parent.unwrap_err().is_usage_error());
        assert!(current.unwrap_err().is_usage_error());
    }

    #[test]
    fn test_build_logs_configured_client() {
        use tracing::subscriber::with_default;
        use tracing_mock::{expect, subscriber};

        // Arrange
        let (subscriber, handle) = subscriber::mock()
            .event(
                expect::event()
                    .at_level(tracing::Level::DEBUG)
                    .with_fields(expect::msg("TVmaze client configured")),
            )
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            TvmazeClient::new("test", "testKey").unwrap();
        });

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_parse_payload_empty_body_is_empty_object() {
        // Arrange & Act
        let value = TvmazeClient::parse_payload("user/tags/1", StatusCode::OK, "  \n").unwrap();

        // Assert
        assert_eq!(value, Value::Object(Map::new()));
    }

    #[test]
    fn test_parse_payload_invalid_json_on_success_is_decode_error() {
        // Arrange & Act
        let result = TvmazeClient::parse_payload("user/tags/", StatusCode::OK, "<html>");

        // Assert
        assert!(matches!(result, Err(TvmazeError::Decode { .. })));
    }

    #[test]
    fn test_parse_payload_invalid_json_on_error_is_api_error() {
        // Arrange & Act
        let result = TvmazeClient::parse_payload(
            "user/tags/",
            StatusCode::BAD_GATEWAY,
            "<html>Bad Gateway</html>",
        );

        // Assert
        assert_eq!(result.unwrap_err().to_string(), "502: Bad Gateway");
    }

    #[test]
    fn test_check_status_uses_message() {
        // Arrange
        let payload = serde_json::json!({
            "name": "Not Found",
            "message": "Page not found.",
            "code": 0,
            "status": 404
        });

        // Act
        let result = TvmazeClient::check_status(StatusCode::NOT_FOUND, &payload);

        // Assert
        assert_eq!(result.unwrap_err().to_string(), "404: Page not found.");
    }

    #[test]
    fn test_check_status_falls_back_to_name() {
        // Arrange
        let payload = serde_json::json!({"name": "Unprocessable entity", "status": "422"});

        // Act
        let result = TvmazeClient::check_status(StatusCode::OK, &payload);

        // Assert
        assert_eq!(
            result.unwrap_err().to_string(),
            "422: Unprocessable entity"
        );
    }

    #[test]
    fn test_check_status_ignores_status_200_and_arrays() {
        // Arrange
        let ok_object = serde_json::json!({"status": 200, "show_id": 1});
        let list = serde_json::json!([{"show_id": 1}]);

        // Act & Assert
        assert!(TvmazeClient::check_status(StatusCode::OK, &ok_object).is_ok());
        assert!(TvmazeClient::check_status(StatusCode::OK, &list).is_ok());
    }

    #[test]
    fn test_check_status_uses_http_status_when_payload_has_none() {
        // Arrange
        let payload = Value::Object(Map::new());

        // Act
        let result = TvmazeClient::check_status(StatusCode::TOO_MANY_REQUESTS, &payload);

        // Assert
        let err = result.unwrap_err();
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.to_string(), "429: Too Many Requests");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404_error() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let error_body = include_str!("../../../../fixtures/tvmaze/error_not_found.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/v1/test/route"))
            .respond_with(wiremock::ResponseTemplate::new(404).set_body_string(error_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let result = client.request(ApiRequest::new("test/route")).await;

        // Assert
        assert_eq!(result.unwrap_err().to_string(), "404: Page not found.");
    }

    #[tokio::test]
    async fn test_invalid_credentials_return_401_error() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let error_body = include_str!("../../../../fixtures/tvmaze/error_unauthorized.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/v1/user/follows/shows"))
            .respond_with(wiremock::ResponseTemplate::new(401).set_body_string(error_body))
            .mount(&mock_server)
            .await;

        let client = TvmazeClient::builder()
            .base_url(format!("{}/", mock_server.uri()).parse().unwrap())
            .username("testUser")
            .access_key("testKey")
            .build()
            .unwrap();

        // Act
        let result = client.request(ApiRequest::new("user/follows/shows")).await;

        // Assert
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "401: Invalid username or API key");
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_auth_and_accept_headers_are_sent() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/v1/user/follows/shows"))
            .and(wiremock::matchers::header(
                "Authorization",
                "Basic dGVzdDp0ZXN0S2V5",
            ))
            .and(wiremock::matchers::header("Accept", "application/json"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let value = client
            .request(ApiRequest::new("user/follows/shows"))
            .await
            .unwrap();

        // Assert
        assert_eq!(value, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_body_sets_content_type() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path("/v1/user/tags/"))
            .and(wiremock::matchers::header("Content-Type", "application/json"))
            .and(wiremock::matchers::body_json(
                serde_json::json!({"name": "Drama"}),
            ))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 3, "name": "Drama"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let request = ApiRequest::with_method(Method::POST, "user/tags/")
            .body(serde_json::json!({"name": "Drama"}));

        // Act
        let value = client.request(request).await.unwrap();

        // Assert
        assert_eq!(value["id"], 3);
    }

    #[tokio::test]
    async fn test_no_body_sends_no_content_type() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("PUT"))
            .and(wiremock::matchers::path("/v1/user/follows/shows/82"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"show_id": 82})),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        client
            .request(ApiRequest::with_method(Method::PUT, "user/follows/shows/82"))
            .await
            .unwrap();

        // Assert
        let received = mock_server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert!(received[0].headers.get("content-type").is_none());
        assert!(received[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_empty_object() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("DELETE"))
            .and(wiremock::matchers::path("/v1/user/tags/7"))
            .respond_with(wiremock::ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let value = client
            .request(ApiRequest::with_method(Method::DELETE, "user/tags/7"))
            .await
            .unwrap();

        // Assert
        assert_eq!(value, Value::Object(Map::new()));
    }

    #[tokio::test]
    async fn test_version_override_and_query() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/v2/user/episodes"))
            .and(wiremock::matchers::query_param("show_id", "82"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let request = ApiRequest::new("user/episodes")
            .version("v2")
            .query("show_id", "82");

        // Act & Assert (mock expect(1) verifies path and query)
        client.request(request).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_version_override_stays_below_base_prefix() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/proxy/v1/user/tags/"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TvmazeClient::builder()
            .base_url(format!("{}/proxy/", mock_server.uri()).parse().unwrap())
            .username("test")
            .access_key("testKey")
            .build()
            .unwrap();

        // Act
        let value = client
            .request(ApiRequest::new("user/tags/").version(""))
            .await
            .unwrap();

        // Assert
        assert_eq!(value, serde_json::json!([]));
        let received = mock_server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].url.path(), "/proxy/v1/user/tags/");
    }

    #[tokio::test]
    async fn test_escaping_path_sends_nothing() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::any())
            .respond_with(wiremock::ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let result = client.request(ApiRequest::new("../user/tags/")).await;

        // Assert
        assert!(result.unwrap_err().is_usage_error());
    }

    #[tokio::test]
    async fn test_delete_with_unexpected_payload_is_decode_error() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("DELETE"))
            .and(wiremock::matchers::path("/v1/user/tags/7"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 7, "name": "Drama"})),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let result = client.delete_tag(7).await;

        // Assert
        match result {
            Err(TvmazeError::Decode { path, .. }) => assert_eq!(path, "user/tags/7"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_with_empty_object_succeeds() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("DELETE"))
            .and(wiremock::matchers::path("/v1/user/votes/shows/82"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act & Assert
        client.remove_show_vote(82).await.unwrap();
    }

    #[tokio::test]
    async fn test_status_field_in_success_response_raises() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"status": 500, "name": "Internal error"})),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let result = client.request(ApiRequest::new("user/tags/")).await;

        // Assert
        assert_eq!(result.unwrap_err().to_string(), "500: Internal error");
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_decode_error() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/v1/user/follows/shows/82"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"unexpected": true})),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let result = client.followed_show(82).await;

        // Assert
        match result {
            Err(TvmazeError::Decode { path, .. }) => assert_eq!(path, "user/follows/shows/82"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_vote_out_of_range_sends_nothing() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::any())
            .respond_with(wiremock::ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let too_low = client.vote_show(1, 0).await;
        let too_high = client.vote_show(1, 11).await;

        // Assert
        assert!(matches!(
            too_low,
            Err(TvmazeError::InvalidArgument { param: "vote", .. })
        ));
        assert!(too_high.unwrap_err().is_usage_error());
    }

    #[tokio::test]
    async fn test_empty_tag_name_is_missing_argument() {
        // Arrange
        let client = TvmazeClient::new("test", "testKey").unwrap();

        // Act
        let created = client.create_tag("  ").await;
        let updated = client.update_tag(1, "").await;

        // Assert
        assert_eq!(
            created.unwrap_err().to_string(),
            "No name provided to create_tag."
        );
        assert_eq!(
            updated.unwrap_err().to_string(),
            "No name provided to update_tag."
        );
    }
}
