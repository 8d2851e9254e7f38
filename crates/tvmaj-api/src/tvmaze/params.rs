//! TVmaze request descriptors and endpoint parameters.

use std::fmt;

use reqwest::Method;
use serde_json::Value;

/// Default API version segment.
pub(crate) const DEFAULT_API_VERSION: &str = "v1";

/// Describes a single request to the TVmaze API.
///
/// Defaults to `GET` against the `v1` API with no body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Path below the version segment (e.g. `user/follows/shows`).
    pub(crate) path: String,
    /// API version segment (`None` = client default).
    pub(crate) version: Option<String>,
    /// HTTP method.
    pub(crate) method: Method,
    /// Query string pairs.
    pub(crate) query: Vec<(&'static str, String)>,
    /// JSON body.
    pub(crate) body: Option<Value>,
}

impl ApiRequest {
    /// Creates a `GET` request for the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: None,
            method: Method::GET,
            query: Vec::new(),
            body: None,
        }
    }

    /// Creates a request with an explicit method.
    pub fn with_method(method: Method, path: impl Into<String>) -> Self {
        Self::new(path).method(method)
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Overrides the API version segment. An empty value keeps the client default.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Appends a query string pair.
    #[must_use]
    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Request path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Parameters for `GET user/episodes`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedEpisodesParams {
    /// Only return episodes of this show.
    pub show_id: Option<u64>,
    /// Embed full episode objects (`embed=episode`).
    pub embed_episode: bool,
}

impl MarkedEpisodesParams {
    /// Creates empty params (all marked episodes, nothing embedded).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_id: None,
            embed_episode: false,
        }
    }

    /// Restricts results to a single show.
    #[must_use]
    pub const fn show_id(mut self, show_id: u64) -> Self {
        self.show_id = Some(show_id);
        self
    }

    /// Requests embedded episode objects.
    #[must_use]
    pub const fn embed_episode(mut self) -> Self {
        self.embed_episode = true;
        self
    }

    /// Query string pairs for these params.
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(show_id) = self.show_id {
            query.push(("show_id", show_id.to_string()));
        }
        if self.embed_episode {
            query.push(("embed", String::from("episode")));
        }
        query
    }
}

/// Kinds of resources that can be followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FollowKind {
    /// TV shows.
    Shows,
    /// People (cast and crew).
    People,
    /// Broadcast networks.
    Networks,
    /// Web channels (streaming services).
    Webchannels,
}

impl FollowKind {
    /// Path segment below `user/follows/`.
    #[must_use]
    pub const fn as_segment(self) -> &'static str {
        match self {
            Self::Shows => "shows",
            Self::People => "people",
            Self::Networks => "networks",
            Self::Webchannels => "webchannels",
        }
    }

    /// Name of the identifier parameter for this kind.
    #[must_use]
    pub const fn id_param(self) -> &'static str {
        match self {
            Self::Shows => "show_id",
            Self::People => "person_id",
            Self::Networks => "network_id",
            Self::Webchannels => "webchannel_id",
        }
    }

    /// Builds `user/follows/{kind}` or `user/follows/{kind}/{id}`.
    pub(crate) fn path(self, id: Option<u64>) -> String {
        id.map_or_else(
            || format!("user/follows/{}", self.as_segment()),
            |id| format!("user/follows/{}/{id}", self.as_segment()),
        )
    }
}

impl fmt::Display for FollowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_segment())
    }
}
