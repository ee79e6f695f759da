//! Twitch Helix REST API client.
//!
//! Every call carries the stored bearer token and Client-Id header.
//! Empty Helix results come back as [`Lookup::NotFound`]; transport
//! faults come back as [`TwitchError`].

mod clips;
mod games;
mod request;
mod search;
mod users;

pub mod models;

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use url::Url;

pub use clips::{derive_video_url, extract_clip_id};
pub use games::parse_game_id;
pub use models::{Channel, ClipRecord, ClipResult, Game, HelixClip, HelixResponse, TwitchUser};

use crate::{Credentials, Lookup, NotFound, TwitchError};

pub const HELIX_BASE: &str = "https://api.twitch.tv/helix";
pub const ID_BASE: &str = "https://id.twitch.tv";

/// How [`Twitcher::get_clip`] fetches the broadcaster and creator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClipEnrichment {
    /// Broadcaster first, then creator.
    #[default]
    Sequential,
    /// Both lookups in flight at once.
    Concurrent,
}

/// Twitch Helix client bound to one set of credentials.
pub struct Twitcher {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
    pub(crate) helix_base: Url,
    pub(crate) id_base: Url,
    pub(crate) clip_enrichment: ClipEnrichment,
}

/// Builder for [`Twitcher`] with overridable hosts and transport settings.
#[derive(Debug)]
pub struct TwitcherBuilder {
    credentials: Credentials,
    helix_base: String,
    id_base: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    clip_enrichment: ClipEnrichment,
}

impl TwitcherBuilder {
    pub fn helix_base_url(mut self, url: impl Into<String>) -> Self {
        self.helix_base = url.into();
        self
    }

    pub fn id_base_url(mut self, url: impl Into<String>) -> Self {
        self.id_base = url.into();
        self
    }

    /// Total per-request timeout. Unset means the transport default (none).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn clip_enrichment(mut self, mode: ClipEnrichment) -> Self {
        self.clip_enrichment = mode;
        self
    }

    pub fn build(self) -> Result<Twitcher, TwitchError> {
        let mut http = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        if let Some(agent) = self.user_agent {
            http = http.user_agent(agent);
        }

        Ok(Twitcher {
            http: http.build()?,
            credentials: self.credentials,
            helix_base: parse_base(&self.helix_base)?,
            id_base: parse_base(&self.id_base)?,
            clip_enrichment: self.clip_enrichment,
        })
    }
}

/// Parse a base URL so that relative joins append to its path.
fn parse_base(raw: &str) -> Result<Url, url::ParseError> {
    let trimmed = raw.trim_end_matches('/');
    Url::parse(&format!("{trimmed}/"))
}

impl Twitcher {
    /// Client against the production Twitch hosts with default transport settings.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
            helix_base: Url::parse(&format!("{HELIX_BASE}/")).expect("static Helix URL"),
            id_base: Url::parse(&format!("{ID_BASE}/")).expect("static identity URL"),
            clip_enrichment: ClipEnrichment::default(),
        }
    }

    pub fn builder(credentials: Credentials) -> TwitcherBuilder {
        TwitcherBuilder {
            credentials,
            helix_base: HELIX_BASE.into(),
            id_base: ID_BASE.into(),
            timeout: None,
            user_agent: None,
            clip_enrichment: ClipEnrichment::default(),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn clip_enrichment(&self) -> ClipEnrichment {
        self.clip_enrichment
    }

    /// Run `fut` unless `token` is cancelled first.
    pub async fn cancellable<T>(
        &self,
        token: &CancellationToken,
        fut: impl Future<Output = Result<T, TwitchError>>,
    ) -> Result<T, TwitchError> {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(TwitchError::Cancelled),
            res = fut => res,
        }
    }
}
