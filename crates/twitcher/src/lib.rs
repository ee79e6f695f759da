//! Minimal Twitch Helix client.
//!
//! Wraps app-token retrieval, clip lookup, game lookup, channel search
//! and user search, reshaping Helix responses into simple result values.

pub mod api;
pub mod auth;
pub mod credentials;
pub mod envelope;

pub use api::{ClipEnrichment, Twitcher, TwitcherBuilder};
pub use api::{
    Channel, ClipRecord, ClipResult, Game, HelixClip, HelixResponse, TwitchUser, derive_video_url,
    extract_clip_id, parse_game_id,
};
pub use auth::TokenResponse;
pub use credentials::{ConfigError, Credentials};
pub use envelope::{Lookup, NotFound};

/// Unified error type for the twitcher crate.
///
/// Covers transport and protocol faults only. Empty lookups are reported
/// through [`Lookup::NotFound`] instead.
#[derive(Debug, thiserror::Error)]
pub enum TwitchError {
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Twitch API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Request cancelled")]
    Cancelled,

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl From<reqwest::Error> for TwitchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}
