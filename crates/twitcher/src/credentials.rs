//! Twitch application credentials.

use std::fmt;

pub const ENV_TOKEN: &str = "TWITCH_TOKEN";
pub const ENV_CLIENT_ID: &str = "TWITCH_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "TWITCH_CLIENT_SECRET";

/// Error raised while loading credentials from the environment.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
}

/// Bearer token, client id and client secret used for every call.
///
/// Immutable once handed to [`crate::Twitcher`].
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(
        token: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read `TWITCH_TOKEN`, `TWITCH_CLIENT_ID` and `TWITCH_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Credentials::from_env`], reading variables through `lookup`.
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));
        Ok(Self {
            token: get(ENV_TOKEN)?,
            client_id: get(ENV_CLIENT_ID)?,
            client_secret: get(ENV_CLIENT_SECRET)?,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
