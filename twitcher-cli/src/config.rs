//! CLI configuration: `.env` file, then environment, then flags.

use std::time::Duration;

use anyhow::Context;
use twitcher::{ClipEnrichment, Credentials, Twitcher};

/// Runtime configuration for one CLI invocation.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub credentials: Credentials,
    pub helix_url: Option<String>,
    pub id_url: Option<String>,
    pub timeout: Option<Duration>,
    pub clip_enrichment: ClipEnrichment,
}

/// Flag values that override the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub timeout_secs: Option<u64>,
    pub concurrent_clip_lookups: bool,
}

impl CliConfig {
    pub fn load(overrides: &Overrides) -> anyhow::Result<Self> {
        load_dotenv();
        Self::from_env(|key| std::env::var(key).ok(), overrides)
    }

    fn from_env(
        env: impl Fn(&str) -> Option<String>,
        overrides: &Overrides,
    ) -> anyhow::Result<Self> {
        let credentials = Credentials::from_lookup(|key| env(key))?;

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => Some(secs),
            None => env("TWITCH_TIMEOUT_SECS")
                .filter(|v| !v.is_empty())
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("TWITCH_TIMEOUT_SECS must be a whole number of seconds")?,
        };

        let clip_enrichment = if overrides.concurrent_clip_lookups {
            ClipEnrichment::Concurrent
        } else {
            ClipEnrichment::Sequential
        };

        Ok(Self {
            credentials,
            helix_url: env("TWITCH_HELIX_URL").filter(|v| !v.is_empty()),
            id_url: env("TWITCH_ID_URL").filter(|v| !v.is_empty()),
            timeout: timeout_secs.map(Duration::from_secs),
            clip_enrichment,
        })
    }

    pub fn build_client(&self) -> anyhow::Result<Twitcher> {
        let mut builder = Twitcher::builder(self.credentials.clone())
            .user_agent(concat!("twitcher/", env!("CARGO_PKG_VERSION")))
            .clip_enrichment(self.clip_enrichment);
        if let Some(url) = &self.helix_url {
            builder = builder.helix_base_url(url);
        }
        if let Some(url) = &self.id_url {
            builder = builder.id_base_url(url);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().context("failed to build Twitch client")
    }
}

/// Load .env from the first candidate path that exists.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::debug!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}
