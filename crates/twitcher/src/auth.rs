//! App access tokens via the OAuth client-credentials grant.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::{Twitcher, TwitchError};

/// Raw token endpoint payload, passed through untouched.
///
/// Serializes exactly as received. The accessors are conveniences over the
/// raw JSON and return `None` when a field is absent or of another type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TokenResponse {
    raw: Value,
    #[serde(skip)]
    received_at: DateTime<Utc>,
}

impl TokenResponse {
    pub fn access_token(&self) -> Option<&str> {
        self.raw.get("access_token")?.as_str()
    }

    pub fn token_type(&self) -> Option<&str> {
        self.raw.get("token_type")?.as_str()
    }

    /// Lifetime in seconds as reported by Twitch.
    pub fn expires_in(&self) -> Option<i64> {
        self.raw.get("expires_in")?.as_i64()
    }

    /// Receive time plus `expires_in`, or `None` if that is not a
    /// representable date.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_in()
            .and_then(TimeDelta::try_seconds)
            .and_then(|lifetime| self.received_at.checked_add_signed(lifetime))
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }
}

impl Twitcher {
    /// Request an app access token using the stored client id and secret.
    ///
    /// Any non-2xx response from the identity endpoint is an error.
    pub async fn get_token(&self) -> Result<TokenResponse, TwitchError> {
        let mut url = self.id_base.join("oauth2/token")?;
        url.query_pairs_mut()
            .append_pair("client_id", self.credentials.client_id())
            .append_pair("client_secret", self.credentials.client_secret())
            .append_pair("grant_type", "client_credentials");

        tracing::info!("Requesting Twitch app access token");
        let resp = self.http.post(url).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Token request rejected");
            return Err(TwitchError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(TokenResponse {
            raw: serde_json::from_str(&body)?,
            received_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn token(raw: Value) -> TokenResponse {
        TokenResponse {
            raw,
            received_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn accessors_read_raw_payload() {
        let t = token(json!({
            "access_token": "jostpf5q0uzmxmkba9iyug38kjtgh",
            "expires_in": 5011271,
            "token_type": "bearer"
        }));

        assert_eq!(t.access_token(), Some("jostpf5q0uzmxmkba9iyug38kjtgh"));
        assert_eq!(t.token_type(), Some("bearer"));
        assert_eq!(t.expires_in(), Some(5011271));
        assert_eq!(t.expires_at().unwrap().timestamp(), 1_700_000_000 + 5011271);
    }

    #[test]
    fn serializes_as_received() {
        let raw = json!({ "access_token": "abc", "extra": [1, 2] });
        let t = token(raw.clone());
        assert_eq!(serde_json::to_value(&t).unwrap(), raw);
    }

    #[test]
    fn missing_fields_are_none() {
        let t = token(json!({ "message": "odd" }));
        assert!(t.access_token().is_none());
        assert!(t.expires_at().is_none());
    }

    #[test]
    fn out_of_range_lifetime_has_no_expiry() {
        let t = token(json!({ "expires_in": 9_000_000_000_000i64 }));
        assert_eq!(t.expires_in(), Some(9_000_000_000_000));
        assert!(t.expires_at().is_none());

        let t = token(json!({ "expires_in": i64::MAX }));
        assert!(t.expires_at().is_none());
    }
}
