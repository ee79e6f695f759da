use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use super::*;

impl Twitcher {
    /// Build auth headers from the stored credentials.
    fn auth_headers(&self) -> Result<HeaderMap, TwitchError> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", self.credentials.token());
        let mut bearer = HeaderValue::from_str(&bearer)?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(
            "Client-Id",
            HeaderValue::from_str(self.credentials.client_id())?,
        );
        Ok(headers)
    }

    /// Helix URL for `path` with the given query pairs, percent-encoded.
    pub(super) fn helix_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, TwitchError> {
        let mut url = self.helix_base.join(path)?;
        url.query_pairs_mut().extend_pairs(query);
        Ok(url)
    }

    /// GET a Helix list endpoint and return its `data` array.
    ///
    /// A non-2xx response whose body is still a Helix list with no entries
    /// is returned as an empty list. Anything else non-2xx is an error.
    pub(super) async fn helix_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, TwitchError> {
        let url = self.helix_url(path, query)?;
        let resp = self
            .http
            .get(url)
            .headers(self.auth_headers()?)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(path, status = status.as_u16(), "Helix response");

        if !status.is_success() {
            tracing::warn!(path, status = status.as_u16(), "Helix request failed");
            return match serde_json::from_str::<HelixResponse<T>>(&body) {
                Ok(resp) if resp.data.is_empty() => Ok(Vec::new()),
                _ => Err(TwitchError::ApiError {
                    status: status.as_u16(),
                    message: body,
                }),
            };
        }

        let resp: HelixResponse<T> = serde_json::from_str(&body)?;
        Ok(resp.data)
    }
}
