use super::*;

impl Twitcher {
    /// Search channels by name. Returns the raw Helix `data` array, which
    /// may be empty.
    pub async fn search_channel(&self, channel_name: &str) -> Result<Vec<Channel>, TwitchError> {
        self.helix_get("search/channels", &[("query", channel_name)])
            .await
    }
}
