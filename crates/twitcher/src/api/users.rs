use super::*;

impl Twitcher {
    /// Get user profiles by login name.
    pub async fn search_user_by_name(
        &self,
        user_name: &str,
    ) -> Result<Lookup<Vec<TwitchUser>>, TwitchError> {
        let users = self.helix_get("users", &[("login", user_name)]).await?;
        Ok(Lookup::from_list(users, NotFound::User))
    }

    /// Get user profiles by user ID.
    pub async fn search_user_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Lookup<Vec<TwitchUser>>, TwitchError> {
        let users = self.helix_get("users", &[("id", user_id)]).await?;
        Ok(Lookup::from_list(users, NotFound::User))
    }
}
