use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wrapper for Twitch Helix list responses.
#[derive(Debug, Deserialize)]
pub struct HelixResponse<T> {
    pub data: Vec<T>,
}

/// User information from GET /helix/users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitchUser {
    pub id: String,
    pub login: String,
    pub display_name: String,
    #[serde(rename = "type", default)]
    pub user_type: String,
    #[serde(default)]
    pub broadcaster_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub profile_image_url: String,
    #[serde(default)]
    pub offline_image_url: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub created_at: String,
}

/// Clip as returned by GET /helix/clips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelixClip {
    pub id: String,
    pub url: String,
    pub embed_url: String,
    pub broadcaster_id: String,
    #[serde(default)]
    pub broadcaster_name: String,
    pub creator_id: String,
    #[serde(default)]
    pub creator_name: String,
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub created_at: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub vod_offset: Option<u64>,
    #[serde(default)]
    pub is_featured: bool,
}

/// Clip as handed back by [`crate::Twitcher::get_clip`], with a derived `video_url`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipRecord {
    pub id: String,
    pub url: String,
    pub video_url: String,
    pub embed_url: String,
    pub video_id: String,
    pub game_id: String,
    pub language: String,
    pub title: String,
    pub view_count: u64,
    pub created_at: String,
    pub thumbnail_url: String,
    pub duration: f64,
    pub vod_offset: Option<u64>,
    pub is_featured: bool,
}

impl From<HelixClip> for ClipRecord {
    fn from(clip: HelixClip) -> Self {
        Self {
            video_url: super::derive_video_url(&clip.thumbnail_url),
            id: clip.id,
            url: clip.url,
            embed_url: clip.embed_url,
            video_id: clip.video_id,
            game_id: clip.game_id,
            language: clip.language,
            title: clip.title,
            view_count: clip.view_count,
            created_at: clip.created_at,
            thumbnail_url: clip.thumbnail_url,
            duration: clip.duration,
            vod_offset: clip.vod_offset,
            is_featured: clip.is_featured,
        }
    }
}

/// A clip together with the accounts it was recorded on and created by.
///
/// `streamer` or `creator` is `None` when Helix no longer knows the account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipResult {
    pub streamer: Option<TwitchUser>,
    pub creator: Option<TwitchUser>,
    pub clip: ClipRecord,
}

/// Game (category) from GET /helix/games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub box_art_url: String,
    #[serde(default)]
    pub igdb_id: String,
}

/// Channel entry from GET /helix/search/channels.
///
/// Kept exactly as Helix sent it, including fields this crate does not
/// know about. The accessors return `None` when a field is absent or has
/// an unexpected type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Channel(pub Map<String, Value>);

impl Channel {
    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.as_str()
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    pub fn broadcaster_login(&self) -> Option<&str> {
        self.str_field("broadcaster_login")
    }

    pub fn display_name(&self) -> Option<&str> {
        self.str_field("display_name")
    }

    pub fn game_name(&self) -> Option<&str> {
        self.str_field("game_name")
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn is_live(&self) -> Option<bool> {
        self.0.get("is_live")?.as_bool()
    }

    pub fn tags(&self) -> Vec<&str> {
        self.0
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_type_reads_wire_name_type() {
        let body = r#"{
          "data": [{
            "id": "141981764",
            "login": "twitchdev",
            "display_name": "TwitchDev",
            "type": "staff",
            "broadcaster_type": "partner",
            "description": "Supporting third-party developers",
            "profile_image_url": "https://static-cdn.jtvnw.net/p.png",
            "offline_image_url": "https://static-cdn.jtvnw.net/o.png",
            "view_count": 5980557,
            "created_at": "2016-12-14T20:32:28Z"
          }]
        }"#;

        let parsed: HelixResponse<TwitchUser> = serde_json::from_str(body).unwrap();
        let user = &parsed.data[0];
        assert_eq!(user.user_type, "staff");
        assert_eq!(user.view_count, 5980557);

        let out = serde_json::to_value(user).unwrap();
        assert_eq!(out["type"], "staff");
        assert!(out.get("user_type").is_none());
    }

    #[test]
    fn clip_allows_null_vod_offset() {
        let body = r#"{
          "data": [{
            "id": "AwkwardHelplessSalamanderSwiftRage",
            "url": "https://clips.twitch.tv/AwkwardHelplessSalamanderSwiftRage",
            "embed_url": "https://clips.twitch.tv/embed?clip=AwkwardHelplessSalamanderSwiftRage",
            "broadcaster_id": "67955580",
            "broadcaster_name": "ChewieMelodies",
            "creator_id": "53834192",
            "creator_name": "BlackNova03",
            "video_id": "",
            "game_id": "488191",
            "language": "en",
            "title": "babymetal",
            "view_count": 10,
            "created_at": "2017-11-30T22:34:18Z",
            "thumbnail_url": "https://clips-media-assets.twitch.tv/157589949-preview-480x272.jpg",
            "duration": 60,
            "vod_offset": null,
            "is_featured": false
          }]
        }"#;

        let parsed: HelixResponse<HelixClip> = serde_json::from_str(body).unwrap();
        let record = ClipRecord::from(parsed.data[0].clone());
        assert_eq!(record.vod_offset, None);
        assert_eq!(record.duration, 60.0);
        assert_eq!(record.video_url, "https://clips-media-assets.twitch.tv/157589949.mp4");
    }

    #[test]
    fn channel_keeps_unknown_fields_and_tolerates_missing_ones() {
        let body = r#"{
          "data": [{
            "broadcaster_login": "gweep_creative",
            "id": "606695369",
            "is_live": false,
            "extra_field": "kept"
          }]
        }"#;

        let parsed: HelixResponse<Channel> = serde_json::from_str(body).unwrap();
        let channel = &parsed.data[0];
        assert_eq!(channel.broadcaster_login(), Some("gweep_creative"));
        assert_eq!(channel.display_name(), None);
        assert_eq!(channel.is_live(), Some(false));
        assert!(channel.tags().is_empty());

        let out = serde_json::to_value(channel).unwrap();
        assert_eq!(out["extra_field"], "kept");
        assert!(out.get("tags").is_none());
        assert!(out.get("game_id").is_none());
    }
}
