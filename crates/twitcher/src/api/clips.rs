use super::*;

const CLIPS_HOST_PREFIX: &str = "https://clips.twitch.tv/";
const WWW_PREFIX: &str = "https://www.twitch.tv/";

/// Pull the clip id out of a clip URL.
///
/// `https://clips.twitch.tv/<id>` yields `<id>`. For
/// `https://www.twitch.tv/<channel>/clip/<id>` only the host prefix is
/// removed, so the result is `<channel>/clip/<id>`. Anything else yields
/// an empty id.
pub fn extract_clip_id(clip_url: &str) -> String {
    if clip_url.contains(CLIPS_HOST_PREFIX) {
        clip_url.replacen(CLIPS_HOST_PREFIX, "", 1)
    } else if clip_url.contains(WWW_PREFIX) && clip_url.contains("/clip/") {
        clip_url.replacen(WWW_PREFIX, "", 1)
    } else {
        String::new()
    }
}

/// Rewrite a clip thumbnail URL into the matching mp4 URL.
///
/// Everything from the first `-preview` onwards becomes `.mp4`; a URL
/// without `-preview` is returned unchanged.
pub fn derive_video_url(thumbnail_url: &str) -> String {
    match thumbnail_url.find("-preview") {
        Some(idx) => format!("{}.mp4", &thumbnail_url[..idx]),
        None => thumbnail_url.to_string(),
    }
}

impl Twitcher {
    /// Look up a clip by URL along with its broadcaster and creator.
    pub async fn get_clip(&self, clip_url: &str) -> Result<Lookup<ClipResult>, TwitchError> {
        let clip_id = extract_clip_id(clip_url);
        let clips: Vec<HelixClip> = self.helix_get("clips", &[("id", clip_id.as_str())]).await?;

        let Some(clip) = clips.into_iter().next() else {
            tracing::debug!(clip_id = %clip_id, "Clip not found");
            return Ok(Lookup::NotFound(NotFound::Clip));
        };

        let (streamer, creator) = match self.clip_enrichment {
            ClipEnrichment::Sequential => {
                let streamer = self.first_user_by_id(&clip.broadcaster_id).await?;
                let creator = self.first_user_by_id(&clip.creator_id).await?;
                (streamer, creator)
            }
            ClipEnrichment::Concurrent => {
                futures_util::future::try_join(
                    self.first_user_by_id(&clip.broadcaster_id),
                    self.first_user_by_id(&clip.creator_id),
                )
                .await?
            }
        };

        if streamer.is_none() {
            tracing::warn!(broadcaster_id = %clip.broadcaster_id, "Clip broadcaster not found");
        }
        if creator.is_none() {
            tracing::warn!(creator_id = %clip.creator_id, "Clip creator not found");
        }

        Ok(Lookup::Found(ClipResult {
            streamer,
            creator,
            clip: ClipRecord::from(clip),
        }))
    }

    async fn first_user_by_id(&self, user_id: &str) -> Result<Option<TwitchUser>, TwitchError> {
        Ok(self
            .search_user_by_user_id(user_id)
            .await?
            .found()
            .and_then(|users| users.into_iter().next()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_clips_host() {
        assert_eq!(
            extract_clip_id("https://clips.twitch.tv/IncredulousTastyPoxPJSugar"),
            "IncredulousTastyPoxPJSugar"
        );
    }

    #[test]
    fn www_url_keeps_channel_and_clip_segments() {
        assert_eq!(
            extract_clip_id("https://www.twitch.tv/somechannel/clip/FunnyClipSlug-abc123"),
            "somechannel/clip/FunnyClipSlug-abc123"
        );
    }

    #[test]
    fn www_url_without_clip_segment_is_empty() {
        assert_eq!(extract_clip_id("https://www.twitch.tv/somechannel"), "");
    }

    #[test]
    fn unknown_url_is_empty() {
        assert_eq!(extract_clip_id("https://youtube.com/watch?v=x"), "");
        assert_eq!(extract_clip_id(""), "");
    }

    #[test]
    fn video_url_replaces_preview_suffix() {
        assert_eq!(
            derive_video_url(
                "https://clips-media-assets2.twitch.tv/AT-cm%7C123-preview-480x272.jpg"
            ),
            "https://clips-media-assets2.twitch.tv/AT-cm%7C123.mp4"
        );
    }

    #[test]
    fn video_url_uses_first_preview_occurrence() {
        assert_eq!(
            derive_video_url("https://x/a-preview-b-preview-480x272.jpg"),
            "https://x/a.mp4"
        );
    }

    #[test]
    fn video_url_without_preview_is_unchanged() {
        assert_eq!(derive_video_url("https://x/thumb.jpg"), "https://x/thumb.jpg");
    }
}
