//! Context info: mentions and external ad-reply previews.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Context attached to an interactive message.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::domain::{ContextInfo, ExternalAdReply};
///
/// let context = ContextInfo::from_parts(
///     vec!["123@s.whatsapp.net".to_owned()],
///     Some(ExternalAdReply::new("Flash Sale").with_source_url("https://shop.example.com")),
/// );
/// assert_eq!(context.mentioned_jid.len(), 1);
/// assert_eq!(context.external_ad_reply.map(|reply| reply.media_type), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextInfo {
    /// Mentioned chat identifiers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentioned_jid: Vec<String>,
    /// Ad-style link preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ad_reply: Option<ExternalAdReply>,
    /// Further protocol fields passed through verbatim.
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl ContextInfo {
    /// Creates empty context info.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds context info from mentions and an optional ad reply.
    ///
    /// An empty mention list is omitted from the output.
    #[must_use]
    pub fn from_parts(mentioned_jid: Vec<String>, external_ad_reply: Option<ExternalAdReply>) -> Self {
        Self {
            mentioned_jid,
            external_ad_reply,
            extra: Map::new(),
        }
    }

    /// Sets the mentioned chat identifiers.
    #[must_use]
    pub fn with_mentions<I, S>(mut self, mentions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mentioned_jid = mentions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the ad-style preview.
    #[must_use]
    pub fn with_external_ad_reply(mut self, reply: ExternalAdReply) -> Self {
        self.external_ad_reply = Some(reply);
        self
    }
}

const fn default_media_type() -> u8 {
    1
}

/// Ad-style link preview rendered above the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalAdReply {
    /// Preview title.
    #[serde(default)]
    pub title: String,
    /// Preview body.
    #[serde(default)]
    pub body: String,
    /// Remote thumbnail location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Inline base64 thumbnail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Link opened when the preview is tapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Protocol media type; `1` is an image preview.
    #[serde(default = "default_media_type")]
    pub media_type: u8,
    /// Render the thumbnail at full width.
    #[serde(default)]
    pub render_larger_thumbnail: bool,
    /// Show the "ad" attribution badge.
    #[serde(default)]
    pub show_ad_attribution: bool,
}

impl ExternalAdReply {
    /// Creates a preview with the given title and platform defaults.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
            thumbnail_url: None,
            thumbnail: None,
            source_url: None,
            media_type: default_media_type(),
            render_larger_thumbnail: false,
            show_ad_attribution: false,
        }
    }

    /// Sets the preview body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the remote thumbnail location.
    #[must_use]
    pub fn with_thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Sets an inline base64 thumbnail.
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Sets the link opened on tap.
    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// Sets the protocol media type.
    #[must_use]
    pub const fn with_media_type(mut self, media_type: u8) -> Self {
        self.media_type = media_type;
        self
    }

    /// Renders the thumbnail at full width.
    #[must_use]
    pub const fn with_larger_thumbnail(mut self) -> Self {
        self.render_larger_thumbnail = true;
        self
    }

    /// Shows the ad attribution badge.
    #[must_use]
    pub const fn with_ad_attribution(mut self) -> Self {
        self.show_ad_attribution = true;
        self
    }
}
