//! Interactive message headers, optionally carrying a media attachment.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const DEFAULT_DOCUMENT_MIMETYPE: &str = "application/pdf";
const DEFAULT_DOCUMENT_NAME: &str = "document.pdf";
const DEFAULT_DOCUMENT_LENGTH: &str = "999999999999";
const DEFAULT_IMAGE_MIMETYPE: &str = "image/jpeg";
const DEFAULT_VIDEO_MIMETYPE: &str = "video/mp4";
const DEFAULT_MEDIA_LENGTH: &str = "999999";

/// Header shown above the body of an interactive message.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::domain::{InteractiveHeader, MediaOptions};
///
/// let header = InteractiveHeader::document(
///     "https://example.com/guide.enc",
///     MediaOptions::default().with_file_name("guide.pdf"),
/// );
/// assert!(header.has_media_attachment);
/// let document = header.document_message.expect("document header");
/// assert_eq!(document.mimetype, "application/pdf");
/// assert_eq!(document.file_name.as_deref(), Some("guide.pdf"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveHeader {
    /// Header title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Header subtitle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Whether a media attachment accompanies the header.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub has_media_attachment: bool,
    /// Document attachment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_message: Option<MediaMessage>,
    /// Image attachment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_message: Option<MediaMessage>,
    /// Video attachment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_message: Option<MediaMessage>,
    /// Further protocol fields passed through verbatim.
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl InteractiveHeader {
    /// Creates a text-only header.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Creates a header with a document attachment.
    #[must_use]
    pub fn document(url: impl Into<String>, options: MediaOptions) -> Self {
        let media = MediaMessage {
            url: url.into(),
            mimetype: options
                .mimetype
                .unwrap_or_else(|| DEFAULT_DOCUMENT_MIMETYPE.to_owned()),
            file_name: Some(
                options
                    .file_name
                    .unwrap_or_else(|| DEFAULT_DOCUMENT_NAME.to_owned()),
            ),
            file_length: Some(
                options
                    .file_length
                    .unwrap_or_else(|| DEFAULT_DOCUMENT_LENGTH.to_owned()),
            ),
            page_count: options.page_count,
            caption: None,
            jpeg_thumbnail: None,
        };
        Self {
            has_media_attachment: true,
            document_message: Some(media),
            ..Self::default()
        }
    }

    /// Creates a header with an image attachment.
    #[must_use]
    pub fn image(url: impl Into<String>, options: MediaOptions) -> Self {
        Self {
            has_media_attachment: true,
            image_message: Some(MediaMessage::visual(url, options, DEFAULT_IMAGE_MIMETYPE)),
            ..Self::default()
        }
    }

    /// Creates a header with a video attachment.
    #[must_use]
    pub fn video(url: impl Into<String>, options: MediaOptions) -> Self {
        Self {
            has_media_attachment: true,
            video_message: Some(MediaMessage::visual(url, options, DEFAULT_VIDEO_MIMETYPE)),
            ..Self::default()
        }
    }
}

/// Media attachment description used by document, image and video headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMessage {
    /// Location of the (encrypted) media.
    pub url: String,
    /// MIME type of the media.
    pub mimetype: String,
    /// File name shown for documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Declared size in bytes, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_length: Option<String>,
    /// Page count shown for documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// Caption for images and videos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Base64-encoded preview thumbnail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jpeg_thumbnail: Option<String>,
}

impl MediaMessage {
    fn visual(url: impl Into<String>, options: MediaOptions, default_mimetype: &str) -> Self {
        Self {
            url: url.into(),
            mimetype: options
                .mimetype
                .unwrap_or_else(|| default_mimetype.to_owned()),
            file_name: None,
            file_length: Some(
                options
                    .file_length
                    .unwrap_or_else(|| DEFAULT_MEDIA_LENGTH.to_owned()),
            ),
            page_count: None,
            caption: options.caption,
            jpeg_thumbnail: options.jpeg_thumbnail,
        }
    }
}

/// Optional overrides for media header builders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaOptions {
    /// File name (documents).
    pub file_name: Option<String>,
    /// Caption (images and videos).
    pub caption: Option<String>,
    /// MIME type override.
    pub mimetype: Option<String>,
    /// Declared size in bytes.
    pub file_length: Option<String>,
    /// Page count (documents).
    pub page_count: Option<u32>,
    /// Base64-encoded preview thumbnail (images and videos).
    pub jpeg_thumbnail: Option<String>,
}

impl MediaOptions {
    /// Sets the file name.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Sets the caption.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets the MIME type.
    #[must_use]
    pub fn with_mimetype(mut self, mimetype: impl Into<String>) -> Self {
        self.mimetype = Some(mimetype.into());
        self
    }

    /// Sets the declared size in bytes.
    #[must_use]
    pub fn with_file_length(mut self, file_length: u64) -> Self {
        self.file_length = Some(file_length.to_string());
        self
    }

    /// Sets the page count.
    #[must_use]
    pub const fn with_page_count(mut self, page_count: u32) -> Self {
        self.page_count = Some(page_count);
        self
    }

    /// Sets the preview thumbnail.
    #[must_use]
    pub fn with_jpeg_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.jpeg_thumbnail = Some(thumbnail.into());
        self
    }
}
