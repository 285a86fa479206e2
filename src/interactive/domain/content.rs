//! Canonical interactive content handed to the transport.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::button::NativeFlowButton;
use super::context::ContextInfo;
use super::header::InteractiveHeader;
use super::payload::AuthoringPayload;

/// Native flow section of an interactive message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeFlowMessage {
    /// Canonical buttons in display order.
    #[serde(default)]
    pub buttons: Vec<NativeFlowButton>,
    /// Serialised [`MessageParams`](super::MessageParams).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_params_json: Option<String>,
}

impl NativeFlowMessage {
    /// Creates a native flow section from canonical buttons.
    #[must_use]
    pub const fn new(buttons: Vec<NativeFlowButton>) -> Self {
        Self {
            buttons,
            message_params_json: None,
        }
    }

    /// Returns the kind name of the leading button, if any.
    #[must_use]
    pub fn first_button_name(&self) -> Option<&str> {
        self.buttons.first().map(|button| button.name.as_str())
    }
}

/// Message body. A `null` text is serialised rather than omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    /// Visible body text.
    #[serde(default)]
    pub text: Option<String>,
}

/// Message footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Visible footer text.
    pub text: String,
}

/// Fully nested interactive message in protocol shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveMessage {
    /// Native flow section; required by the canonical validator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_flow_message: Option<NativeFlowMessage>,
    /// Header above the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<InteractiveHeader>,
    /// Message body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    /// Message footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    /// Mentions and ad-style preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_info: Option<ContextInfo>,
    /// Further protocol fields passed through verbatim.
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl InteractiveMessage {
    /// Creates a message holding only a native flow section.
    #[must_use]
    pub fn with_native_flow(native_flow: NativeFlowMessage) -> Self {
        Self {
            native_flow_message: Some(native_flow),
            ..Self::default()
        }
    }

    /// Returns the canonical buttons, or an empty slice without a native
    /// flow section.
    #[must_use]
    pub fn buttons(&self) -> &[NativeFlowButton] {
        self.native_flow_message
            .as_ref()
            .map_or(&[], |native_flow| native_flow.buttons.as_slice())
    }
}

/// Converted content: the interactive message plus forwarded caller fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveContent {
    /// The canonical message.
    pub interactive_message: InteractiveMessage,
    /// Caller fields that were not authoring-only.
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Result of conversion: either new canonical content or the payload as given.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutgoingContent {
    /// Content produced from canonical buttons.
    Interactive(InteractiveContent),
    /// Payload without canonical buttons, returned unchanged.
    Unchanged(AuthoringPayload),
}

impl OutgoingContent {
    /// Returns the interactive message carried by either variant.
    #[must_use]
    pub const fn interactive_message(&self) -> Option<&InteractiveMessage> {
        match self {
            Self::Interactive(content) => Some(&content.interactive_message),
            Self::Unchanged(payload) => payload.interactive_message.as_ref(),
        }
    }

    /// Mutable access to the interactive message carried by either variant.
    pub fn interactive_message_mut(&mut self) -> Option<&mut InteractiveMessage> {
        match self {
            Self::Interactive(content) => Some(&mut content.interactive_message),
            Self::Unchanged(payload) => payload.interactive_message.as_mut(),
        }
    }

    /// Returns `true` when conversion produced new content.
    #[must_use]
    pub const fn is_converted(&self) -> bool {
        matches!(self, Self::Interactive(_))
    }
}

/// The transport's normalised view of a materialised message, used to
/// classify it for metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedContent {
    /// Interactive message, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive_message: Option<InteractiveMessage>,
    /// Legacy buttons message, kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons_message: Option<Value>,
    /// List message, kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_message: Option<Value>,
}

impl NormalizedContent {
    /// Returns the native flow section, if any.
    #[must_use]
    pub fn native_flow(&self) -> Option<&NativeFlowMessage> {
        self.interactive_message
            .as_ref()
            .and_then(|message| message.native_flow_message.as_ref())
    }
}

impl From<InteractiveMessage> for NormalizedContent {
    fn from(message: InteractiveMessage) -> Self {
        Self {
            interactive_message: Some(message),
            ..Self::default()
        }
    }
}
