//! Caller-facing authoring payloads for the two send entry points.
//!
//! Button lists are held as raw JSON values: validators must be able to
//! report entries of the wrong type instead of failing deserialisation.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::button::{ButtonInput, NativeFlowButton};
use super::content::InteractiveMessage;
use super::context::ContextInfo;
use super::header::InteractiveHeader;
use super::params::MessageParams;

/// Payload accepted by the simple `send_buttons` entry point.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::domain::{LegacyButton, SendButtonsPayload};
///
/// let payload = SendButtonsPayload::new("Pick one")
///     .with_button(LegacyButton::new("a", "A"))
///     .with_footer("Thanks");
/// assert_eq!(payload.buttons.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendButtonsPayload {
    /// Body text; required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Footer text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Header title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Header subtitle, used as the title when no title is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Buttons in any accepted shape.
    #[serde(default)]
    pub buttons: Vec<Value>,
    /// Explicit header, overriding `title` and `subtitle`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<InteractiveHeader>,
    /// Mentions and ad-style preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_info: Option<ContextInfo>,
    /// Extra native flow parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_params: Option<MessageParams>,
}

impl SendButtonsPayload {
    /// Creates a payload with the given body text and no buttons.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Appends a button in any typed shape.
    #[must_use]
    pub fn with_button(mut self, button: impl Into<ButtonInput>) -> Self {
        self.buttons.push(button.into().into_value());
        self
    }

    /// Appends a raw JSON button, bypassing classification.
    #[must_use]
    pub fn with_raw_button(mut self, button: Value) -> Self {
        self.buttons.push(button);
        self
    }

    /// Sets the footer text.
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Sets the header title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the header subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets an explicit header.
    #[must_use]
    pub fn with_header(mut self, header: InteractiveHeader) -> Self {
        self.header = Some(header);
        self
    }

    /// Sets the context info.
    #[must_use]
    pub fn with_context_info(mut self, context_info: ContextInfo) -> Self {
        self.context_info = Some(context_info);
        self
    }

    /// Sets the extra native flow parameters.
    #[must_use]
    pub fn with_message_params(mut self, params: MessageParams) -> Self {
        self.message_params = Some(params);
        self
    }
}

/// Payload accepted by the power `send_interactive_message` entry point.
///
/// `text` distinguishes absent (`None`) from an explicit `null`
/// (`Some(None)`): the converter keeps a null body text.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::domain::{AuthoringPayload, ButtonKind, NativeFlowButton};
///
/// let payload = AuthoringPayload::new("Pick an action").with_interactive_button(
///     NativeFlowButton::new(ButtonKind::CtaCopy, r#"{"display_text":"Copy","copy_code":"X1"}"#),
/// );
/// assert!(payload.has_interactive_buttons());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoringPayload {
    /// Body text: absent, explicitly null, or a string.
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<Option<String>>,
    /// Footer text; omitted from the message when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Header title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Header subtitle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Explicit header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<InteractiveHeader>,
    /// Mentions and ad-style preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_info: Option<ContextInfo>,
    /// Extra native flow parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_params: Option<MessageParams>,
    /// Canonical buttons to convert, as raw JSON values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive_buttons: Option<Vec<Value>>,
    /// Manually built canonical message, sent without conversion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive_message: Option<InteractiveMessage>,
    /// Further caller fields forwarded to the transport.
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl AuthoringPayload {
    /// Creates a payload with the given body text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(Some(text.into())),
            ..Self::default()
        }
    }

    /// Sets the body text to an explicit null.
    #[must_use]
    pub fn with_null_text(mut self) -> Self {
        self.text = Some(None);
        self
    }

    /// Appends a canonical button.
    #[must_use]
    pub fn with_interactive_button(self, button: NativeFlowButton) -> Self {
        self.with_raw_interactive_button(ButtonInput::Canonical(button).into_value())
    }

    /// Appends a raw JSON button.
    #[must_use]
    pub fn with_raw_interactive_button(mut self, button: Value) -> Self {
        self.interactive_buttons
            .get_or_insert_with(Vec::new)
            .push(button);
        self
    }

    /// Sets the footer text.
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Sets the header title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the header subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets an explicit header.
    #[must_use]
    pub fn with_header(mut self, header: InteractiveHeader) -> Self {
        self.header = Some(header);
        self
    }

    /// Sets the context info.
    #[must_use]
    pub fn with_context_info(mut self, context_info: ContextInfo) -> Self {
        self.context_info = Some(context_info);
        self
    }

    /// Sets the extra native flow parameters.
    #[must_use]
    pub fn with_message_params(mut self, params: MessageParams) -> Self {
        self.message_params = Some(params);
        self
    }

    /// Sets a manually built canonical message.
    #[must_use]
    pub fn with_interactive_message(mut self, message: InteractiveMessage) -> Self {
        self.interactive_message = Some(message);
        self
    }

    /// Adds a passthrough field.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Returns `true` when at least one button awaits conversion.
    #[must_use]
    pub fn has_interactive_buttons(&self) -> bool {
        self.interactive_buttons
            .as_ref()
            .is_some_and(|buttons| !buttons.is_empty())
    }
}

/// Wraps any present value, including `null`, in `Some`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
