//! Button shapes accepted from callers and the canonical native flow button.
//!
//! Callers may describe buttons in several historical shapes. [`ButtonInput`]
//! names each of them explicitly and [`ButtonInput::classify`] is the only
//! place that decides which shape a raw JSON value has.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::kind::ButtonKind;
use crate::interactive::json::{is_truthy, truthy_field};

/// Canonical native flow button: a kind name and its serialised parameters.
///
/// An empty string in either field is treated as missing.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::domain::{ButtonKind, NativeFlowButton};
///
/// let button = NativeFlowButton::new(ButtonKind::CtaUrl, r#"{"display_text":"Go","url":"https://example.com"}"#);
/// assert_eq!(button.name, "cta_url");
/// assert_eq!(button.kind(), Some(ButtonKind::CtaUrl));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeFlowButton {
    /// Kind name identifying the button variant.
    #[serde(default)]
    pub name: String,
    /// JSON-encoded parameters whose schema depends on the kind.
    #[serde(default)]
    pub button_params_json: String,
}

impl NativeFlowButton {
    /// Creates a button of a registered kind.
    #[must_use]
    pub fn new(kind: ButtonKind, button_params_json: impl Into<String>) -> Self {
        Self::named(kind.as_str(), button_params_json)
    }

    /// Creates a button with an arbitrary kind name.
    #[must_use]
    pub fn named(name: impl Into<String>, button_params_json: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            button_params_json: button_params_json.into(),
        }
    }

    /// Creates a button by serialising `params` as its parameters.
    ///
    /// # Errors
    ///
    /// Returns the serialisation error if `params` cannot be encoded.
    pub fn with_params<T: Serialize>(kind: ButtonKind, params: &T) -> serde_json::Result<Self> {
        serde_json::to_string(params).map(|encoded| Self::new(kind, encoded))
    }

    /// Returns the registered kind, if the name is known.
    #[must_use]
    pub fn kind(&self) -> Option<ButtonKind> {
        self.name.parse().ok()
    }

    /// Returns `true` when the button has no kind name.
    #[must_use]
    pub const fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }
}

/// Legacy quick reply: `{ id, text }` with an optional `displayText` label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyButton {
    /// Reply identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Button label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Alternative label used when `text` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}

impl LegacyButton {
    /// Creates a legacy quick reply from an identifier and label.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            text: Some(text.into()),
            display_text: None,
        }
    }
}

/// Nested label of an old dual-field button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonText {
    /// Visible label.
    pub display_text: String,
}

/// Old dual-field shape: `{ buttonId, buttonText: { displayText } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DualFieldButton {
    /// Reply identifier.
    pub button_id: String,
    /// Nested label.
    pub button_text: ButtonText,
}

impl DualFieldButton {
    /// Creates a dual-field button.
    #[must_use]
    pub fn new(button_id: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            button_id: button_id.into(),
            button_text: ButtonText {
                display_text: display_text.into(),
            },
        }
    }
}

/// A caller-supplied button, tagged by the shape it was recognised as.
///
/// Serialises back to the shape it was built from, so unrecognised values
/// travel on unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonInput {
    /// Already canonical.
    Canonical(NativeFlowButton),
    /// Legacy quick reply.
    Legacy(LegacyButton),
    /// Old dual-field shape.
    DualField(DualFieldButton),
    /// Anything else, kept verbatim.
    Unrecognized(Value),
}

impl ButtonInput {
    /// Classifies a raw JSON value. First match wins:
    ///
    /// 1. `name` and `buttonParamsJson` both present strings → canonical;
    /// 2. `id` or `text` present → legacy;
    /// 3. `buttonId` and `buttonText.displayText` present → dual field;
    /// 4. otherwise unrecognised.
    ///
    /// Presence follows loose truthiness (see [`is_truthy`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use nativeflow::interactive::domain::ButtonInput;
    /// use serde_json::json;
    ///
    /// assert!(matches!(ButtonInput::classify(json!({"id": "a", "text": "A"})), ButtonInput::Legacy(_)));
    /// assert!(matches!(ButtonInput::classify(json!(42)), ButtonInput::Unrecognized(_)));
    /// ```
    #[must_use]
    pub fn classify(value: Value) -> Self {
        if let (Some(Value::String(name)), Some(Value::String(params))) = (
            truthy_field(&value, "name"),
            truthy_field(&value, "buttonParamsJson"),
        ) {
            return Self::Canonical(NativeFlowButton::named(name.clone(), params.clone()));
        }

        let id = truthy_field(&value, "id");
        let text = truthy_field(&value, "text");
        if id.is_some() || text.is_some() {
            return Self::Legacy(LegacyButton {
                id: id.and_then(label_text),
                text: text.and_then(label_text),
                display_text: truthy_field(&value, "displayText").and_then(label_text),
            });
        }

        let button_id = truthy_field(&value, "buttonId").and_then(label_text);
        let display_text = value
            .get("buttonText")
            .and_then(|nested| truthy_field(nested, "displayText"))
            .and_then(label_text);
        if let (Some(reply_id), Some(label)) = (button_id, display_text) {
            return Self::DualField(DualFieldButton::new(reply_id, label));
        }

        Self::Unrecognized(value)
    }

    /// Returns the canonical button if this input is canonical.
    #[must_use]
    pub const fn as_canonical(&self) -> Option<&NativeFlowButton> {
        match self {
            Self::Canonical(button) => Some(button),
            _ => None,
        }
    }

    /// Converts the input back to the JSON shape it represents.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Canonical(button) => object([
                ("name", Value::String(button.name)),
                ("buttonParamsJson", Value::String(button.button_params_json)),
            ]),
            Self::Legacy(button) => serde_json::to_value(button).unwrap_or(Value::Null),
            Self::DualField(button) => serde_json::to_value(button).unwrap_or(Value::Null),
            Self::Unrecognized(value) => value,
        }
    }
}

impl From<Value> for ButtonInput {
    fn from(value: Value) -> Self {
        Self::classify(value)
    }
}

impl From<NativeFlowButton> for ButtonInput {
    fn from(button: NativeFlowButton) -> Self {
        Self::Canonical(button)
    }
}

impl From<LegacyButton> for ButtonInput {
    fn from(button: LegacyButton) -> Self {
        Self::Legacy(button)
    }
}

impl From<DualFieldButton> for ButtonInput {
    fn from(button: DualFieldButton) -> Self {
        Self::DualField(button)
    }
}

impl Serialize for ButtonInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Canonical(button) => button.serialize(serializer),
            Self::Legacy(button) => button.serialize(serializer),
            Self::DualField(button) => button.serialize(serializer),
            Self::Unrecognized(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ButtonInput {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::classify)
    }
}

/// Renders a present value as a label. Strings are taken verbatim; any
/// other value is rendered as compact JSON.
fn label_text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn object<const N: usize>(fields: [(&str, Value); N]) -> Value {
    Value::Object(
        fields
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect::<Map<String, Value>>(),
    )
}
