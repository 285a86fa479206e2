//! Authoring payload to canonical content conversion.

use serde_json::Value;

use crate::interactive::domain::{
    AuthoringPayload, Body, ButtonKind, Footer, InteractiveContent, InteractiveHeader,
    InteractiveMessage, NativeFlowButton, NativeFlowMessage, OutgoingContent,
};
use crate::interactive::json::{safe_json_stringify, truthy_field};

/// Converts an authoring payload into canonical interactive content.
///
/// A payload without buttons to convert is returned unchanged. Otherwise the
/// authoring-only fields are folded into an [`InteractiveMessage`] and every
/// remaining caller field is kept beside it.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::conversion::convert_to_interactive_message;
/// use nativeflow::interactive::domain::{AuthoringPayload, OutgoingContent};
///
/// let payload = AuthoringPayload::new("No buttons here");
/// assert!(matches!(
///     convert_to_interactive_message(payload),
///     OutgoingContent::Unchanged(_)
/// ));
/// ```
#[must_use]
pub fn convert_to_interactive_message(payload: AuthoringPayload) -> OutgoingContent {
    if !payload.has_interactive_buttons() {
        return OutgoingContent::Unchanged(payload);
    }

    let AuthoringPayload {
        text,
        footer,
        title,
        subtitle,
        header,
        context_info,
        message_params,
        interactive_buttons,
        extra,
        ..
    } = payload;

    let buttons = interactive_buttons
        .unwrap_or_default()
        .iter()
        .map(to_native_flow_button)
        .collect();
    let mut native_flow = NativeFlowMessage::new(buttons);

    if let Some(params) = message_params.as_ref() {
        native_flow.message_params_json = safe_json_stringify(params);
        if native_flow.message_params_json.is_none() {
            tracing::warn!("message params could not be serialized; omitting messageParamsJson");
        }
    }

    let interactive_message = InteractiveMessage {
        native_flow_message: Some(native_flow),
        header: header.or_else(|| synthesize_header(title.as_deref(), subtitle.as_deref())),
        body: text.map(|body_text| Body { text: body_text }),
        footer: footer
            .filter(|footer_text| !footer_text.is_empty())
            .map(|footer_text| Footer { text: footer_text }),
        context_info,
        extra: serde_json::Map::new(),
    };

    OutgoingContent::Interactive(InteractiveContent {
        interactive_message,
        extra,
    })
}

/// Only a missing or falsy `name` defaults to `quick_reply`; any other value
/// is kept, rendered as JSON when it is not a string, for the content
/// validator to judge.
fn to_native_flow_button(raw: &Value) -> NativeFlowButton {
    let name = match truthy_field(raw, "name") {
        Some(Value::String(kind_name)) => kind_name.clone(),
        Some(other) => other.to_string(),
        None => ButtonKind::QuickReply.as_str().to_owned(),
    };
    let params = match raw.get("buttonParamsJson") {
        Some(Value::String(encoded)) => encoded.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    };
    NativeFlowButton::named(name, params)
}

fn synthesize_header(title: Option<&str>, subtitle: Option<&str>) -> Option<InteractiveHeader> {
    let non_empty = |value: &&str| !value.is_empty();
    title
        .filter(non_empty)
        .or_else(|| subtitle.filter(non_empty))
        .map(InteractiveHeader::titled)
}
