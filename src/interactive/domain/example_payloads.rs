//! Worked examples of valid payloads, attached to validation errors.

use serde_json::{Value, json};

use super::button::NativeFlowButton;
use super::kind::ButtonKind;
use super::payload::AuthoringPayload;

/// Example payload for `send_buttons`.
#[must_use]
pub fn send_buttons_example() -> Value {
    json!({
        "text": "Choose an option",
        "buttons": send_buttons_example_buttons(),
        "footer": "Footer text",
    })
}

/// Example button list for `send_buttons`, mixing both accepted shapes.
#[must_use]
pub fn send_buttons_example_buttons() -> Value {
    json!([
        { "id": "opt1", "text": "Option 1" },
        { "id": "opt2", "text": "Option 2" },
        {
            "name": "cta_url",
            "buttonParamsJson": r#"{"display_text":"Visit Site","url":"https://example.com"}"#,
        },
    ])
}

/// Example payload for `send_interactive_message`.
#[must_use]
pub fn interactive_authoring_example() -> AuthoringPayload {
    AuthoringPayload::new("Pick an action")
        .with_interactive_button(NativeFlowButton::new(
            ButtonKind::QuickReply,
            r#"{"display_text":"Hello","id":"hello"}"#,
        ))
        .with_interactive_button(NativeFlowButton::new(
            ButtonKind::CtaCopy,
            r#"{"display_text":"Copy Code","copy_code":"ABC123"}"#,
        ))
        .with_footer("Footer")
}

/// [`interactive_authoring_example`] as JSON.
#[must_use]
pub fn send_interactive_message_example() -> Value {
    serde_json::to_value(interactive_authoring_example()).unwrap_or(Value::Null)
}
