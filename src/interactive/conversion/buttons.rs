//! Button normalizer: every recognised shape becomes a canonical button.

use serde_json::json;

use crate::interactive::domain::{
    ButtonInput, ButtonKind, DualFieldButton, LegacyButton, NativeFlowButton,
};

/// Normalizes caller buttons into canonical native flow buttons.
///
/// The output has the same length and order as the input. Canonical buttons
/// pass through untouched, legacy and dual-field shapes become
/// `quick_reply` buttons, and unrecognised values are returned as given so
/// the validators can report them.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::conversion::build_interactive_buttons;
/// use nativeflow::interactive::domain::{ButtonInput, LegacyButton};
///
/// let buttons = build_interactive_buttons(&[LegacyButton::new("a", "A").into()]);
/// let canonical = buttons.first().and_then(ButtonInput::as_canonical).expect("canonical");
/// assert_eq!(canonical.name, "quick_reply");
/// assert_eq!(canonical.button_params_json, r#"{"display_text":"A","id":"a"}"#);
/// ```
#[must_use]
pub fn build_interactive_buttons(buttons: &[ButtonInput]) -> Vec<ButtonInput> {
    buttons
        .iter()
        .enumerate()
        .map(|(index, button)| normalize_button(index + 1, button))
        .collect()
}

fn normalize_button(position: usize, button: &ButtonInput) -> ButtonInput {
    match button {
        ButtonInput::Canonical(_) | ButtonInput::Unrecognized(_) => button.clone(),
        ButtonInput::Legacy(legacy) => ButtonInput::Canonical(from_legacy(position, legacy)),
        ButtonInput::DualField(dual) => ButtonInput::Canonical(from_dual_field(dual)),
    }
}

fn from_legacy(position: usize, legacy: &LegacyButton) -> NativeFlowButton {
    let display_text = non_empty(legacy.text.as_deref())
        .or_else(|| non_empty(legacy.display_text.as_deref()))
        .map_or_else(|| format!("Button {position}"), ToOwned::to_owned);
    let id = non_empty(legacy.id.as_deref())
        .map_or_else(|| format!("quick_{position}"), ToOwned::to_owned);
    quick_reply(&display_text, &id)
}

fn from_dual_field(dual: &DualFieldButton) -> NativeFlowButton {
    quick_reply(&dual.button_text.display_text, &dual.button_id)
}

// Keys are inserted in sorted order so the encoding is stable with or
// without `preserve_order`.
fn quick_reply(display_text: &str, id: &str) -> NativeFlowButton {
    let params = json!({ "display_text": display_text, "id": id });
    NativeFlowButton::new(ButtonKind::QuickReply, params.to_string())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
