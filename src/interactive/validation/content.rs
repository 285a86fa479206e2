//! Lenient validation of converted canonical content.

use crate::interactive::{
    domain::{ButtonKind, OutgoingContent},
    error::{ValidationIssue, ValidationWarning},
    ports::validator::ValidationReport,
};

const LIST: &str = "buttons";

/// Validates canonical content after conversion.
///
/// Content without an interactive message is valid. Only a missing native
/// flow section is an error; missing parameters, unparsable parameters and
/// an empty button list are warnings. Buttons without a name are renamed
/// to `quick_reply` in place.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::domain::{
///     InteractiveContent, InteractiveMessage, NativeFlowButton, NativeFlowMessage,
///     OutgoingContent,
/// };
/// use nativeflow::interactive::validation::validate_message_content;
///
/// let mut content = OutgoingContent::Interactive(InteractiveContent {
///     interactive_message: InteractiveMessage::with_native_flow(NativeFlowMessage::new(vec![
///         NativeFlowButton::named("", r#"{"display_text":"A","id":"a"}"#),
///     ])),
///     ..InteractiveContent::default()
/// });
///
/// let report = validate_message_content(&mut content);
/// assert!(report.is_valid());
/// let message = content.interactive_message().expect("interactive");
/// assert_eq!(message.buttons()[0].name, "quick_reply");
/// ```
#[must_use]
pub fn validate_message_content(content: &mut OutgoingContent) -> ValidationReport {
    let mut report = ValidationReport::new();

    let Some(message) = content.interactive_message_mut() else {
        return report;
    };
    let Some(native_flow) = message.native_flow_message.as_mut() else {
        report.error(ValidationIssue::MissingNativeFlow);
        return report;
    };

    if native_flow.buttons.is_empty() {
        report.warn(ValidationWarning::EmptyNativeFlowButtons);
    }

    for (index, button) in native_flow.buttons.iter_mut().enumerate() {
        if button.button_params_json.is_empty() {
            report.warn(ValidationWarning::MissingParams { index });
        } else if let Err(error) =
            serde_json::from_str::<serde_json::Value>(&button.button_params_json)
        {
            report.warn(ValidationWarning::ParamsInvalidJson {
                list: LIST,
                index,
                reason: error.to_string(),
            });
        }

        if button.is_unnamed() {
            report.warn(ValidationWarning::NameDefaulted { list: LIST, index });
            ButtonKind::QuickReply.as_str().clone_into(&mut button.name);
        }
    }

    report
}
