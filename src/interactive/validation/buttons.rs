//! Authoring-button pass for the simple send: classifies every entry and
//! repairs canonical-looking buttons that lack a name or carry unencoded
//! parameters.

use serde_json::{Map, Value};

use super::rules::display_field;
use crate::interactive::{
    domain::{ButtonInput, ButtonKind},
    error::{ValidationIssue, ValidationWarning},
    json::truthy_field,
    ports::validator::{ButtonValidation, ValidationConfig, ValidationReport},
};

const LIST: &str = "button";

/// Validates simple-send button objects and returns the cleaned list.
///
/// The cleaned list has one entry per input, classified into a
/// [`ButtonInput`] ready for the normalizer.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::ports::validator::ValidationConfig;
/// use nativeflow::interactive::validation::validate_authoring_buttons;
/// use serde_json::json;
///
/// let validation = validate_authoring_buttons(
///     &[json!({"buttonParamsJson": {"display_text": "Hi", "id": "hi"}})],
///     &ValidationConfig::default(),
/// );
/// assert!(validation.is_valid());
/// assert_eq!(validation.report.warnings.len(), 2);
/// assert!(validation.cleaned[0].as_canonical().is_some());
/// ```
#[must_use]
pub fn validate_authoring_buttons(buttons: &[Value], config: &ValidationConfig) -> ButtonValidation {
    let mut report = ValidationReport::new();

    if buttons.is_empty() {
        report.warn(ValidationWarning::EmptyButtons);
    } else if buttons.len() > config.soft_button_cap {
        report.warn(ValidationWarning::SoftCapExceeded {
            count: buttons.len(),
            cap: config.soft_button_cap,
        });
    }

    let cleaned = buttons
        .iter()
        .enumerate()
        .map(|(index, button)| clean_button(button, index, &mut report))
        .collect();

    ButtonValidation { report, cleaned }
}

fn clean_button(button: &Value, index: usize, report: &mut ValidationReport) -> ButtonInput {
    let Some(fields) = button.as_object() else {
        report.error(ValidationIssue::NotAnObject { list: LIST, index });
        return ButtonInput::Unrecognized(button.clone());
    };

    let name = truthy_field(button, "name");
    let params = truthy_field(button, "buttonParamsJson");

    if let (Some(_), Some(encoded)) = (name, params) {
        match encoded {
            Value::String(raw) => {
                if let Err(error) = serde_json::from_str::<Value>(raw) {
                    report.error(ValidationIssue::InvalidParamsJson {
                        index,
                        name: display_field(button, "name"),
                        reason: error.to_string(),
                    });
                }
            }
            _ => report.error(ValidationIssue::ParamsNotString { list: LIST, index }),
        }
        return ButtonInput::classify(button.clone());
    }

    let is_legacy = ["id", "text", "displayText"]
        .iter()
        .any(|key| truthy_field(button, key).is_some());
    let is_dual_field = truthy_field(button, "buttonId").is_some()
        && button
            .get("buttonText")
            .and_then(|label| truthy_field(label, "displayText"))
            .is_some();
    if is_legacy || is_dual_field {
        return ButtonInput::classify(button.clone());
    }

    if let Some(loose) = params {
        return ButtonInput::classify(repair(fields, loose, index, report));
    }

    report.warn(ValidationWarning::UnrecognizedShape { index });
    ButtonInput::Unrecognized(button.clone())
}

/// Encodes non-string parameters and defaults the missing name.
fn repair(
    fields: &Map<String, Value>,
    params: &Value,
    index: usize,
    report: &mut ValidationReport,
) -> Value {
    let mut repaired = fields.clone();

    match params {
        Value::String(raw) => {
            if let Err(error) = serde_json::from_str::<Value>(raw) {
                report.warn(ValidationWarning::ParamsInvalidJson {
                    list: LIST,
                    index,
                    reason: error.to_string(),
                });
            }
        }
        _ => {
            report.warn(ValidationWarning::ParamsStringified { index });
            repaired.insert(
                "buttonParamsJson".to_owned(),
                Value::String(params.to_string()),
            );
        }
    }

    report.warn(ValidationWarning::NameDefaulted { list: LIST, index });
    repaired.insert(
        "name".to_owned(),
        Value::String(ButtonKind::QuickReply.as_str().to_owned()),
    );

    Value::Object(repaired)
}
