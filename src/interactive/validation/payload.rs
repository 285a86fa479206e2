//! Authoring payload validators for the two send entry points.

use serde_json::Value;

use super::rules::{display_field, parse_button_params, truthy_str};
use crate::interactive::{
    domain::{
        AuthoringPayload, ButtonKind, SEND_BUTTONS_ALLOWED, SendButtonsPayload,
        kind::join_kind_names,
    },
    error::{ValidationIssue, ValidationWarning},
    json::truthy_field,
    ports::validator::{ValidationConfig, ValidationReport},
};

const SIMPLE_LIST: &str = "button";
const POWER_LIST: &str = "interactiveButtons";
const SIMPLE_SCOPE: &str = " in sendButtons";

/// Validates a simple-send payload.
///
/// Accepts legacy `{ id, text }` pairs and canonical buttons whose kind is
/// one of `cta_url`, `cta_copy` or `cta_call`. All problems are collected.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::domain::SendButtonsPayload;
/// use nativeflow::interactive::validation::validate_send_buttons_payload;
///
/// let report = validate_send_buttons_payload(&SendButtonsPayload::default());
/// assert_eq!(report.errors.len(), 2);
/// ```
#[must_use]
pub fn validate_send_buttons_payload(payload: &SendButtonsPayload) -> ValidationReport {
    let mut report = ValidationReport::new();

    if payload.text.as_deref().is_none_or(str::is_empty) {
        report.error(ValidationIssue::MissingText);
    }

    if payload.buttons.is_empty() {
        report.error(ValidationIssue::MissingButtons);
        return report;
    }

    for (index, button) in payload.buttons.iter().enumerate() {
        check_simple_button(button, index, &mut report.errors);
    }

    report
}

fn check_simple_button(button: &Value, index: usize, errors: &mut Vec<ValidationIssue>) {
    if !button.is_object() {
        errors.push(ValidationIssue::NotAnObject {
            list: SIMPLE_LIST,
            index,
        });
        return;
    }

    if let (Some(id), Some(text)) = (truthy_field(button, "id"), truthy_field(button, "text")) {
        if !id.is_string() || !text.is_string() {
            errors.push(ValidationIssue::LegacyFieldsNotStrings { index });
        }
        return;
    }

    let (Some(_), Some(params)) = (
        truthy_field(button, "name"),
        truthy_field(button, "buttonParamsJson"),
    ) else {
        errors.push(ValidationIssue::InvalidShape {
            index,
            allowed: join_kind_names(&SEND_BUTTONS_ALLOWED),
        });
        return;
    };

    let Some(name) = allowed_kind(button, ButtonKind::is_send_buttons_allowed) else {
        errors.push(ValidationIssue::KindNotAllowed {
            list: SIMPLE_LIST,
            index,
            name: display_field(button, "name"),
            scope: SIMPLE_SCOPE,
        });
        return;
    };

    let Some(raw) = params.as_str() else {
        errors.push(ValidationIssue::ParamsNotString {
            list: SIMPLE_LIST,
            index,
        });
        return;
    };

    parse_button_params(name.as_str(), raw, errors, index);
}

/// Validates a power-send payload.
///
/// Every entry of `interactiveButtons` must name a kind from the power
/// allow-list and carry parameters satisfying the kind registry. Lists
/// longer than the configured soft cap raise a warning.
#[must_use]
pub fn validate_interactive_payload(
    payload: &AuthoringPayload,
    config: &ValidationConfig,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    let has_text = matches!(payload.text.as_ref(), Some(Some(text)) if !text.is_empty());
    if !has_text {
        report.error(ValidationIssue::MissingText);
    }

    let buttons = match payload.interactive_buttons.as_deref() {
        Some(buttons) if !buttons.is_empty() => buttons,
        _ => {
            report.error(ValidationIssue::MissingInteractiveButtons);
            return report;
        }
    };

    if buttons.len() > config.soft_button_cap {
        report.warn(ValidationWarning::SoftCapExceeded {
            count: buttons.len(),
            cap: config.soft_button_cap,
        });
    }

    for (index, button) in buttons.iter().enumerate() {
        check_power_button(button, index, &mut report.errors);
    }

    report
}

fn check_power_button(button: &Value, index: usize, errors: &mut Vec<ValidationIssue>) {
    if !button.is_object() {
        errors.push(ValidationIssue::NotAnObject {
            list: POWER_LIST,
            index,
        });
        return;
    }

    if truthy_str(button, "name").is_none() {
        errors.push(ValidationIssue::MissingName {
            list: POWER_LIST,
            index,
        });
        return;
    }

    let Some(name) = allowed_kind(button, ButtonKind::is_interactive_allowed) else {
        errors.push(ValidationIssue::KindNotAllowed {
            list: POWER_LIST,
            index,
            name: display_field(button, "name"),
            scope: "",
        });
        return;
    };

    let Some(raw) = truthy_str(button, "buttonParamsJson") else {
        errors.push(ValidationIssue::ParamsNotString {
            list: POWER_LIST,
            index,
        });
        return;
    };

    parse_button_params(name.as_str(), raw, errors, index);
}

/// Returns the button's kind when its name is a string naming an allowed kind.
fn allowed_kind(button: &Value, allowed: impl Fn(ButtonKind) -> bool) -> Option<ButtonKind> {
    truthy_str(button, "name")
        .and_then(|name| name.parse::<ButtonKind>().ok())
        .filter(|kind| allowed(*kind))
}
