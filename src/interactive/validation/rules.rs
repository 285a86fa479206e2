//! Per-button rules shared by the authoring validators.

use serde_json::Value;

use crate::interactive::{
    domain::ButtonKind,
    error::ValidationIssue,
    json::{is_truthy, safe_json_parse, truthy_field},
};

/// Parses a button's parameters and checks them against the kind registry.
///
/// Records an error for unparsable JSON, for parameters that are not an
/// object, for every required field that is absent, and for the structural
/// rules of `open_webview` and `single_select`. Returns the parsed value
/// when it is an object.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::validation::rules::parse_button_params;
///
/// let mut errors = Vec::new();
/// parse_button_params("cta_url", r#"{"display_text":"Go"}"#, &mut errors, 0);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].to_string(), "button[0] (cta_url) missing required field 'url'");
/// ```
pub fn parse_button_params(
    name: &str,
    raw: &str,
    errors: &mut Vec<ValidationIssue>,
    index: usize,
) -> Option<Value> {
    let parsed = safe_json_parse(raw, errors, index, name)?;
    let Some(fields) = parsed.as_object() else {
        errors.push(ValidationIssue::ParamsNotObject {
            index,
            name: name.to_owned(),
        });
        return None;
    };

    errors.extend(
        ButtonKind::required_fields_for(name)
            .iter()
            .copied()
            .filter(|field| !fields.contains_key(*field))
            .map(|field| ValidationIssue::MissingRequiredField {
                index,
                name: name.to_owned(),
                field,
            }),
    );

    match name.parse::<ButtonKind>() {
        Ok(ButtonKind::OpenWebview) => check_webview_link(&parsed, errors, index),
        Ok(ButtonKind::SingleSelect) => check_sections(&parsed, errors, index),
        _ => {}
    }

    Some(parsed)
}

fn check_webview_link(params: &Value, errors: &mut Vec<ValidationIssue>, index: usize) {
    let Some(link) = truthy_field(params, "link") else {
        return;
    };
    let has_url = link.is_object() && truthy_field(link, "url").is_some();
    if !has_url {
        errors.push(ValidationIssue::WebviewLinkUrlRequired { index });
    }
}

fn check_sections(params: &Value, errors: &mut Vec<ValidationIssue>, index: usize) {
    let non_empty = params
        .get("sections")
        .and_then(Value::as_array)
        .is_some_and(|sections| !sections.is_empty());
    if !non_empty {
        errors.push(ValidationIssue::EmptySections { index });
    }
}

/// Returns a truthy field as a string slice, or `None` when absent or not a
/// string.
pub(crate) fn truthy_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    truthy_field(value, key).and_then(Value::as_str)
}

/// Renders a field's value for diagnostics.
pub(crate) fn display_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(other) if is_truthy(other) => other.to_string(),
        _ => String::new(),
    }
}
