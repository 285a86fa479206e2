//! Unit tests for validation and send errors.

use crate::interactive::{
    error::{
        ConfigurationError, InteractiveValidationError, SendError, TransportError,
        ValidationIssue, ValidationWarning,
    },
    ports::validator::ValidationReport,
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn failed_report() -> ValidationReport {
    let mut report = ValidationReport::new();
    report.error(ValidationIssue::MissingText);
    report.error(ValidationIssue::NotAnObject {
        list: "button",
        index: 2,
    });
    report.warn(ValidationWarning::EmptyButtons);
    report
}

#[rstest]
fn report_converts_into_structured_error(failed_report: ValidationReport) {
    let error = failed_report.into_error("Buttons payload invalid", "sendButtons.validate");

    assert_eq!(error.to_string(), "Buttons payload invalid");
    assert_eq!(error.message(), "Buttons payload invalid");
    assert_eq!(error.context(), Some("sendButtons.validate"));
    assert_eq!(error.errors().len(), 2);
    assert_eq!(error.warnings(), [ValidationWarning::EmptyButtons]);
    assert!(error.example().is_none());
}

#[rstest]
fn detailed_format_lists_everything(failed_report: ValidationReport) {
    let error = failed_report
        .into_error("Buttons payload invalid", "sendButtons.validate")
        .with_example(json!({"text": "Hi"}));

    let expected = [
        "[InteractiveValidationError] Buttons payload invalid (sendButtons.validate)",
        "Errors:",
        "  - text is mandatory and must be a string",
        "  - button[2] must be an object",
        "Warnings:",
        "  - buttons array is empty",
        "Example payload:",
        "{",
        "  \"text\": \"Hi\"",
        "}",
    ]
    .join("\n");
    assert_eq!(error.format_detailed(), expected);
}

#[test]
fn detailed_format_without_context_or_issues_is_one_line() {
    let error = InteractiveValidationError::new("Nothing to see");
    assert_eq!(
        error.format_detailed(),
        "[InteractiveValidationError] Nothing to see"
    );
}

#[rstest]
fn json_rendering_carries_all_fields(failed_report: ValidationReport) {
    let error = failed_report
        .into_error("Buttons payload invalid", "sendButtons.validate")
        .with_example(json!({"text": "Hi"}));

    assert_eq!(
        error.to_json(),
        json!({
            "name": "InteractiveValidationError",
            "message": "Buttons payload invalid",
            "context": "sendButtons.validate",
            "errors": ["text is mandatory and must be a string", "button[2] must be an object"],
            "warnings": ["buttons array is empty"],
            "example": {"text": "Hi"},
        })
    );
}

#[test]
fn warning_messages_match_diagnostics() {
    assert_eq!(
        ValidationWarning::SoftCapExceeded { count: 30, cap: 25 }.to_string(),
        "buttons count (30) exceeds soft cap of 25; may be rejected by client"
    );
    assert_eq!(
        ValidationWarning::UnrecognizedShape { index: 4 }.to_string(),
        "button[4] unrecognized shape; passing through unchanged"
    );
}

#[test]
fn send_error_exposes_validation_details() {
    let error = SendError::from(InteractiveValidationError::new("Converted interactive content invalid"));

    assert_eq!(error.to_string(), "Converted interactive content invalid");
    assert_eq!(
        error.as_validation().map(InteractiveValidationError::message),
        Some("Converted interactive content invalid")
    );
}

#[test]
fn configuration_and_transport_errors_are_transparent() {
    let missing = SendError::from(ConfigurationError::MissingTransport);
    assert!(missing.as_validation().is_none());
    assert_eq!(
        missing.to_string(),
        "message transport is not configured; supply one when constructing the sender"
    );

    let relay = SendError::from(TransportError::relay(std::io::Error::other("socket closed")));
    assert_eq!(relay.to_string(), "relay failed: socket closed");
}
