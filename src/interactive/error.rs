//! Error types for interactive message validation and dispatch.
//!
//! Validation problems are modelled as typed `thiserror` variants so callers
//! can match on them, while their `Display` output provides the diagnostic
//! strings reported back to payload authors.

use serde_json::{Value, json};
use std::sync::Arc;
use thiserror::Error;

/// A single validation failure found in an authoring payload or in
/// converted content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// `text` is absent, null, empty, or not a string.
    #[error("text is mandatory and must be a string")]
    MissingText,

    /// The simple-send `buttons` list is absent or empty.
    #[error("buttons is mandatory and must be a non-empty array")]
    MissingButtons,

    /// The power-send `interactiveButtons` list is absent or empty.
    #[error("interactiveButtons is mandatory and must be a non-empty array")]
    MissingInteractiveButtons,

    /// An entry in the named list is not a JSON object.
    #[error("{list}[{index}] must be an object")]
    NotAnObject {
        /// Label of the list holding the entry.
        list: &'static str,
        /// Position of the entry.
        index: usize,
    },

    /// A legacy quick reply carries a non-string `id` or `text`.
    #[error("button[{index}] legacy quick reply id/text must be strings")]
    LegacyFieldsNotStrings {
        /// Position of the entry.
        index: usize,
    },

    /// A canonical button's kind is not allowed at this entry point.
    #[error("{list}[{index}] name '{name}' not allowed{scope}")]
    KindNotAllowed {
        /// Label of the list holding the entry.
        list: &'static str,
        /// Position of the entry.
        index: usize,
        /// The rejected kind name.
        name: String,
        /// Suffix naming the entry point, empty for the power send.
        scope: &'static str,
    },

    /// An entry has no string `name`.
    #[error("{list}[{index}] missing name")]
    MissingName {
        /// Label of the list holding the entry.
        list: &'static str,
        /// Position of the entry.
        index: usize,
    },

    /// `buttonParamsJson` is absent or not a string.
    #[error("{list}[{index}] buttonParamsJson must be string")]
    ParamsNotString {
        /// Label of the list holding the entry.
        list: &'static str,
        /// Position of the entry.
        index: usize,
    },

    /// `buttonParamsJson` does not parse as JSON.
    #[error("button[{index}] ({name}) invalid JSON: {reason}")]
    InvalidParamsJson {
        /// Position of the entry.
        index: usize,
        /// Kind name of the button.
        name: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// `buttonParamsJson` parses but is not a JSON object.
    #[error("button[{index}] ({name}) buttonParamsJson must encode an object")]
    ParamsNotObject {
        /// Position of the entry.
        index: usize,
        /// Kind name of the button.
        name: String,
    },

    /// A field listed in the kind registry is absent from the parameters.
    #[error("button[{index}] ({name}) missing required field '{field}'")]
    MissingRequiredField {
        /// Position of the entry.
        index: usize,
        /// Kind name of the button.
        name: String,
        /// The absent field.
        field: &'static str,
    },

    /// An `open_webview` link is not an object carrying a `url`.
    #[error("button[{index}] (open_webview) link.url required")]
    WebviewLinkUrlRequired {
        /// Position of the entry.
        index: usize,
    },

    /// A `single_select` button has no sections.
    #[error("button[{index}] (single_select) sections must be non-empty array")]
    EmptySections {
        /// Position of the entry.
        index: usize,
    },

    /// A simple-send entry matches neither accepted shape.
    #[error("button[{index}] invalid shape (must be legacy quick reply or named {allowed})")]
    InvalidShape {
        /// Position of the entry.
        index: usize,
        /// Comma-separated list of accepted kind names.
        allowed: String,
    },

    /// An interactive message has no native flow section.
    #[error("interactiveMessage.nativeFlowMessage missing")]
    MissingNativeFlow,
}

/// A non-fatal advisory condition raised during validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationWarning {
    /// The authoring button list is empty.
    #[error("buttons array is empty")]
    EmptyButtons,

    /// The authoring button list exceeds the soft cap.
    #[error("buttons count ({count}) exceeds soft cap of {cap}; may be rejected by client")]
    SoftCapExceeded {
        /// Number of buttons supplied.
        count: usize,
        /// Configured soft cap.
        cap: usize,
    },

    /// Non-string parameters were stringified.
    #[error("button[{index}] has non-string buttonParamsJson; will attempt to stringify")]
    ParamsStringified {
        /// Position of the entry.
        index: usize,
    },

    /// Parameters do not parse as JSON but are tolerated.
    #[error("{list}[{index}] buttonParamsJson invalid JSON ({reason})")]
    ParamsInvalidJson {
        /// Label of the list holding the entry.
        list: &'static str,
        /// Position of the entry.
        index: usize,
        /// Parser diagnostic.
        reason: String,
    },

    /// A button without a name was defaulted to `quick_reply`.
    #[error("{list}[{index}] missing name; defaulting to quick_reply")]
    NameDefaulted {
        /// Label of the list holding the entry.
        list: &'static str,
        /// Position of the entry.
        index: usize,
    },

    /// An entry matched no known shape and is forwarded as-is.
    #[error("button[{index}] unrecognized shape; passing through unchanged")]
    UnrecognizedShape {
        /// Position of the entry.
        index: usize,
    },

    /// The canonical button list is empty.
    #[error("nativeFlowMessage.buttons is empty")]
    EmptyNativeFlowButtons,

    /// A canonical button has no parameters.
    #[error("buttons[{index}] missing buttonParamsJson (may fail to render)")]
    MissingParams {
        /// Position of the entry.
        index: usize,
    },
}

/// Structured failure raised when a payload or converted content is invalid.
///
/// Carries the complete error and warning lists gathered in one pass plus an
/// optional worked example of a valid payload for the same entry point.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::error::{InteractiveValidationError, ValidationIssue};
///
/// let error = InteractiveValidationError::new("Buttons payload invalid")
///     .with_context("sendButtons.validate")
///     .with_errors(vec![ValidationIssue::MissingText]);
///
/// assert_eq!(error.errors().len(), 1);
/// assert!(error.format_detailed().contains("text is mandatory"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct InteractiveValidationError {
    message: String,
    context: Option<String>,
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationWarning>,
    example: Option<Value>,
}

impl InteractiveValidationError {
    /// Name reported in detailed and JSON renderings.
    pub const NAME: &'static str = "InteractiveValidationError";

    /// Creates an error with the given summary message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            example: None,
        }
    }

    /// Sets the context label (usually the failing entry point and stage).
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Sets the collected validation errors.
    #[must_use]
    pub fn with_errors(mut self, errors: Vec<ValidationIssue>) -> Self {
        self.errors = errors;
        self
    }

    /// Sets the collected warnings.
    #[must_use]
    pub fn with_warnings(mut self, warnings: Vec<ValidationWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Attaches an example of a valid payload.
    #[must_use]
    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }

    /// Returns the summary message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the context label, if any.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Returns the collected validation errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    /// Returns the collected warnings.
    #[must_use]
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// Returns the example payload, if any.
    #[must_use]
    pub const fn example(&self) -> Option<&Value> {
        self.example.as_ref()
    }

    /// Renders the error as a JSON object for diagnostics.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "name": Self::NAME,
            "message": self.message,
            "context": self.context,
            "errors": self.errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "example": self.example,
        })
    }

    /// Renders a multi-line, human-readable report.
    #[must_use]
    pub fn format_detailed(&self) -> String {
        let mut lines = vec![self.context.as_deref().map_or_else(
            || format!("[{}] {}", Self::NAME, self.message),
            |context| format!("[{}] {} ({context})", Self::NAME, self.message),
        )];

        if !self.errors.is_empty() {
            lines.push("Errors:".to_owned());
            lines.extend(self.errors.iter().map(|error| format!("  - {error}")));
        }

        if !self.warnings.is_empty() {
            lines.push("Warnings:".to_owned());
            lines.extend(self.warnings.iter().map(|warning| format!("  - {warning}")));
        }

        if let Some(example) = self.example.as_ref() {
            lines.push("Example payload:".to_owned());
            lines.push(serde_json::to_string_pretty(example).unwrap_or_else(|_| example.to_string()));
        }

        lines.join("\n")
    }
}

/// Errors raised when the transmission collaborator cannot be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No transport was supplied to the sender.
    #[error("message transport is not configured; supply one when constructing the sender")]
    MissingTransport,

    /// The transport is present but lacks a required capability.
    #[error("message transport is incomplete: {0}")]
    Incomplete(String),
}

/// Errors reported by the transmission collaborator.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Building the protocol message failed.
    #[error("failed to materialize message: {0}")]
    Materialize(String),

    /// Sending the message failed.
    #[error("relay failed: {0}")]
    Relay(Arc<dyn std::error::Error + Send + Sync>),

    /// Recording the sent message locally failed.
    #[error("local echo failed: {0}")]
    Echo(String),
}

impl TransportError {
    /// Creates a relay error from any error type.
    #[must_use]
    pub fn relay(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Relay(Arc::new(err))
    }

    /// Creates a materialization error.
    #[must_use]
    pub fn materialize(message: impl Into<String>) -> Self {
        Self::Materialize(message.into())
    }
}

/// Errors returned by the send entry points.
#[derive(Debug, Clone, Error)]
pub enum SendError {
    /// The payload or converted content failed validation.
    #[error(transparent)]
    Validation(Box<InteractiveValidationError>),

    /// The transport could not be obtained.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The transport failed; propagated unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SendError {
    /// Returns the validation error if this is a `Validation` variant.
    #[must_use]
    pub fn as_validation(&self) -> Option<&InteractiveValidationError> {
        match self {
            Self::Validation(error) => Some(error),
            _ => None,
        }
    }
}

impl From<InteractiveValidationError> for SendError {
    fn from(error: InteractiveValidationError) -> Self {
        Self::Validation(Box::new(error))
    }
}
