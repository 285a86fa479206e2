//! Validator port for interactive payloads and converted content.
//!
//! Validation happens at three boundaries: the simple-send payload, the
//! power-send payload and the converted canonical content. Every layer
//! collects all problems before reporting.

use serde_json::Value;

use crate::interactive::{
    domain::{AuthoringPayload, ButtonInput, OutgoingContent, SendButtonsPayload},
    error::{InteractiveValidationError, ValidationIssue, ValidationWarning},
};

/// Errors and warnings gathered in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that block the send.
    pub errors: Vec<ValidationIssue>,
    /// Advisory conditions that are logged only.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns `true` when no error was recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records an error.
    pub fn error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    /// Records a warning.
    pub fn warn(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turns the report into a structured validation error.
    #[must_use]
    pub fn into_error(
        self,
        message: impl Into<String>,
        context: impl Into<String>,
    ) -> InteractiveValidationError {
        InteractiveValidationError::new(message)
            .with_context(context)
            .with_errors(self.errors)
            .with_warnings(self.warnings)
    }
}

/// Report of the authoring-button pass, with the repaired button list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonValidation {
    /// Errors and warnings.
    pub report: ValidationReport,
    /// Buttons classified and repaired, ready for normalisation.
    pub cleaned: Vec<ButtonInput>,
}

impl ButtonValidation {
    /// Returns `true` when no error was recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }
}

/// Port for interactive payload validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect every problem before returning (not fail-fast)
/// - Keep the kind registry as the only source of required fields
/// - Be stateless and thread-safe
pub trait PayloadValidator: Send + Sync {
    /// Validates a simple-send payload.
    fn validate_send_buttons(&self, payload: &SendButtonsPayload) -> ValidationReport;

    /// Validates and repairs the simple-send button objects.
    fn validate_authoring_buttons(&self, buttons: &[Value]) -> ButtonValidation;

    /// Validates a power-send payload that carries buttons to convert.
    fn validate_interactive(&self, payload: &AuthoringPayload) -> ValidationReport;

    /// Validates converted content, defaulting missing button names in place.
    fn validate_content(&self, content: &mut OutgoingContent) -> ValidationReport;
}

/// Configuration for payload validation.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::ports::validator::ValidationConfig;
///
/// assert_eq!(ValidationConfig::default().soft_button_cap, 25);
/// assert_eq!(ValidationConfig::strict().soft_button_cap, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Button count above which a warning is raised.
    pub soft_button_cap: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            soft_button_cap: 25,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration that never warns about button counts.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            soft_button_cap: usize::MAX,
        }
    }

    /// Creates a configuration with a reduced soft cap.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            soft_button_cap: 10,
        }
    }
}
