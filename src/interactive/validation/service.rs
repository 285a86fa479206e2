//! Validation service implementation.
//!
//! Provides the default implementation of the `PayloadValidator` port,
//! wiring the individual validators to a shared configuration.

use serde_json::Value;

use crate::interactive::{
    domain::{AuthoringPayload, OutgoingContent, SendButtonsPayload},
    ports::validator::{ButtonValidation, PayloadValidator, ValidationConfig, ValidationReport},
    validation::{buttons, content, payload},
};

/// Default implementation of the payload validator.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::domain::{LegacyButton, SendButtonsPayload};
/// use nativeflow::interactive::ports::validator::PayloadValidator;
/// use nativeflow::interactive::validation::service::DefaultPayloadValidator;
///
/// let validator = DefaultPayloadValidator::new();
/// let payload = SendButtonsPayload::new("Pick one").with_button(LegacyButton::new("a", "A"));
/// assert!(validator.validate_send_buttons(&payload).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct DefaultPayloadValidator {
    config: ValidationConfig,
}

impl DefaultPayloadValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl Default for DefaultPayloadValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadValidator for DefaultPayloadValidator {
    fn validate_send_buttons(&self, payload: &SendButtonsPayload) -> ValidationReport {
        payload::validate_send_buttons_payload(payload)
    }

    fn validate_authoring_buttons(&self, buttons: &[Value]) -> ButtonValidation {
        buttons::validate_authoring_buttons(buttons, &self.config)
    }

    fn validate_interactive(&self, payload: &AuthoringPayload) -> ValidationReport {
        payload::validate_interactive_payload(payload, &self.config)
    }

    fn validate_content(&self, content: &mut OutgoingContent) -> ValidationReport {
        content::validate_message_content(content)
    }
}
