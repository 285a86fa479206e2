//! Interactive native flow messages: validation, conversion and dispatch.
//!
//! Callers describe buttons in one of several authoring shapes. This module
//! normalizes them into canonical native flow buttons, validates the payload
//! at each boundary, wraps everything in the nested interactive message the
//! protocol expects and attaches the metadata nodes that make clients render
//! the buttons.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Payloads, button shapes and canonical content ([`domain::AuthoringPayload`], [`domain::ButtonInput`], [`domain::InteractiveMessage`])
//! - **Ports**: Abstract trait interfaces ([`ports::transport::MessageTransport`], [`ports::validator::PayloadValidator`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::InMemoryTransport`], [`adapters::source::StaticTransportSource`])
//! - **Conversion**: Pure transformations from authoring input to canonical content
//! - **Validation**: Strict authoring checks and lenient content checks
//! - **Metadata**: Derivation of the `biz` and `bot` relay nodes
//!
//! # Example
//!
//! ```
//! use nativeflow::interactive::conversion::convert_to_interactive_message;
//! use nativeflow::interactive::domain::{AuthoringPayload, ButtonKind, NativeFlowButton};
//! use nativeflow::interactive::ports::validator::PayloadValidator;
//! use nativeflow::interactive::validation::DefaultPayloadValidator;
//!
//! let payload = AuthoringPayload::new("Pick an action").with_interactive_button(
//!     NativeFlowButton::new(ButtonKind::QuickReply, r#"{"display_text":"Hello","id":"hello"}"#),
//! );
//!
//! let validator = DefaultPayloadValidator::new();
//! assert!(validator.validate_interactive(&payload).is_valid());
//!
//! let mut content = convert_to_interactive_message(payload);
//! assert!(validator.validate_content(&mut content).is_valid());
//! assert_eq!(content.interactive_message().map(|message| message.buttons().len()), Some(1));
//! ```

pub mod adapters;
pub mod conversion;
pub mod domain;
pub mod error;
pub mod json;
pub mod metadata;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
