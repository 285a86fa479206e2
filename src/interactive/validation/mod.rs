//! Payload and content validation.
//!
//! Authoring payloads are validated strictly before conversion; converted
//! content is validated leniently afterwards. Every validator collects all
//! problems in one pass.

pub mod buttons;
pub mod content;
pub mod payload;
pub mod rules;
pub mod service;

pub use buttons::validate_authoring_buttons;
pub use content::validate_message_content;
pub use payload::{validate_interactive_payload, validate_send_buttons_payload};
pub use service::DefaultPayloadValidator;
