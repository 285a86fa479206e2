//! Port definitions for interactive message dispatch.

pub mod transport;
pub mod validator;

pub use transport::{
    MaterializeOptions, MessageKey, MessageTransport, ProtocolMessage, RelayOptions,
    TransportResult, TransportSource, UpsertMode,
};
pub use validator::{ButtonValidation, PayloadValidator, ValidationConfig, ValidationReport};
