//! Transport port: the messaging client that materializes and relays
//! protocol messages.
//!
//! The sender never talks to the network itself. It hands canonical content
//! and derived metadata to a [`MessageTransport`] obtained from a
//! [`TransportSource`] supplied at construction time.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::interactive::{
    domain::{BinaryNode, NormalizedContent, OutgoingContent},
    error::{ConfigurationError, TransportError},
};

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Addressing key of a materialized message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageKey {
    /// Message identifier.
    pub id: String,
    /// Destination chat.
    pub remote_jid: String,
    /// Whether the message was sent by this client.
    pub from_me: bool,
}

/// A fully addressed protocol message ready for relay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolMessage {
    /// Addressing key.
    pub key: MessageKey,
    /// Protocol message body.
    pub message: Value,
    /// Creation time as Unix seconds.
    pub message_timestamp: i64,
}

/// Options for materializing a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Identity of the sending account, if known.
    pub user_jid: Option<String>,
    /// Identifier to assign.
    pub message_id: String,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
}

/// Options passed to [`MessageTransport::relay`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelayOptions {
    /// Identifier of the message being relayed.
    pub message_id: String,
    /// Metadata nodes attached to the stanza.
    pub additional_nodes: Vec<BinaryNode>,
    /// Extra stanza attributes.
    pub additional_attributes: Map<String, Value>,
    /// Recipients of a status broadcast.
    pub status_jid_list: Option<Vec<String>>,
    /// Whether cached group metadata may be used.
    pub use_cached_group_metadata: Option<bool>,
}

/// How a locally echoed message is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertMode {
    /// Appended to history without a notification.
    Append,
    /// Recorded as a new notification.
    Notify,
}

/// Messaging client capabilities required by the sender.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Builds a fully addressed protocol message from canonical content.
    ///
    /// Implementations must not reject unfamiliar content shapes.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Materialize`] if the message cannot be built.
    async fn materialize(
        &self,
        jid: &str,
        content: &OutgoingContent,
        options: &MaterializeOptions,
    ) -> TransportResult<ProtocolMessage>;

    /// Re-derives the normalized content of a materialized message.
    fn normalize_content(&self, message: &ProtocolMessage) -> NormalizedContent;

    /// Returns `true` if the chat is a group.
    fn is_group(&self, jid: &str) -> bool;

    /// Generates a message identifier for the given sender.
    fn generate_message_id(&self, sender: Option<&str>) -> String;

    /// Returns the identity of the connected account, if any.
    fn sender_jid(&self) -> Option<String>;

    /// Sends a materialized message with its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Relay`] on network or protocol failure.
    async fn relay(
        &self,
        jid: &str,
        message: &ProtocolMessage,
        options: RelayOptions,
    ) -> TransportResult<()>;

    /// Whether sent messages should be echoed back into local history.
    fn emits_own_events(&self) -> bool {
        false
    }

    /// Records a sent message in local history.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Echo`] if recording fails.
    async fn record_own_message(
        &self,
        _message: &ProtocolMessage,
        _mode: UpsertMode,
    ) -> TransportResult<()> {
        Ok(())
    }
}

/// Supplies the transport on first use.
pub trait TransportSource: Send + Sync {
    /// Transport type handed out.
    type Transport: MessageTransport + ?Sized;

    /// Loads the transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if no usable transport is available.
    fn load(&self) -> Result<Arc<Self::Transport>, ConfigurationError>;
}

impl<T> TransportSource for Arc<T>
where
    T: MessageTransport + ?Sized,
{
    type Transport = T;

    fn load(&self) -> Result<Arc<T>, ConfigurationError> {
        Ok(Self::clone(self))
    }
}
