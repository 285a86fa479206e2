//! In-memory implementation of the `MessageTransport` port.
//!
//! Records every relay and local echo instead of touching the network.
//! Suitable for tests and dry runs only.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use uuid::Uuid;

use crate::interactive::{
    domain::{NormalizedContent, OutgoingContent},
    error::TransportError,
    ports::transport::{
        MaterializeOptions, MessageKey, MessageTransport, ProtocolMessage, RelayOptions,
        TransportResult, UpsertMode,
    },
};

const GROUP_SUFFIX: &str = "@g.us";
const MESSAGE_ID_PREFIX: &str = "3EB0";
const WRAPPER_KEYS: [&str; 4] = [
    "ephemeralMessage",
    "viewOnceMessage",
    "viewOnceMessageV2",
    "documentWithCaptionMessage",
];

/// A relay captured by [`InMemoryTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RelayRecord {
    /// Destination chat.
    pub jid: String,
    /// The relayed message.
    pub message: ProtocolMessage,
    /// Options supplied with the relay.
    pub options: RelayOptions,
    /// When the relay happened.
    pub relayed_at: DateTime<Utc>,
}

/// A local echo captured by [`InMemoryTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct EchoRecord {
    /// The echoed message.
    pub message: ProtocolMessage,
    /// How the echo was recorded.
    pub mode: UpsertMode,
}

#[derive(Debug, Default)]
struct TransportState {
    relays: Vec<RelayRecord>,
    echoes: Vec<EchoRecord>,
}

/// In-memory implementation of [`MessageTransport`].
///
/// Thread-safe via internal [`RwLock`]. Chats ending in `@g.us` are groups.
///
/// # Example
///
/// ```
/// use nativeflow::interactive::adapters::memory::InMemoryTransport;
/// use nativeflow::interactive::ports::transport::MessageTransport;
/// use mockable::DefaultClock;
///
/// let transport = InMemoryTransport::new(DefaultClock).with_sender("me@s.whatsapp.net");
/// assert!(transport.is_group("123-456@g.us"));
/// assert!(transport.generate_message_id(None).starts_with("3EB0"));
/// ```
pub struct InMemoryTransport<C: Clock + Send + Sync> {
    clock: C,
    sender: Option<String>,
    emit_own_events: bool,
    fail_relays: bool,
    state: Arc<RwLock<TransportState>>,
}

impl<C: Clock + Send + Sync> InMemoryTransport<C> {
    /// Creates a transport that accepts every relay.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            sender: None,
            emit_own_events: false,
            fail_relays: false,
            state: Arc::new(RwLock::new(TransportState::default())),
        }
    }

    /// Sets the identity of the connected account.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Asks the sender to echo direct-chat messages into local history.
    #[must_use]
    pub const fn with_own_events(mut self) -> Self {
        self.emit_own_events = true;
        self
    }

    /// Makes every relay fail.
    #[must_use]
    pub const fn failing_relays(mut self) -> Self {
        self.fail_relays = true;
        self
    }

    /// Returns the captured relays in order.
    ///
    /// Returns an empty list if the internal lock is poisoned.
    #[must_use]
    pub fn relays(&self) -> Vec<RelayRecord> {
        self.state
            .read()
            .map(|state| state.relays.clone())
            .unwrap_or_default()
    }

    /// Returns the captured local echoes in order.
    ///
    /// Returns an empty list if the internal lock is poisoned.
    #[must_use]
    pub fn echoes(&self) -> Vec<EchoRecord> {
        self.state
            .read()
            .map(|state| state.echoes.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> MessageTransport for InMemoryTransport<C> {
    async fn materialize(
        &self,
        jid: &str,
        content: &OutgoingContent,
        options: &MaterializeOptions,
    ) -> TransportResult<ProtocolMessage> {
        let message = serde_json::to_value(content)
            .map_err(|err| TransportError::materialize(err.to_string()))?;

        Ok(ProtocolMessage {
            key: MessageKey {
                id: options.message_id.clone(),
                remote_jid: jid.to_owned(),
                from_me: true,
            },
            message,
            message_timestamp: options.timestamp.timestamp(),
        })
    }

    fn normalize_content(&self, message: &ProtocolMessage) -> NormalizedContent {
        let mut inner = &message.message;
        while let Some(wrapped) = WRAPPER_KEYS
            .iter()
            .find_map(|key| inner.get(key).and_then(|wrapper| wrapper.get("message")))
        {
            inner = wrapped;
        }
        serde_json::from_value(inner.clone()).unwrap_or_else(|err| {
            tracing::warn!(
                message_id = %message.key.id,
                error = %err,
                "message content not recognised; relaying without derived nodes"
            );
            NormalizedContent::default()
        })
    }

    fn is_group(&self, jid: &str) -> bool {
        jid.ends_with(GROUP_SUFFIX)
    }

    fn generate_message_id(&self, _sender: Option<&str>) -> String {
        let suffix = Uuid::new_v4().simple().to_string().to_uppercase();
        format!("{MESSAGE_ID_PREFIX}{suffix}")
    }

    fn sender_jid(&self) -> Option<String> {
        self.sender.clone()
    }

    async fn relay(
        &self,
        jid: &str,
        message: &ProtocolMessage,
        options: RelayOptions,
    ) -> TransportResult<()> {
        if self.fail_relays {
            return Err(TransportError::relay(std::io::Error::other(
                "relay rejected by in-memory transport",
            )));
        }

        let record = RelayRecord {
            jid: jid.to_owned(),
            message: message.clone(),
            options,
            relayed_at: self.clock.utc(),
        };
        self.state
            .write()
            .map_err(|err| TransportError::relay(std::io::Error::other(err.to_string())))?
            .relays
            .push(record);
        Ok(())
    }

    fn emits_own_events(&self) -> bool {
        self.emit_own_events
    }

    async fn record_own_message(
        &self,
        message: &ProtocolMessage,
        mode: UpsertMode,
    ) -> TransportResult<()> {
        self.state
            .write()
            .map_err(|err| TransportError::Echo(err.to_string()))?
            .echoes
            .push(EchoRecord {
                message: message.clone(),
                mode,
            });
        Ok(())
    }
}

