//! Interactive message sender.
//!
//! The `InteractiveMessageService` validates caller payloads, converts them
//! to canonical content, derives protocol metadata and hands everything to
//! the transport.

use std::sync::Arc;

use mockable::Clock;
use once_cell::sync::OnceCell;
use serde_json::{Map, Value};

use crate::interactive::{
    conversion::{build_interactive_buttons, convert_to_interactive_message},
    domain::{
        AuthoringPayload, BinaryNode, ButtonInput, SendButtonsPayload, example_payloads,
    },
    error::{ConfigurationError, SendError},
    metadata::{button_type, relay_nodes},
    ports::{
        transport::{
            MaterializeOptions, MessageTransport, ProtocolMessage, RelayOptions, TransportSource,
            UpsertMode,
        },
        validator::{PayloadValidator, ValidationReport},
    },
    validation::DefaultPayloadValidator,
};

/// Per-send relay options.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::domain::BinaryNode;
/// use nativeflow::interactive::services::SendOptions;
///
/// let options = SendOptions::default()
///     .with_node(BinaryNode::new("meta"))
///     .with_message_id("3EB0CUSTOM");
/// assert_eq!(options.additional_nodes.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendOptions {
    /// Metadata nodes placed before the derived ones.
    pub additional_nodes: Vec<BinaryNode>,
    /// Extra stanza attributes.
    pub additional_attributes: Map<String, Value>,
    /// Recipients of a status broadcast.
    pub status_jid_list: Option<Vec<String>>,
    /// Whether cached group metadata may be used.
    pub use_cached_group_metadata: Option<bool>,
    /// Message identifier to use instead of a generated one.
    pub message_id: Option<String>,
}

impl SendOptions {
    /// Appends a caller metadata node.
    #[must_use]
    pub fn with_node(mut self, node: BinaryNode) -> Self {
        self.additional_nodes.push(node);
        self
    }

    /// Adds a stanza attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional_attributes.insert(key.into(), value.into());
        self
    }

    /// Sets the status broadcast recipients.
    #[must_use]
    pub fn with_status_jid_list(mut self, jids: Vec<String>) -> Self {
        self.status_jid_list = Some(jids);
        self
    }

    /// Allows or forbids cached group metadata.
    #[must_use]
    pub const fn with_cached_group_metadata(mut self, enabled: bool) -> Self {
        self.use_cached_group_metadata = Some(enabled);
        self
    }

    /// Overrides the generated message identifier.
    #[must_use]
    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }
}

/// Result type for send operations.
pub type SendResult<T> = Result<T, SendError>;

/// Service sending interactive messages through a transport.
///
/// The transport is loaded from the source on first use and cached for the
/// lifetime of the service; a failed load is retried on the next send.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use mockable::DefaultClock;
/// use nativeflow::interactive::adapters::memory::InMemoryTransport;
/// use nativeflow::interactive::domain::{LegacyButton, SendButtonsPayload};
/// use nativeflow::interactive::services::{InteractiveMessageService, SendOptions};
///
/// # #[tokio::main]
/// # async fn main() {
/// let transport = Arc::new(InMemoryTransport::new(DefaultClock));
/// let service = InteractiveMessageService::new(Arc::clone(&transport), Arc::new(DefaultClock));
///
/// let payload = SendButtonsPayload::new("Pick one")
///     .with_button(LegacyButton::new("a", "A"))
///     .with_button(LegacyButton::new("b", "B"));
/// service
///     .send_buttons("123@g.us", payload, SendOptions::default())
///     .await
///     .expect("send succeeds");
///
/// assert_eq!(transport.relays().len(), 1);
/// # }
/// ```
pub struct InteractiveMessageService<S, K, V = DefaultPayloadValidator>
where
    S: TransportSource,
    K: Clock + Send + Sync,
    V: PayloadValidator,
{
    source: S,
    clock: Arc<K>,
    validator: V,
    transport: OnceCell<Arc<S::Transport>>,
}

impl<S, K> InteractiveMessageService<S, K, DefaultPayloadValidator>
where
    S: TransportSource,
    S::Transport: 'static,
    K: Clock + Send + Sync,
{
    /// Creates a service using the default validator.
    #[must_use]
    pub fn new(source: S, clock: Arc<K>) -> Self {
        Self::with_validator(source, clock, DefaultPayloadValidator::new())
    }
}

impl<S, K, V> InteractiveMessageService<S, K, V>
where
    S: TransportSource,
    S::Transport: 'static,
    K: Clock + Send + Sync,
    V: PayloadValidator,
{
    /// Creates a service using a custom validator.
    #[must_use]
    pub fn with_validator(source: S, clock: Arc<K>, validator: V) -> Self {
        Self {
            source,
            clock,
            validator,
            transport: OnceCell::new(),
        }
    }

    /// Returns the validator in use.
    #[must_use]
    pub const fn validator(&self) -> &V {
        &self.validator
    }

    /// Drops the cached transport so the next send loads it again.
    pub fn reset_transport(&mut self) {
        self.transport.take();
    }

    /// Sends a message built from the simple button payload.
    ///
    /// Legacy `{ id, text }` pairs and `cta_url`, `cta_copy` and `cta_call`
    /// buttons are accepted; everything is normalized to canonical buttons
    /// before delegating to [`Self::send_interactive_message`].
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Validation`] with context `sendButtons.validate`
    /// or `sendButtons.validateButtons` when the payload is invalid, and any
    /// error [`Self::send_interactive_message`] returns.
    pub async fn send_buttons(
        &self,
        jid: &str,
        payload: SendButtonsPayload,
        options: SendOptions,
    ) -> SendResult<ProtocolMessage> {
        ensure_valid(
            self.validator.validate_send_buttons(&payload),
            "Buttons payload invalid",
            "sendButtons.validate",
            example_payloads::send_buttons_example,
        )?;

        let validation = self.validator.validate_authoring_buttons(&payload.buttons);
        ensure_valid(
            validation.report,
            "Authoring button objects invalid",
            "sendButtons.validateButtons",
            example_payloads::send_buttons_example_buttons,
        )?;

        let interactive_buttons = build_interactive_buttons(&validation.cleaned)
            .into_iter()
            .map(ButtonInput::into_value)
            .collect();

        let SendButtonsPayload {
            text,
            footer,
            title,
            subtitle,
            header,
            context_info,
            message_params,
            ..
        } = payload;

        let authoring = AuthoringPayload {
            text: Some(text),
            footer,
            title: title.filter(|value| !value.is_empty()),
            subtitle: subtitle.filter(|value| !value.is_empty()),
            header,
            context_info,
            message_params,
            interactive_buttons: Some(interactive_buttons),
            ..AuthoringPayload::default()
        };

        self.send_interactive_message(jid, authoring, options).await
    }

    /// Sends a message built from the full authoring payload.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Validation`] when the payload or the converted
    /// content is invalid, [`SendError::Configuration`] when no transport
    /// can be loaded, and [`SendError::Transport`] when materializing or
    /// relaying fails. Nothing reaches the transport when validation fails.
    pub async fn send_interactive_message(
        &self,
        jid: &str,
        payload: AuthoringPayload,
        options: SendOptions,
    ) -> SendResult<ProtocolMessage> {
        if payload.interactive_buttons.is_some() {
            ensure_valid(
                self.validator.validate_interactive(&payload),
                "Interactive authoring payload invalid",
                "sendInteractiveMessage.validate",
                example_payloads::send_interactive_message_example,
            )?;
        }

        let mut content = convert_to_interactive_message(payload);
        ensure_valid(
            self.validator.validate_content(&mut content),
            "Converted interactive content invalid",
            "sendInteractiveMessage.validateContent",
            converted_example,
        )?;

        let transport = self.transport()?;
        let SendOptions {
            additional_nodes,
            additional_attributes,
            status_jid_list,
            use_cached_group_metadata,
            message_id: requested_id,
        } = options;

        let user_jid = transport.sender_jid();
        let message_id =
            requested_id.unwrap_or_else(|| transport.generate_message_id(user_jid.as_deref()));
        let materialize_options = MaterializeOptions {
            user_jid,
            message_id,
            timestamp: self.clock.utc(),
        };
        let message = transport
            .materialize(jid, &content, &materialize_options)
            .await?;

        let normalized = transport.normalize_content(&message);
        let is_group = transport.is_group(jid);
        let nodes = relay_nodes(&normalized, is_group, additional_nodes);

        if let Some(kind) = button_type(&normalized) {
            let tags: Vec<&str> = nodes.iter().map(|node| node.tag.as_str()).collect();
            tracing::debug!(
                button_type = %kind,
                nodes = ?tags,
                direct = !is_group,
                "interactive send"
            );
        }

        transport
            .relay(
                jid,
                &message,
                RelayOptions {
                    message_id: message.key.id.clone(),
                    additional_nodes: nodes,
                    additional_attributes,
                    status_jid_list,
                    use_cached_group_metadata,
                },
            )
            .await?;

        if transport.emits_own_events() && !is_group {
            spawn_local_echo(Arc::clone(&transport), message.clone());
        }

        Ok(message)
    }

    fn transport(&self) -> Result<Arc<S::Transport>, ConfigurationError> {
        self.transport
            .get_or_try_init(|| self.source.load())
            .map(Arc::clone)
    }
}

/// Fails with a structured error when the report has errors; logs warnings
/// otherwise.
fn ensure_valid(
    report: ValidationReport,
    message: &str,
    context: &str,
    example: impl FnOnce() -> Value,
) -> SendResult<()> {
    if !report.is_valid() {
        return Err(report
            .into_error(message, context)
            .with_example(example())
            .into());
    }

    if !report.warnings.is_empty() {
        let warnings: Vec<String> = report.warnings.iter().map(ToString::to_string).collect();
        tracing::warn!(context, warnings = ?warnings, "interactive payload warnings");
    }

    Ok(())
}

fn converted_example() -> Value {
    serde_json::to_value(convert_to_interactive_message(
        example_payloads::interactive_authoring_example(),
    ))
    .unwrap_or(Value::Null)
}

/// Records the sent message in local history after the send returns.
///
/// Failures, and the absence of a runtime, are logged and otherwise ignored.
fn spawn_local_echo<T>(transport: Arc<T>, message: ProtocolMessage)
where
    T: MessageTransport + ?Sized + 'static,
{
    let Ok(runtime) = tokio::runtime::Handle::try_current() else {
        tracing::warn!(message_id = %message.key.id, "no async runtime; skipping local echo");
        return;
    };

    runtime.spawn(async move {
        if let Err(err) = transport
            .record_own_message(&message, UpsertMode::Append)
            .await
        {
            tracing::warn!(message_id = %message.key.id, error = %err, "local echo failed");
        }
    });
}
