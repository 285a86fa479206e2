//! Tests for transport loading, using a mocked transport source.
//!
//! The sender loads its transport lazily: never when validation fails, once
//! for any number of successful sends, and again after a failed load or a
//! reset.

use std::sync::Arc;

use mockable::DefaultClock;
use mockall::mock;
use nativeflow::interactive::{
    adapters::memory::InMemoryTransport,
    domain::{AuthoringPayload, ButtonKind, NativeFlowButton, SendButtonsPayload},
    error::{ConfigurationError, SendError},
    ports::transport::TransportSource,
    services::{InteractiveMessageService, SendOptions},
};

type TestTransport = InMemoryTransport<DefaultClock>;

mock! {
    Source {}

    impl TransportSource for Source {
        type Transport = TestTransport;

        fn load(&self) -> Result<Arc<TestTransport>, ConfigurationError>;
    }
}

fn valid_payload() -> AuthoringPayload {
    AuthoringPayload::new("Pick").with_interactive_button(NativeFlowButton::new(
        ButtonKind::QuickReply,
        r#"{"display_text":"Hello","id":"hello"}"#,
    ))
}

#[tokio::test]
async fn invalid_simple_payload_never_loads_the_transport() {
    let mut source = MockSource::new();
    source.expect_load().never();
    let service = InteractiveMessageService::new(source, Arc::new(DefaultClock));

    let error = service
        .send_buttons("1@s.whatsapp.net", SendButtonsPayload::default(), SendOptions::default())
        .await
        .expect_err("empty payload must fail");

    assert_eq!(
        error.as_validation().and_then(|validation| validation.context()),
        Some("sendButtons.validate")
    );
}

#[tokio::test]
async fn invalid_buttons_never_load_the_transport() {
    let mut source = MockSource::new();
    source.expect_load().never();
    let service = InteractiveMessageService::new(source, Arc::new(DefaultClock));
    let payload = AuthoringPayload::new("Pick").with_raw_interactive_button(serde_json::json!({
        "name": "single_select",
        "buttonParamsJson": r#"{"title":"Menu","sections":[]}"#,
    }));

    let error = service
        .send_interactive_message("1@s.whatsapp.net", payload, SendOptions::default())
        .await
        .expect_err("empty sections must fail");

    assert!(matches!(error, SendError::Validation(_)));
}

#[tokio::test]
async fn transport_is_loaded_once_across_sends() {
    let transport = Arc::new(InMemoryTransport::new(DefaultClock));
    let handed_out = Arc::clone(&transport);
    let mut source = MockSource::new();
    source
        .expect_load()
        .times(1)
        .returning(move || Ok(Arc::clone(&handed_out)));
    let service = InteractiveMessageService::new(source, Arc::new(DefaultClock));

    for _ in 0..3 {
        service
            .send_interactive_message("1@s.whatsapp.net", valid_payload(), SendOptions::default())
            .await
            .expect("send should succeed");
    }

    assert_eq!(transport.relays().len(), 3);
}

#[tokio::test]
async fn failed_load_is_retried_on_the_next_send() {
    let transport = Arc::new(InMemoryTransport::new(DefaultClock));
    let handed_out = Arc::clone(&transport);
    let mut source = MockSource::new();
    let mut sequence = mockall::Sequence::new();
    source
        .expect_load()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|| Err(ConfigurationError::MissingTransport));
    source
        .expect_load()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(move || Ok(Arc::clone(&handed_out)));
    let service = InteractiveMessageService::new(source, Arc::new(DefaultClock));

    let first = service
        .send_interactive_message("1@s.whatsapp.net", valid_payload(), SendOptions::default())
        .await;
    assert!(matches!(
        first,
        Err(SendError::Configuration(ConfigurationError::MissingTransport))
    ));

    service
        .send_interactive_message("1@s.whatsapp.net", valid_payload(), SendOptions::default())
        .await
        .expect("second send should load the transport");
    assert_eq!(transport.relays().len(), 1);
}

#[tokio::test]
async fn reset_transport_forces_a_reload() {
    let transport = Arc::new(InMemoryTransport::new(DefaultClock));
    let handed_out = Arc::clone(&transport);
    let mut source = MockSource::new();
    source
        .expect_load()
        .times(2)
        .returning(move || Ok(Arc::clone(&handed_out)));
    let mut service = InteractiveMessageService::new(source, Arc::new(DefaultClock));

    service
        .send_interactive_message("1@s.whatsapp.net", valid_payload(), SendOptions::default())
        .await
        .expect("first send should succeed");
    service.reset_transport();
    service
        .send_interactive_message("1@s.whatsapp.net", valid_payload(), SendOptions::default())
        .await
        .expect("send after reset should succeed");

    assert_eq!(transport.relays().len(), 2);
}
