//! Given steps for interactive dispatch BDD scenarios.

use std::sync::Arc;

use super::world::InteractiveWorld;
use mockable::DefaultClock;
use nativeflow::interactive::{
    adapters::memory::InMemoryTransport,
    domain::{AuthoringPayload, LegacyButton, NativeFlowButton, SendButtonsPayload},
    services::InteractiveMessageService,
};
use rstest_bdd_macros::given;
use serde_json::json;

#[given("a connected in-memory transport")]
fn connected_transport(world: &mut InteractiveWorld) {
    let transport =
        Arc::new(InMemoryTransport::new(DefaultClock).with_sender("15559990000@s.whatsapp.net"));
    world.service = Some(InteractiveMessageService::new(
        Arc::clone(&transport),
        Arc::new(DefaultClock),
    ));
    world.transport = Some(transport);
}

#[given(r#"a simple payload "{text}" with legacy buttons "{first}" and "{second}""#)]
fn simple_payload_with_legacy_buttons(
    world: &mut InteractiveWorld,
    text: String,
    first: String,
    second: String,
) {
    let first_label = format!("Option {first}");
    let second_label = format!("Option {second}");
    world.pending_simple = Some(
        SendButtonsPayload::new(text)
            .with_button(LegacyButton::new(first, first_label))
            .with_button(LegacyButton::new(second, second_label)),
    );
}

#[given(r#"a simple payload "{text}" with a "{kind}" button"#)]
fn simple_payload_with_named_button(world: &mut InteractiveWorld, text: String, kind: String) {
    world.pending_simple = Some(SendButtonsPayload::new(text).with_button(
        NativeFlowButton::named(kind, r#"{"display_text":"Tap","id":"tap"}"#),
    ));
}

#[given(r#"an interactive payload "{text}" with a "{kind}" button copying "{code}""#)]
fn interactive_payload_with_copy_button(
    world: &mut InteractiveWorld,
    text: String,
    kind: String,
    code: String,
) {
    let params = json!({"display_text": "Copy Code", "copy_code": code}).to_string();
    world.pending_interactive = Some(
        AuthoringPayload::new(text).with_interactive_button(NativeFlowButton::named(kind, params)),
    );
}

#[given(r#"an interactive payload "{text}" with a "{kind}" button lacking its url"#)]
fn interactive_payload_without_url(world: &mut InteractiveWorld, text: String, kind: String) {
    world.pending_interactive = Some(AuthoringPayload::new(text).with_interactive_button(
        NativeFlowButton::named(kind, r#"{"display_text":"Visit"}"#),
    ));
}

#[given(r#"an interactive payload "{text}" with an "{kind}" button titled "{title}" but no link"#)]
fn interactive_payload_without_link(
    world: &mut InteractiveWorld,
    text: String,
    kind: String,
    title: String,
) {
    let params = json!({ "title": title }).to_string();
    world.pending_interactive = Some(
        AuthoringPayload::new(text).with_interactive_button(NativeFlowButton::named(kind, params)),
    );
}
