//! Unit tests for payload and content serialization.

use crate::interactive::{
    domain::{
        AuthoringPayload, BinaryNode, BottomSheet, ContextInfo, ExternalAdReply,
        InteractiveMessage, MessageParams, NormalizedContent, OutgoingContent, SendButtonsPayload,
    },
};
use serde_json::json;

#[test]
fn authoring_text_distinguishes_absent_from_null() {
    let absent: AuthoringPayload = serde_json::from_value(json!({})).expect("parses");
    let null: AuthoringPayload = serde_json::from_value(json!({"text": null})).expect("parses");
    let present: AuthoringPayload = serde_json::from_value(json!({"text": "Hi"})).expect("parses");

    assert_eq!(absent.text, None);
    assert_eq!(null.text, Some(None));
    assert_eq!(present.text, Some(Some("Hi".to_owned())));
}

#[test]
fn authoring_payload_keeps_unknown_fields() {
    let payload: AuthoringPayload = serde_json::from_value(json!({
        "text": "Hi",
        "interactiveButtons": [{"name": "quick_reply", "buttonParamsJson": "{}"}],
        "viewOnce": true,
    }))
    .expect("parses");

    assert!(payload.has_interactive_buttons());
    assert_eq!(payload.extra.get("viewOnce"), Some(&json!(true)));
}

#[test]
fn send_buttons_payload_accepts_mixed_button_shapes() {
    let payload: SendButtonsPayload = serde_json::from_value(json!({
        "text": "Choose",
        "buttons": [{"id": "a", "text": "A"}, 5, {"name": "cta_copy", "buttonParamsJson": "{}"}],
    }))
    .expect("heterogeneous buttons still parse");
    assert_eq!(payload.buttons.len(), 3);
}

#[test]
fn unchanged_content_serializes_as_the_payload() {
    let payload = AuthoringPayload::new("plain").with_extra("viewOnce", json!(true));
    let content = OutgoingContent::Unchanged(payload);

    assert!(!content.is_converted());
    assert!(content.interactive_message().is_none());
    assert_eq!(
        serde_json::to_value(&content).expect("serializes"),
        json!({"text": "plain", "viewOnce": true})
    );
}

#[test]
fn normalized_content_reads_protocol_messages() {
    let content: NormalizedContent = serde_json::from_value(json!({
        "interactiveMessage": {
            "nativeFlowMessage": {"buttons": [{"name": "mpm", "buttonParamsJson": "{}"}]},
            "body": {"text": "Hi"},
        },
        "messageContextInfo": {},
    }))
    .expect("parses");

    assert_eq!(
        content.native_flow().and_then(|flow| flow.first_button_name()),
        Some("mpm")
    );
}

#[test]
fn context_info_omits_empty_mentions() {
    let context = ContextInfo::new().with_external_ad_reply(
        ExternalAdReply::new("Flash Sale")
            .with_body("Today only")
            .with_larger_thumbnail(),
    );

    assert_eq!(
        serde_json::to_value(&context).expect("serializes"),
        json!({
            "externalAdReply": {
                "title": "Flash Sale",
                "body": "Today only",
                "mediaType": 1,
                "renderLargerThumbnail": true,
                "showAdAttribution": false,
            },
        })
    );
}

#[test]
fn message_params_report_emptiness() {
    assert!(MessageParams::default().is_empty());
    let params = MessageParams {
        bottom_sheet: Some(BottomSheet {
            in_thread_buttons_limit: Some(2),
            ..BottomSheet::default()
        }),
        ..MessageParams::default()
    };
    assert!(!params.is_empty());
}

#[test]
fn interactive_message_extra_fields_round_trip() {
    let raw = json!({
        "nativeFlowMessage": {"buttons": []},
        "carouselMessage": {"cards": []},
    });
    let message: InteractiveMessage = serde_json::from_value(raw.clone()).expect("parses");

    assert!(message.extra.contains_key("carouselMessage"));
    assert_eq!(serde_json::to_value(&message).expect("serializes"), raw);
}

#[test]
fn binary_node_navigation() {
    let node = BinaryNode::new("biz").with_child(
        BinaryNode::new("interactive")
            .with_attr("type", "native_flow")
            .with_child(BinaryNode::new("native_flow").with_attr("name", "mixed")),
    );

    let nested = node
        .child("interactive")
        .and_then(|interactive| interactive.child("native_flow"));
    assert_eq!(nested.and_then(|leaf| leaf.attr("name")), Some("mixed"));
    assert!(node.child("bot").is_none());
    assert!(BinaryNode::new("bot").children().is_empty());
}
