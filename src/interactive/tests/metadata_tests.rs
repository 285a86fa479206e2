//! Unit tests for relay metadata derivation.

use crate::interactive::{
    domain::{
        BinaryNode, ButtonKind, InteractiveMessage, NativeFlowButton, NativeFlowMessage,
        NormalizedContent,
    },
    metadata::{ButtonType, bot_node, button_type, derive_button_node, relay_nodes},
};
use rstest::rstest;
use serde_json::json;

fn native_flow_led_by(name: &str) -> NormalizedContent {
    NormalizedContent::from(InteractiveMessage::with_native_flow(NativeFlowMessage::new(
        vec![
            NativeFlowButton::named(name, "{}"),
            NativeFlowButton::new(ButtonKind::QuickReply, "{}"),
        ],
    )))
}

fn list_content() -> NormalizedContent {
    NormalizedContent {
        list_message: Some(json!({"title": "Menu"})),
        ..NormalizedContent::default()
    }
}

fn buttons_content() -> NormalizedContent {
    NormalizedContent {
        buttons_message: Some(json!({"contentText": "Pick"})),
        ..NormalizedContent::default()
    }
}

/// Returns `(v, name)` of the nested `biz > interactive > native_flow` node.
fn native_flow_attrs(node: &BinaryNode) -> Option<(&str, &str)> {
    let interactive = node.child("interactive")?;
    assert_eq!(interactive.attr("type"), Some("native_flow"));
    assert_eq!(interactive.attr("v"), Some("1"));
    let native_flow = interactive.child("native_flow")?;
    Some((native_flow.attr("v")?, native_flow.attr("name")?))
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn content_is_classified_by_family() {
    assert_eq!(button_type(&list_content()), Some(ButtonType::List));
    assert_eq!(button_type(&buttons_content()), Some(ButtonType::Buttons));
    assert_eq!(
        button_type(&native_flow_led_by("quick_reply")),
        Some(ButtonType::NativeFlow)
    );
    assert_eq!(button_type(&NormalizedContent::default()), None);
}

#[test]
fn interactive_message_without_native_flow_is_not_interactive() {
    let content = NormalizedContent::from(InteractiveMessage::default());
    assert_eq!(button_type(&content), None);
}

#[test]
fn button_type_displays_protocol_name() {
    assert_eq!(ButtonType::NativeFlow.to_string(), "native_flow");
    assert_eq!(ButtonType::List.as_str(), "list");
}

// ============================================================================
// Derived node
// ============================================================================

#[rstest]
#[case("review_and_pay", "order_details")]
#[case("payment_info", "payment_info")]
fn payment_kinds_name_the_flow_directly(#[case] leading: &str, #[case] flow_name: &str) {
    let node = derive_button_node(&native_flow_led_by(leading));

    assert_eq!(node.tag, "biz");
    assert_eq!(node.attr("native_flow_name"), Some(flow_name));
    assert!(node.children().is_empty());
}

#[rstest]
#[case("mpm")]
#[case("cta_catalog")]
#[case("send_location")]
#[case("call_permission_request")]
#[case("wa_payment_transaction_details")]
#[case("automated_greeting_message_view_catalog")]
fn special_kinds_get_a_dedicated_node(#[case] leading: &str) {
    let node = derive_button_node(&native_flow_led_by(leading));
    assert_eq!(native_flow_attrs(&node), Some(("2", leading)));
}

#[rstest]
#[case(native_flow_led_by("quick_reply"))]
#[case(native_flow_led_by("cta_url"))]
#[case(native_flow_led_by("custom_unknown_kind"))]
#[case(NormalizedContent::from(InteractiveMessage::with_native_flow(NativeFlowMessage::default())))]
#[case(buttons_content())]
fn other_interactive_content_is_mixed(#[case] content: NormalizedContent) {
    let node = derive_button_node(&content);
    assert_eq!(native_flow_attrs(&node), Some(("9", "mixed")));
}

#[test]
fn only_the_leading_button_decides() {
    let content = NormalizedContent::from(InteractiveMessage::with_native_flow(
        NativeFlowMessage::new(vec![
            NativeFlowButton::new(ButtonKind::QuickReply, "{}"),
            NativeFlowButton::new(ButtonKind::Mpm, "{}"),
        ]),
    ));
    assert_eq!(
        native_flow_attrs(&derive_button_node(&content)),
        Some(("9", "mixed"))
    );
}

#[test]
fn list_content_gets_a_product_list_node() {
    let node = derive_button_node(&list_content());
    let list = node.child("list").expect("list child");

    assert_eq!(list.attr("v"), Some("2"));
    assert_eq!(list.attr("type"), Some("product_list"));
}

// ============================================================================
// Relay node list
// ============================================================================

#[test]
fn direct_chats_get_the_bot_node_last() {
    let caller = BinaryNode::new("meta").with_attr("origin", "test");
    let nodes = relay_nodes(&native_flow_led_by("quick_reply"), false, vec![caller.clone()]);

    let tags: Vec<&str> = nodes.iter().map(|node| node.tag.as_str()).collect();
    assert_eq!(tags, vec!["meta", "biz", "bot"]);
    assert_eq!(nodes.first(), Some(&caller));
    assert_eq!(nodes.last(), Some(&bot_node()));
}

#[test]
fn group_chats_get_no_bot_node() {
    let nodes = relay_nodes(&native_flow_led_by("quick_reply"), true, Vec::new());
    let tags: Vec<&str> = nodes.iter().map(|node| node.tag.as_str()).collect();
    assert_eq!(tags, vec!["biz"]);
}

#[test]
fn non_interactive_content_keeps_caller_nodes_only() {
    let caller = vec![BinaryNode::new("meta")];
    assert_eq!(
        relay_nodes(&NormalizedContent::default(), false, caller.clone()),
        caller
    );
}

#[test]
fn bot_node_marks_biz_bot() {
    let node = bot_node();
    assert_eq!(node.tag, "bot");
    assert_eq!(node.attr("biz_bot"), Some("1"));
}
