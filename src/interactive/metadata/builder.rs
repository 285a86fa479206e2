//! Derivation of the `biz` metadata node from normalized content.

use crate::interactive::domain::{BinaryNode, ButtonKind, NormalizedContent};

use super::ButtonType;

const BIZ: &str = "biz";
const INTERACTIVE: &str = "interactive";
const NATIVE_FLOW: &str = "native_flow";
const ORDER_DETAILS: &str = "order_details";

/// Classifies normalized content as list, buttons or native flow.
///
/// Returns `None` for non-interactive content.
#[must_use]
pub fn button_type(content: &NormalizedContent) -> Option<ButtonType> {
    if content.list_message.is_some() {
        Some(ButtonType::List)
    } else if content.buttons_message.is_some() {
        Some(ButtonType::Buttons)
    } else if content.native_flow().is_some() {
        Some(ButtonType::NativeFlow)
    } else {
        None
    }
}

/// Derives the `biz` node announcing how the content should render.
///
/// The leading button decides the shape: payment kinds name the flow
/// directly, specialised kinds get a dedicated `native_flow` node, and any
/// other native flow or buttons message gets the generic `mixed` node.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::domain::{
///     ButtonKind, InteractiveMessage, NativeFlowButton, NativeFlowMessage, NormalizedContent,
/// };
/// use nativeflow::interactive::metadata::derive_button_node;
///
/// let content = NormalizedContent::from(InteractiveMessage::with_native_flow(
///     NativeFlowMessage::new(vec![NativeFlowButton::new(ButtonKind::ReviewAndPay, "{}")]),
/// ));
/// let node = derive_button_node(&content);
/// assert_eq!(node.attr("native_flow_name"), Some("order_details"));
/// assert!(node.content.is_none());
/// ```
#[must_use]
pub fn derive_button_node(content: &NormalizedContent) -> BinaryNode {
    let native_flow = content.native_flow();
    let leading_kind = native_flow
        .and_then(|flow| flow.first_button_name())
        .and_then(|name| name.parse::<ButtonKind>().ok());

    match (native_flow, leading_kind) {
        (Some(_), Some(kind)) if kind.is_payment() => {
            let flow_name = if kind == ButtonKind::ReviewAndPay {
                ORDER_DETAILS
            } else {
                kind.as_str()
            };
            BinaryNode::new(BIZ).with_attr("native_flow_name", flow_name)
        }
        (Some(_), Some(kind)) if kind.is_native_flow_special() => {
            interactive_node(native_flow_node("2", kind.as_str()))
        }
        _ if native_flow.is_some() || content.buttons_message.is_some() => {
            interactive_node(native_flow_node("9", "mixed"))
        }
        _ if content.list_message.is_some() => BinaryNode::new(BIZ).with_child(
            BinaryNode::new("list")
                .with_attr("v", "2")
                .with_attr("type", "product_list"),
        ),
        _ => BinaryNode::new(BIZ),
    }
}

/// The node marking a direct chat as eligible for bot-style rendering.
#[must_use]
pub fn bot_node() -> BinaryNode {
    BinaryNode::new("bot").with_attr("biz_bot", "1")
}

/// Builds the full metadata node list for a relay.
///
/// Caller nodes come first. For interactive content the derived node is
/// appended, followed by the bot node when the chat is direct.
#[must_use]
pub fn relay_nodes(
    content: &NormalizedContent,
    is_group: bool,
    caller_nodes: Vec<BinaryNode>,
) -> Vec<BinaryNode> {
    let mut nodes = caller_nodes;
    if button_type(content).is_some() {
        nodes.push(derive_button_node(content));
        if !is_group {
            nodes.push(bot_node());
        }
    }
    nodes
}

fn interactive_node(native_flow: BinaryNode) -> BinaryNode {
    BinaryNode::new(BIZ).with_child(
        BinaryNode::new(INTERACTIVE)
            .with_attr("type", NATIVE_FLOW)
            .with_attr("v", "1")
            .with_child(native_flow),
    )
}

fn native_flow_node(version: &str, name: &str) -> BinaryNode {
    BinaryNode::new(NATIVE_FLOW)
        .with_attr("v", version)
        .with_attr("name", name)
}
