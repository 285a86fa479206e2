//! Binary node tree attached to a relayed message as auxiliary metadata.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A protocol metadata node: tag, string attributes and optional children.
///
/// # Examples
///
/// ```
/// use nativeflow::interactive::domain::BinaryNode;
///
/// let node = BinaryNode::new("bot").with_attr("biz_bot", "1");
/// assert_eq!(node.attr("biz_bot"), Some("1"));
/// assert!(node.content.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryNode {
    /// Node tag.
    pub tag: String,
    /// Attributes in key order.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    /// Child nodes, absent for leaves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Self>>,
}

impl BinaryNode {
    /// Creates a leaf node with no attributes.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            content: None,
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.content.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Returns an attribute value.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Returns the children, or an empty slice for leaves.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        self.content.as_deref().unwrap_or_default()
    }

    /// Returns the first child with the given tag.
    #[must_use]
    pub fn child(&self, tag: &str) -> Option<&Self> {
        self.children().iter().find(|node| node.tag == tag)
    }
}
