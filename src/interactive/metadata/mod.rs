//! Protocol metadata derived from the content being sent.

pub mod builder;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use builder::{bot_node, button_type, derive_button_node, relay_nodes};

/// Interactive family of a message, as seen by the metadata builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonType {
    /// List message.
    List,
    /// Legacy buttons message.
    Buttons,
    /// Native flow interactive message.
    NativeFlow,
}

impl ButtonType {
    /// Returns the protocol name of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Buttons => "buttons",
            Self::NativeFlow => "native_flow",
        }
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
