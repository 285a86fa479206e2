//! Domain types for interactive messages: button shapes, the kind registry,
//! authoring payloads and canonical content.

pub mod button;
pub mod content;
pub mod context;
pub mod example_payloads;
pub mod header;
pub mod kind;
pub mod node;
pub mod params;
pub mod payload;

pub use button::{ButtonInput, ButtonText, DualFieldButton, LegacyButton, NativeFlowButton};
pub use content::{
    Body, Footer, InteractiveContent, InteractiveMessage, NativeFlowMessage, NormalizedContent,
    OutgoingContent,
};
pub use context::{ContextInfo, ExternalAdReply};
pub use header::{InteractiveHeader, MediaMessage, MediaOptions};
pub use kind::{
    ButtonKind, INTERACTIVE_ALLOWED, KIND_TABLE, KindEntry, NATIVE_FLOW_SPECIALS,
    ParseButtonKindError, SEND_BUTTONS_ALLOWED,
};
pub use node::BinaryNode;
pub use params::{BottomSheet, LimitedTimeOffer, MessageParams, TapTargetConfiguration};
pub use payload::{AuthoringPayload, SendButtonsPayload};
