//! Pure conversions from caller input to canonical content.

pub mod buttons;
pub mod message;

pub use buttons::build_interactive_buttons;
pub use message::convert_to_interactive_message;
