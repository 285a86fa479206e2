//! Application services for interactive message dispatch.

pub mod sender;

pub use sender::{InteractiveMessageService, SendOptions, SendResult};
