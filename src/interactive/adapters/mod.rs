//! Adapters for the interactive message ports.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTransport`]: records relays and local echoes for tests
//! - [`source::StaticTransportSource`]: hands out a transport supplied at
//!   construction, or reports it missing

pub mod memory;
pub mod source;
