//! Nativeflow: interactive button messages for a multi-device messaging
//! protocol.
//!
//! This crate turns loosely shaped button payloads into the canonical
//! native flow form clients render, validates them at every boundary and
//! relays them through a pluggable transport together with the metadata
//! nodes the protocol requires.
//!
//! # Architecture
//!
//! Nativeflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure payload and content types with no transport dependencies
//! - **Ports**: Abstract trait interfaces for the messaging client and validators
//! - **Adapters**: Concrete implementations of ports (in-memory transport, sources)
//!
//! # Modules
//!
//! - [`interactive`]: Button normalization, validation, conversion and dispatch

pub mod interactive;
