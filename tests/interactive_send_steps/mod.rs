//! Step definitions for interactive dispatch scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
