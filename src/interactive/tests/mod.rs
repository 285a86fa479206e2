//! Unit tests for the interactive module.
//!
//! Tests are organised by pipeline stage: classification and normalization,
//! validation, conversion, metadata derivation and the send service.

mod content_tests;
mod error_tests;
mod metadata_tests;
