//! # Pretor Common
//!
//! Foundational utilities shared across the pretor workspace. This crate is
//! the base dependency for the domain crates and deliberately stays small:
//! log formatting helpers, identifier generation and error classification.
//!
//! ## Modules
//!
//! - [`error`] - Error severity classification shared by the domain crates
//! - [`logging`] - Helpers for formatting complex values in tracing output
//! - [`ulid_generator`] - Process-wide monotonic ULID generation

pub mod error;
pub mod logging;
pub mod ulid_generator;

pub use error::ErrorSeverity;
pub use logging::Pretty;
pub use ulid_generator::generate_ulid;
