//! Error handling module
//!
//! Defines the crate error type and its exit codes

pub mod types;

pub use types::*;
