//! Operations module
//!
//! Runs the demonstrations and reports their failure chains

pub mod demos;
pub mod report;

pub use demos::*;
pub use report::*;
