//! Error idiom catalogue
//!
//! Each submodule demonstrates one way of producing or classifying errors

pub mod basic;
pub mod database;
pub mod formatted;
pub mod retry;
pub mod sentinel;
pub mod validation;
pub mod wrapping;

pub use basic::{DivisionByZero, divide};
pub use database::DatabaseError;
pub use retry::RetryableErrorExt;
pub use sentinel::Sentinel;
pub use validation::{FieldValue, ValidationError};
