//! Validation errors carrying the offending value

use core::fmt;

use super::retry::RetryableErrorExt;

/// The value that failed validation, kept for diagnostics
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Absent,
}

impl fmt::Display for FieldValue {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Absent => f.write_str("<nil>"),
        }
    }
}

impl From<&str> for FieldValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// A field failed a domain constraint
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: u32,
    pub value: FieldValue,
}

impl ValidationError {
    /// Create a validation error for `field`
    #[inline]
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        code: u32,
        value: impl Into<FieldValue>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
            value: value.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Validation error on field '{}': {} (code: {}, value: {})",
            self.field, self.message, self.code, self.value
        )
    }
}

impl std::error::Error for ValidationError {}

impl RetryableErrorExt for ValidationError {
    #[inline]
    fn is_retryable(&self) -> bool {
        false
    }
}
