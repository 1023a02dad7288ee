//! JavaScript error types raised by host operations.
//!
//! Host primitives (ToNumber, ToString, iteration) report failures with a
//! [`JsError`] carrying the kind of built-in error the engine would throw.

use std::fmt;

/// The kind of JavaScript error.
///
/// These correspond to JavaScript's built-in error constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Type error (e.g., converting a Symbol to a number)
    TypeError,
    /// Value out of allowed range
    RangeError,
    /// Internal engine error
    InternalError,
}

impl ErrorKind {
    /// Name of the matching JavaScript error constructor.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::TypeError => "TypeError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::InternalError => "InternalError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A JavaScript exception thrown by a host operation.
///
/// # Examples
///
/// ```
/// use core_types::{JsError, ErrorKind};
///
/// let error = JsError::type_error("Cannot convert a Symbol value to a number");
///
/// assert_eq!(error.kind, ErrorKind::TypeError);
/// assert_eq!(error.to_string(), "TypeError: Cannot convert a Symbol value to a number");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl JsError {
    /// Create an error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        JsError {
            kind,
            message: message.into(),
        }
    }

    /// Create a TypeError
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::TypeError, message)
    }

    /// Create a RangeError
    pub fn range_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::RangeError, message)
    }
}

impl fmt::Display for JsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for JsError {}

/// Result type for host operations
pub type JsResult<T> = Result<T, JsError>;
