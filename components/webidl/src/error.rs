//! Coercion errors and the helpers that build them.
//!
//! Every failure a converter reports is a TypeError toward the host, tagged
//! with an [`ErrorCode`]. Messages are assembled here so that all converters
//! share one format:
//!
//! - [`make_exception`]: `"<prefix>: <context> <message>"`
//! - [`invalid_arg_value`]: `"The argument '<name>' is invalid. Received <value>"`

use std::collections::BTreeMap;
use std::fmt;

use core_types::number::number_to_string;
use core_types::{ErrorKind, JsError, Value};
use serde::{Deserialize, Serialize};

use crate::options::ConversionOptions;

/// Longest rendering of a received value before it is cut off
const MAX_INSPECT_LEN: usize = 128;

/// Error-kind tag attached to every coercion error.
///
/// Serializes as its string tag (`"ERR_INVALID_ARG_TYPE"`), so unknown tags
/// round-trip through [`ErrorCode::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorCode {
    /// The value has the wrong fundamental type
    #[default]
    InvalidArgType,
    /// The value has an acceptable type but lies outside the legal domain
    InvalidArgValue,
    /// Fewer arguments were supplied than the operation requires
    MissingArgs,
    /// Any other caller-supplied tag
    Other(String),
}

impl ErrorCode {
    /// The string tag, e.g. `ERR_INVALID_ARG_VALUE`
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::InvalidArgType => "ERR_INVALID_ARG_TYPE",
            ErrorCode::InvalidArgValue => "ERR_INVALID_ARG_VALUE",
            ErrorCode::MissingArgs => "ERR_MISSING_ARGS",
            ErrorCode::Other(code) => code,
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        match code {
            "ERR_INVALID_ARG_TYPE" => ErrorCode::InvalidArgType,
            "ERR_INVALID_ARG_VALUE" => ErrorCode::InvalidArgValue,
            "ERR_MISSING_ARGS" => ErrorCode::MissingArgs,
            other => ErrorCode::Other(other.to_string()),
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        ErrorCode::from(code.as_str())
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A TypeError raised by a converter, with its code and diagnostic fields.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("TypeError [{code}]: {message}")]
pub struct CoercionError {
    code: ErrorCode,
    message: String,
    properties: BTreeMap<String, String>,
}

impl CoercionError {
    /// The error-kind tag
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// The final, fully assembled message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// A diagnostic field attached at construction
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// All diagnostic fields, in key order
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }
}

/// Errors produced by conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WebIdlError {
    /// The value could not be converted to the target IDL type
    #[error(transparent)]
    Coercion(#[from] CoercionError),
    /// A host operation (ToNumber, ToString, iteration) threw
    #[error(transparent)]
    Host(#[from] JsError),
}

impl WebIdlError {
    /// The error-kind tag, for coercion errors
    pub fn code(&self) -> Option<&ErrorCode> {
        match self {
            WebIdlError::Coercion(e) => Some(e.code()),
            WebIdlError::Host(_) => None,
        }
    }

    /// The human-readable message
    pub fn message(&self) -> &str {
        match self {
            WebIdlError::Coercion(e) => e.message(),
            WebIdlError::Host(e) => &e.message,
        }
    }

    /// The exception to throw back into the host
    pub fn into_js_error(self) -> JsError {
        match self {
            WebIdlError::Coercion(e) => JsError::new(ErrorKind::TypeError, e.message),
            WebIdlError::Host(e) => e,
        }
    }
}

/// Result type for conversions
pub type WebIdlResult<T> = Result<T, WebIdlError>;

/// Build a TypeError carrying `message` and extra diagnostic fields.
///
/// A `code` field sets the error code; without one the code is
/// `ERR_INVALID_ARG_TYPE`. All other fields are kept as diagnostics.
///
/// # Examples
///
/// ```
/// use webidl::{coded_type_error, ErrorCode};
///
/// let err = coded_type_error("bad input", [("code", "ERR_INVALID_ARG_VALUE"), ("hint", "x")]);
/// assert_eq!(err.code(), &ErrorCode::InvalidArgValue);
/// assert_eq!(err.property("hint"), Some("x"));
/// ```
pub fn coded_type_error<I, K, V>(message: impl Into<String>, properties: I) -> CoercionError
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut properties: BTreeMap<String, String> = properties
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    let code = properties
        .remove("code")
        .map(ErrorCode::from)
        .unwrap_or_default();
    CoercionError {
        code,
        message: message.into(),
        properties,
    }
}

/// Build the error a converter raises, decorating `message` with the
/// options' prefix and context.
///
/// The context label defaults to `"Value"`; an explicitly empty context
/// drops it along with its trailing space. The code defaults to
/// `ERR_INVALID_ARG_TYPE`.
///
/// # Examples
///
/// ```
/// use webidl::{make_exception, ConversionOptions};
///
/// let err = make_exception("is not of type Blob.", &ConversionOptions::default());
/// assert_eq!(err.message(), "Value is not of type Blob.");
///
/// let opts = ConversionOptions::default()
///     .with_prefix("Failed to execute 'send'")
///     .with_context("Argument 1");
/// let err = make_exception("is not of type Blob.", &opts);
/// assert_eq!(err.message(), "Failed to execute 'send': Argument 1 is not of type Blob.");
/// ```
pub fn make_exception(message: &str, options: &ConversionOptions) -> WebIdlError {
    let prefix = match options.prefix.as_deref() {
        Some(p) if !p.is_empty() => format!("{p}: "),
        _ => String::new(),
    };
    let context = match options.context.as_deref() {
        Some("") => String::new(),
        _ => format!("{} ", options.context_label()),
    };
    let code = options.code.clone().unwrap_or_default();
    let full = format!("{prefix}{context}{message}");
    log::debug!("conversion failed [{code}]: {full}");
    coded_type_error(full, [("code", String::from(code))]).into()
}

/// `ERR_INVALID_ARG_VALUE` for argument `name`, reporting the received value.
///
/// Names containing a dot are reported as properties. The options' prefix,
/// when set, is prepended.
pub fn invalid_arg_value(name: &str, received: &Value, options: &ConversionOptions) -> WebIdlError {
    let kind = if name.contains('.') {
        "property"
    } else {
        "argument"
    };
    let prefix = match options.prefix.as_deref() {
        Some(p) if !p.is_empty() => format!("{p}: "),
        _ => String::new(),
    };
    let message = format!(
        "{prefix}The {kind} '{name}' is invalid. Received {}",
        inspect(received)
    );
    log::debug!("conversion failed [ERR_INVALID_ARG_VALUE]: {message}");
    coded_type_error(message, [("code", "ERR_INVALID_ARG_VALUE"), (kind, name)]).into()
}

/// Render a value for an error message
pub(crate) fn inspect(value: &Value) -> String {
    let rendered = match value {
        Value::String(s) => format!("'{s}'"),
        Value::Double(n) if *n == 0.0 && n.is_sign_negative() => "-0".to_string(),
        Value::Double(n) => number_to_string(*n),
        Value::BigInt(n) => format!("{n}n"),
        Value::Object(o) => format!("[object {}]", o.class_name()),
        Value::NativeFunction(name) => format!("[Function: {name}]"),
        other => other.to_string(),
    };
    if rendered.chars().count() > MAX_INSPECT_LEN {
        let cut: String = rendered.chars().take(MAX_INSPECT_LEN).collect();
        format!("{cut}...")
    } else {
        rendered
    }
}
