//! Per-call conversion options.
//!
//! Options mirror the extended attributes and error-reporting labels a
//! binding passes along with each argument. They deserialize from the same
//! camelCase record bindings use:
//!
//! ```
//! use webidl::{ConversionOptions, ErrorCode};
//!
//! let opts: ConversionOptions = serde_json::from_str(
//!     r#"{ "enforceRange": true, "context": "Argument 2", "code": "ERR_OUT_OF_RANGE" }"#,
//! ).unwrap();
//!
//! assert!(opts.enforce_range);
//! assert_eq!(opts.context_label(), "Argument 2");
//! assert_eq!(opts.code, Some(ErrorCode::Other("ERR_OUT_OF_RANGE".into())));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

/// Context label used when none is supplied
pub const DEFAULT_CONTEXT: &str = "Value";

/// Options recognized by converters.
///
/// When both `enforce_range` and `clamp` are set, `enforce_range` takes
/// precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversionOptions {
    /// Use the two's-complement signed range
    pub signed: bool,
    /// Reject non-finite and out-of-range integers (`[EnforceRange]`)
    pub enforce_range: bool,
    /// Saturate and round integers (`[Clamp]`)
    pub clamp: bool,
    /// Label naming the value in error messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Text placed before the context in error messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Overrides the default error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl ConversionOptions {
    /// Options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `signed`
    pub fn with_signed(mut self, signed: bool) -> Self {
        self.signed = signed;
        self
    }

    /// Set `enforce_range`
    pub fn with_enforce_range(mut self, enforce_range: bool) -> Self {
        self.enforce_range = enforce_range;
        self
    }

    /// Set `clamp`
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Set the context label
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Set the message prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the error code
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// The context label, `"Value"` when unset
    pub fn context_label(&self) -> &str {
        self.context.as_deref().unwrap_or(DEFAULT_CONTEXT)
    }

    /// Options for the element at `index` of a sequence: the context becomes
    /// `"<context>[<index>]"`, everything else is kept.
    pub fn indexed(&self, index: usize) -> Self {
        let context = format!("{}[{}]", self.context_label(), index);
        self.clone().with_context(context)
    }
}
