//! IDL enumerations.

use std::collections::HashSet;

use core_types::Value;

use crate::converter::Converter;
use crate::error::{make_exception, ErrorCode, WebIdlResult};
use crate::options::ConversionOptions;

/// Converter for an IDL `enum`: accepts exactly the listed strings.
///
/// The value set is built once and never changes, so a converter can be
/// shared freely, across threads included.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use webidl::{ConversionOptions, Converter, EnumConverter};
///
/// let mode = EnumConverter::new("ReadableStreamReaderMode", ["byob"]);
/// let opts = ConversionOptions::default();
///
/// assert_eq!(mode.convert(&"byob".into(), &opts).unwrap(), "byob");
///
/// let err = mode.convert(&"bytes".into(), &opts).unwrap_err();
/// assert_eq!(
///     err.message(),
///     "Value value 'bytes' is not a valid enum value of type ReadableStreamReaderMode."
/// );
/// ```
#[derive(Debug, Clone)]
pub struct EnumConverter {
    name: String,
    values: HashSet<String>,
}

impl EnumConverter {
    /// Create a converter for enum `name` with the allowed `values`
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let values: HashSet<String> = values.into_iter().map(Into::into).collect();
        log::trace!("enum converter {} with {} values", name, values.len());
        EnumConverter { name, values }
    }

    /// The enum's IDL name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `s` is one of the enum's values
    pub fn contains(&self, s: &str) -> bool {
        self.values.contains(s)
    }
}

impl Converter for EnumConverter {
    type Output = String;

    fn convert(&self, value: &Value, options: &ConversionOptions) -> WebIdlResult<String> {
        let s = value.string_value()?;
        if !self.values.contains(&s) {
            let name = &self.name;
            let message = format!("value '{s}' is not a valid enum value of type {name}.");
            let options = options.clone().with_code(ErrorCode::InvalidArgValue);
            return Err(make_exception(&message, &options));
        }
        Ok(s)
    }
}
