//! The converter abstraction and the fixed scalar converters.
//!
//! A converter turns an arbitrary host [`Value`] into a value of one IDL type
//! or fails with a [`WebIdlError`](crate::WebIdlError). Converters are
//! immutable after construction; calling one never changes its state.

use core_types::Value;

use crate::classify::{value_type, ValueType};
use crate::error::{invalid_arg_value, make_exception, WebIdlResult};
use crate::options::ConversionOptions;

/// Conversion from a host value to an IDL type.
///
/// Closures taking `(&Value, &ConversionOptions)` are converters too, which
/// makes ad-hoc element converters easy to pass to the factories.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use webidl::{ConversionOptions, Converter, DomString, WebIdlResult};
///
/// let shout = |v: &Value, o: &ConversionOptions| -> WebIdlResult<String> {
///     Ok(DomString.convert(v, o)?.to_uppercase())
/// };
/// assert_eq!(shout.convert(&"hi".into(), &ConversionOptions::default()).unwrap(), "HI");
/// ```
pub trait Converter {
    /// The converted IDL value
    type Output;

    /// Convert `value`, labelling errors according to `options`
    fn convert(&self, value: &Value, options: &ConversionOptions) -> WebIdlResult<Self::Output>;
}

impl<F, T> Converter for F
where
    F: Fn(&Value, &ConversionOptions) -> WebIdlResult<T>,
{
    type Output = T;

    fn convert(&self, value: &Value, options: &ConversionOptions) -> WebIdlResult<T> {
        self(value, options)
    }
}

/// The IDL `any` type: every value passes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Any;

impl Converter for Any {
    type Output = Value;

    fn convert(&self, value: &Value, _options: &ConversionOptions) -> WebIdlResult<Value> {
        Ok(value.clone())
    }
}

/// The IDL `DOMString` type.
///
/// Symbols are rejected with `ERR_INVALID_ARG_VALUE`; everything else is
/// converted with `String(value)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomString;

impl Converter for DomString {
    type Output = String;

    fn convert(&self, value: &Value, options: &ConversionOptions) -> WebIdlResult<String> {
        if let Value::Symbol(_) = value {
            return Err(invalid_arg_value("value", value, options));
        }
        Ok(value.to_js_string()?)
    }
}

/// The IDL `boolean` type (ToBoolean); never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boolean;

impl Converter for Boolean {
    type Output = bool;

    fn convert(&self, value: &Value, _options: &ConversionOptions) -> WebIdlResult<bool> {
        Ok(value.is_truthy())
    }
}

/// The IDL `object` type: any Object passes through, primitives are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Object;

impl Converter for Object {
    type Output = Value;

    fn convert(&self, value: &Value, options: &ConversionOptions) -> WebIdlResult<Value> {
        if value_type(value) != ValueType::Object {
            return Err(make_exception("is not an object.", options));
        }
        Ok(value.clone())
    }
}

/// Convert to `any`
pub fn any(value: &Value) -> Value {
    value.clone()
}

/// Convert to `DOMString` with default options
pub fn dom_string(value: &Value) -> WebIdlResult<String> {
    DomString.convert(value, &ConversionOptions::default())
}
