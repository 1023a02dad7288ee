//! Nullable types (`T?`).

use core_types::Value;

use crate::converter::Converter;
use crate::error::WebIdlResult;
use crate::options::ConversionOptions;

/// Converter for `T?`: `null` and `undefined` become `None`, anything else
/// goes through the inner converter.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use webidl::{ConversionOptions, Converter, DomString, NullableConverter};
///
/// let title = NullableConverter::new(DomString);
/// let opts = ConversionOptions::default();
///
/// assert_eq!(title.convert(&Value::Null, &opts).unwrap(), None);
/// assert_eq!(title.convert(&Value::Smi(5), &opts).unwrap(), Some("5".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct NullableConverter<C> {
    inner: C,
}

impl<C: Converter> NullableConverter<C> {
    /// Wrap `inner`
    pub fn new(inner: C) -> Self {
        NullableConverter { inner }
    }
}

impl<C: Converter> Converter for NullableConverter<C> {
    type Output = Option<C::Output>;

    fn convert(
        &self,
        value: &Value,
        options: &ConversionOptions,
    ) -> WebIdlResult<Option<C::Output>> {
        match value {
            Value::Null | Value::Undefined => Ok(None),
            other => self.inner.convert(other, options).map(Some),
        }
    }
}
