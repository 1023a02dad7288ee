//! IDL `sequence<T>`.
//!
//! Implements https://webidl.spec.whatwg.org/#es-sequence: the value must be
//! an iterable object; its iterator is drained and every element converted
//! with the element converter.

use core_types::{IteratorResult, JsObject, Value};

use crate::classify::{value_type, ValueType};
use crate::converter::Converter;
use crate::error::{make_exception, WebIdlResult};
use crate::options::ConversionOptions;

const NOT_A_SEQUENCE: &str = "can not be converted to sequence.";

/// Converter for `sequence<T>`, where `T` is handled by `element`.
///
/// Element errors carry the element's position in their context, e.g.
/// `Value[1]`. The source iterator is drained synchronously and must
/// terminate.
///
/// # Examples
///
/// ```
/// use core_types::{JsObject, Value};
/// use webidl::{ConversionOptions, Converter, DomString, SequenceConverter};
///
/// let strings = SequenceConverter::new(DomString);
/// let list = Value::Object(JsObject::array(vec![Value::Smi(1), "two".into()]));
///
/// let out = strings.convert(&list, &ConversionOptions::default()).unwrap();
/// assert_eq!(out, vec!["1".to_string(), "two".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceConverter<C> {
    element: C,
}

impl<C: Converter> SequenceConverter<C> {
    /// Create a sequence converter over `element`
    pub fn new(element: C) -> Self {
        SequenceConverter { element }
    }

    /// The element converter
    pub fn element(&self) -> &C {
        &self.element
    }
}

impl<C: Converter> Converter for SequenceConverter<C> {
    type Output = Vec<C::Output>;

    fn convert(&self, value: &Value, options: &ConversionOptions) -> WebIdlResult<Vec<C::Output>> {
        if value_type(value) != ValueType::Object {
            return Err(make_exception(NOT_A_SEQUENCE, options));
        }
        let Some(mut iter) = value.as_object().and_then(JsObject::get_iterator) else {
            return Err(make_exception(NOT_A_SEQUENCE, options));
        };

        let mut out = Vec::new();
        loop {
            let step = iter.next()?;
            let Some(result) = IteratorResult::from_value(&step) else {
                return Err(make_exception(NOT_A_SEQUENCE, options));
            };
            if result.done {
                break;
            }
            let element_options = options.indexed(out.len());
            log::trace!("sequence element {}", element_options.context_label());
            let element = self.element.convert(&result.value, &element_options)?;
            out.push(element);
        }
        Ok(out)
    }
}
